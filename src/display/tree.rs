use crate::controls::{AbstractControl, Node};
use std::fmt::Write;

/// Renders a control tree as an indented listing for debugging and audits.
///
/// ```text
/// FORM TREE for 'profile':
/// --------------------------------------------------
/// [L1] profile: Group (invalid, touched)
/// |--[L2] name: Control = null (invalid, untouched) errors={"required":true}
/// `--[L2] tags: Array (valid, untouched)
///    `--[L3] 0: Control = "a" (valid, untouched)
/// ```
pub fn format_tree(root_name: &str, root: &Node) -> String {
    let mut printer = TreePrinter { output: String::new() };
    let _ = writeln!(printer.output, "FORM TREE for '{}':", root_name);
    let _ = writeln!(printer.output, "--------------------------------------------------");
    printer.print_node(root_name, root, 1, "", "");
    printer.output
}

struct TreePrinter {
    output: String,
}

impl TreePrinter {
    fn print_node(&mut self, name: &str, node: &Node, level: usize, stem: &str, connector: &str) {
        let state = format!(
            "({}, {})",
            if node.valid() { "valid" } else { "invalid" },
            if node.touched() { "touched" } else { "untouched" },
        );

        match node {
            Node::Control(control) => {
                let _ = write!(
                    self.output,
                    "{}{}[L{}] {}: {} = {} {}",
                    stem, connector, level, name, node.kind(), control.value_ref(), state
                );
                if !control.errors().is_empty() {
                    let errors = serde_json::to_string(control.errors()).unwrap_or_default();
                    let _ = write!(self.output, " errors={}", errors);
                }
                let _ = writeln!(self.output);
            }
            Node::Group(group) => {
                let _ = writeln!(self.output, "{}{}[L{}] {}: {} {}", stem, connector, level, name, node.kind(), state);
                let children: Vec<(String, &Node)> =
                    group.controls().map(|(k, v)| (k.to_string(), v)).collect();
                self.print_children(stem, connector, &children, level);
            }
            Node::Array(array) => {
                let _ = writeln!(self.output, "{}{}[L{}] {}: {} {}", stem, connector, level, name, node.kind(), state);
                let children: Vec<(String, &Node)> =
                    array.controls().iter().enumerate().map(|(i, v)| (i.to_string(), v)).collect();
                self.print_children(stem, connector, &children, level);
            }
        }
    }

    fn print_children(&mut self, stem: &str, connector: &str, children: &[(String, &Node)], level: usize) {
        let child_stem = match connector {
            "" => stem.to_string(),
            "`--" => format!("{}   ", stem),
            _ => format!("{}|  ", stem),
        };
        for (i, (name, child)) in children.iter().enumerate() {
            let is_last = i == children.len() - 1;
            let connector = if is_last { "`--" } else { "|--" };
            self.print_node(name, child, level + 1, &child_stem, connector);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controls::{FormArray, FormControl, FormGroup};
    use crate::validation::rules::required;
    use serde_json::json;

    #[test]
    fn renders_nested_tree() {
        let root = Node::from(FormGroup::new([
            ("name", Node::from(FormControl::with_validators(json!(null), [required()]))),
            ("tags", Node::from(FormArray::new([FormControl::new("a")]))),
        ]));

        let out = format_tree("profile", &root);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "FORM TREE for 'profile':");
        assert_eq!(lines[2], "[L1] profile: Group (invalid, untouched)");
        assert_eq!(
            lines[3],
            "|--[L2] name: Control = null (invalid, untouched) errors={\"required\":true}"
        );
        assert_eq!(lines[4], "`--[L2] tags: Array (valid, untouched)");
        assert_eq!(lines[5], "   `--[L3] 0: Control = \"a\" (valid, untouched)");
    }
}
