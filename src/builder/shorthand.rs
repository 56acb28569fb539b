//! Shorthand entries accepted by the builder and their normalization into nodes.
use super::form_builder::FormBuilder;
use crate::controls::{FormArray, FormControl, FormGroup, Node};
use crate::validation::Validator;
use serde_json::Value;

/// One entry of a builder call, before normalization.
///
/// | Entry | Result |
/// |---|---|
/// | bare value | leaf without validators |
/// | `(value, validator)` / `(value, vec![..])` | leaf with validators |
/// | JSON mapping | nested [`FormGroup`], each entry normalized in turn |
/// | JSON sequence `[v]` | leaf holding `v` |
/// | JSON sequence `[v, ..]` | leaf holding `v`; the rest is discarded |
/// | existing node | passed through unchanged |
#[derive(Debug, Clone)]
pub enum Shorthand {
    Value(Value),
    WithValidators(Value, Vec<Validator>),
    Node(Node),
}

impl Shorthand {
    pub fn into_node(self) -> Node {
        match self {
            Shorthand::Node(node) => node,
            Shorthand::WithValidators(value, validators) => {
                FormControl::with_validators(value, validators).into()
            }
            Shorthand::Value(Value::Object(entries)) => FormBuilder::group(entries).into(),
            Shorthand::Value(Value::Array(items)) => {
                // A multi-element sequence is the `[initial, validators]` form; plain
                // data has no way to carry the validators, so only the value survives.
                if items.len() > 1 {
                    tracing::warn!(
                        discarded = items.len() - 1,
                        "shorthand sequence carries no validators, keeping only its first element"
                    );
                }
                let initial = items.into_iter().next().unwrap_or(Value::Null);
                FormControl::new(initial).into()
            }
            Shorthand::Value(value) => FormControl::new(value).into(),
        }
    }
}

impl From<Value> for Shorthand {
    fn from(value: Value) -> Self {
        Shorthand::Value(value)
    }
}

macro_rules! shorthand_from_scalar {
    ($($t:ty),* $(,)?) => {
        $(
            impl From<$t> for Shorthand {
                fn from(value: $t) -> Self {
                    Shorthand::Value(Value::from(value))
                }
            }
        )*
    };
}

shorthand_from_scalar!(bool, i32, i64, u32, u64, f64, String, &str);

impl<T: Into<Value>> From<(T, Validator)> for Shorthand {
    fn from((value, validator): (T, Validator)) -> Self {
        Shorthand::WithValidators(value.into(), vec![validator])
    }
}

impl<T: Into<Value>> From<(T, Vec<Validator>)> for Shorthand {
    fn from((value, validators): (T, Vec<Validator>)) -> Self {
        Shorthand::WithValidators(value.into(), validators)
    }
}

impl From<Node> for Shorthand {
    fn from(node: Node) -> Self {
        Shorthand::Node(node)
    }
}

impl From<FormControl> for Shorthand {
    fn from(control: FormControl) -> Self {
        Shorthand::Node(control.into())
    }
}

impl From<FormGroup> for Shorthand {
    fn from(group: FormGroup) -> Self {
        Shorthand::Node(group.into())
    }
}

impl From<FormArray> for Shorthand {
    fn from(array: FormArray) -> Self {
        Shorthand::Node(array.into())
    }
}

impl From<Shorthand> for Node {
    fn from(shorthand: Shorthand) -> Self {
        shorthand.into_node()
    }
}
