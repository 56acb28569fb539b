//! The tagged variant that lets leaves and composites live in one tree.
use super::abstract_control::AbstractControl;
use super::array::FormArray;
use super::control::FormControl;
use super::group::FormGroup;
use super::path::ControlContainer;
use crate::validation::ValidationErrors;
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;

/// The kind tag of a [`Node`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Control,
    Group,
    Array,
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeKind::Control => write!(f, "Control"),
            NodeKind::Group => write!(f, "Group"),
            NodeKind::Array => write!(f, "Array"),
        }
    }
}

/// Any element of a control tree.
///
/// Composites own their children as `Node`s and act on them through
/// [`AbstractControl`]; the tag is only inspected where the kinds genuinely
/// behave differently.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// A leaf holding one value and its validators.
    Control(FormControl),
    /// Named children.
    Group(FormGroup),
    /// Ordered, index-addressed children.
    Array(FormArray),
}

impl Node {
    pub fn kind(&self) -> NodeKind {
        match self {
            Node::Control(_) => NodeKind::Control,
            Node::Group(_) => NodeKind::Group,
            Node::Array(_) => NodeKind::Array,
        }
    }

    pub fn as_control(&self) -> Option<&FormControl> {
        match self {
            Node::Control(c) => Some(c),
            _ => None,
        }
    }

    pub fn as_control_mut(&mut self) -> Option<&mut FormControl> {
        match self {
            Node::Control(c) => Some(c),
            _ => None,
        }
    }

    pub fn as_group(&self) -> Option<&FormGroup> {
        match self {
            Node::Group(g) => Some(g),
            _ => None,
        }
    }

    pub fn as_group_mut(&mut self) -> Option<&mut FormGroup> {
        match self {
            Node::Group(g) => Some(g),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&FormArray> {
        match self {
            Node::Array(a) => Some(a),
            _ => None,
        }
    }

    pub fn as_array_mut(&mut self) -> Option<&mut FormArray> {
        match self {
            Node::Array(a) => Some(a),
            _ => None,
        }
    }

    /// Resolves a dot path below this node. A leaf has no descendants.
    pub fn get(&self, path: &str) -> Option<&Node> {
        match self {
            Node::Group(g) => g.get(path),
            Node::Array(a) => a.get(path),
            Node::Control(_) => None,
        }
    }

    pub fn get_mut(&mut self, path: &str) -> Option<&mut Node> {
        match self {
            Node::Group(g) => g.get_mut(path),
            Node::Array(a) => a.get_mut(path),
            Node::Control(_) => None,
        }
    }
}

impl AbstractControl for Node {
    fn value(&self) -> Value {
        match self {
            Node::Control(c) => c.value(),
            Node::Group(g) => g.value(),
            Node::Array(a) => a.value(),
        }
    }

    fn valid(&self) -> bool {
        match self {
            Node::Control(c) => c.valid(),
            Node::Group(g) => g.valid(),
            Node::Array(a) => a.valid(),
        }
    }

    fn touched(&self) -> bool {
        match self {
            Node::Control(c) => c.touched(),
            Node::Group(g) => g.touched(),
            Node::Array(a) => a.touched(),
        }
    }

    fn dirty(&self) -> bool {
        match self {
            Node::Control(c) => c.dirty(),
            Node::Group(g) => g.dirty(),
            Node::Array(a) => a.dirty(),
        }
    }

    fn reset(&mut self) {
        match self {
            Node::Control(c) => c.reset(),
            Node::Group(g) => g.reset(),
            Node::Array(a) => a.reset(),
        }
    }

    /// A leaf takes any value as its new value. A composite only accepts the
    /// matching structural shape; anything else is ignored.
    fn patch_value(&mut self, value: Value) {
        match self {
            Node::Control(c) => c.set_value(value),
            Node::Group(g) => g.patch_value(value),
            Node::Array(a) => a.patch_value(value),
        }
    }

    /// Leaves are marked directly; composites recurse.
    fn mark_all_as_touched(&mut self) {
        match self {
            Node::Control(c) => c.mark_as_touched(),
            Node::Group(g) => g.mark_all_as_touched(),
            Node::Array(a) => a.mark_all_as_touched(),
        }
    }

    fn collect_errors(&self, path: &str, out: &mut BTreeMap<String, ValidationErrors>) {
        match self {
            Node::Control(c) => c.collect_errors(path, out),
            Node::Group(g) => g.collect_errors(path, out),
            Node::Array(a) => a.collect_errors(path, out),
        }
    }
}

impl From<FormControl> for Node {
    fn from(control: FormControl) -> Self {
        Node::Control(control)
    }
}

impl From<FormGroup> for Node {
    fn from(group: FormGroup) -> Self {
        Node::Group(group)
    }
}

impl From<FormArray> for Node {
    fn from(array: FormArray) -> Self {
        Node::Array(array)
    }
}
