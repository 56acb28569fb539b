//! Ordered composite: an index-addressed sequence of child nodes.
use super::abstract_control::{child_path, AbstractControl};
use super::node::Node;
use super::path::ControlContainer;
use crate::validation::ValidationErrors;
use serde_json::Value;
use std::collections::BTreeMap;

/// A sequence of controls. Entries may be of any kind and need not be unique.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormArray {
    controls: Vec<Node>,
}

impl FormArray {
    pub fn new<I, N>(controls: I) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<Node>,
    {
        Self { controls: controls.into_iter().map(Into::into).collect() }
    }

    pub fn len(&self) -> usize {
        self.controls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.controls.is_empty()
    }

    pub fn controls(&self) -> &[Node] {
        &self.controls
    }

    pub fn controls_mut(&mut self) -> impl Iterator<Item = &mut Node> {
        self.controls.iter_mut()
    }

    pub fn at(&self, index: usize) -> Option<&Node> {
        self.controls.get(index)
    }

    pub fn at_mut(&mut self, index: usize) -> Option<&mut Node> {
        self.controls.get_mut(index)
    }

    pub fn push(&mut self, control: impl Into<Node>) {
        self.controls.push(control.into());
    }

    /// Inserts before `index`; an index past the end appends.
    pub fn insert(&mut self, index: usize, control: impl Into<Node>) {
        let index = index.min(self.controls.len());
        self.controls.insert(index, control.into());
    }

    /// Removes and returns the control at `index`, or does nothing if there is none.
    pub fn remove_at(&mut self, index: usize) -> Option<Node> {
        (index < self.controls.len()).then(|| self.controls.remove(index))
    }

    /// Replaces the control at `index` when `0 < index <= len`; otherwise the
    /// control is appended. Index 0 therefore appends rather than replaces.
    pub fn set_control(&mut self, index: usize, control: impl Into<Node>) {
        let control = control.into();
        let len = self.controls.len();
        if index > 0 && index < len {
            self.controls[index] = control;
        } else {
            if index != len {
                tracing::debug!(index, len, "set_control index out of range, appending");
            }
            self.controls.push(control);
        }
    }

    pub fn clear(&mut self) {
        self.controls.clear();
    }
}

impl ControlContainer for FormArray {
    fn child(&self, segment: &str) -> Option<&Node> {
        segment.parse::<usize>().ok().and_then(|i| self.controls.get(i))
    }

    fn child_mut(&mut self, segment: &str) -> Option<&mut Node> {
        segment.parse::<usize>().ok().and_then(move |i| self.controls.get_mut(i))
    }
}

impl AbstractControl for FormArray {
    fn value(&self) -> Value {
        Value::Array(self.controls.iter().map(|c| c.value()).collect())
    }

    fn valid(&self) -> bool {
        self.controls.iter().all(|c| c.valid())
    }

    fn touched(&self) -> bool {
        self.controls.iter().any(|c| c.touched())
    }

    fn dirty(&self) -> bool {
        self.controls.iter().any(|c| c.dirty())
    }

    fn reset(&mut self) {
        for control in &mut self.controls {
            control.reset();
        }
    }

    /// Pairs each element with the control at the same index. Elements past
    /// the end of the array are dropped.
    fn patch_value(&mut self, value: Value) {
        let items = match value {
            Value::Array(items) => items,
            other => {
                tracing::debug!(value = %other, "array patch ignored: expected a sequence");
                return;
            }
        };
        let len = self.controls.len();
        if items.len() > len {
            tracing::debug!(given = items.len(), len, "array patch has more elements than controls");
        }
        for (control, item) in self.controls.iter_mut().zip(items) {
            control.patch_value(item);
        }
    }

    /// Leaf children are marked touched directly; composite children recurse.
    fn mark_all_as_touched(&mut self) {
        for control in &mut self.controls {
            match control {
                Node::Control(leaf) => leaf.mark_as_touched(),
                Node::Group(group) => group.mark_all_as_touched(),
                Node::Array(array) => array.mark_all_as_touched(),
            }
        }
    }

    fn collect_errors(&self, path: &str, out: &mut BTreeMap<String, ValidationErrors>) {
        for (index, control) in self.controls.iter().enumerate() {
            control.collect_errors(&child_path(path, &index.to_string()), out);
        }
    }
}
