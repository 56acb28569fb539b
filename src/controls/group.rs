//! Named composite: a mapping from field name to child node.
use super::abstract_control::{child_path, AbstractControl};
use super::node::Node;
use super::path::ControlContainer;
use crate::validation::ValidationErrors;
use indexmap::IndexMap;
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// A group of uniquely named controls.
///
/// Insertion order drives iteration and the key order of [`value`](AbstractControl::value);
/// lookups are by name only.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormGroup {
    controls: IndexMap<String, Node>,
}

impl FormGroup {
    pub fn new<I, K, N>(controls: I) -> Self
    where
        I: IntoIterator<Item = (K, N)>,
        K: Into<String>,
        N: Into<Node>,
    {
        Self {
            controls: controls.into_iter().map(|(k, n)| (k.into(), n.into())).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.controls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.controls.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.controls.contains_key(name)
    }

    /// Adds a control under `name`. An existing control with that name is
    /// replaced in place and returned.
    pub fn add_control(&mut self, name: impl Into<String>, control: impl Into<Node>) -> Option<Node> {
        self.controls.insert(name.into(), control.into())
    }

    /// Removes and returns the control named `name`, keeping the order of the rest.
    pub fn remove_control(&mut self, name: &str) -> Option<Node> {
        self.controls.shift_remove(name)
    }

    pub fn controls(&self) -> impl Iterator<Item = (&str, &Node)> {
        self.controls.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn controls_mut(&mut self) -> impl Iterator<Item = (&str, &mut Node)> {
        self.controls.iter_mut().map(|(k, v)| (k.as_str(), v))
    }
}

impl ControlContainer for FormGroup {
    fn child(&self, segment: &str) -> Option<&Node> {
        self.controls.get(segment)
    }

    fn child_mut(&mut self, segment: &str) -> Option<&mut Node> {
        self.controls.get_mut(segment)
    }
}

impl AbstractControl for FormGroup {
    fn value(&self) -> Value {
        let map: Map<String, Value> = self
            .controls
            .iter()
            .map(|(name, control)| (name.clone(), control.value()))
            .collect();
        Value::Object(map)
    }

    fn valid(&self) -> bool {
        self.controls.values().all(|c| c.valid())
    }

    fn touched(&self) -> bool {
        self.controls.values().any(|c| c.touched())
    }

    fn dirty(&self) -> bool {
        self.controls.values().any(|c| c.dirty())
    }

    fn reset(&mut self) {
        for control in self.controls.values_mut() {
            control.reset();
        }
    }

    /// Patches each named child present in `value`. Controls not mentioned are
    /// left exactly as they were.
    fn patch_value(&mut self, value: Value) {
        let entries = match value {
            Value::Object(entries) => entries,
            other => {
                tracing::debug!(value = %other, "group patch ignored: expected a mapping");
                return;
            }
        };
        for (name, child_value) in entries {
            match self.controls.get_mut(&name) {
                Some(control) => control.patch_value(child_value),
                None => tracing::debug!(name = %name, "group patch key has no matching control"),
            }
        }
    }

    fn mark_all_as_touched(&mut self) {
        for control in self.controls.values_mut() {
            control.mark_all_as_touched();
        }
    }

    fn collect_errors(&self, path: &str, out: &mut BTreeMap<String, ValidationErrors>) {
        for (name, control) in &self.controls {
            control.collect_errors(&child_path(path, name), out);
        }
    }
}
