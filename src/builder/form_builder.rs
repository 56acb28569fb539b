//! Convenience constructors that build whole trees from shorthand.
use super::shorthand::Shorthand;
use crate::controls::{FormArray, FormControl, FormGroup};
use crate::validation::Validator;
use serde_json::Value;

/// Builds controls, groups and arrays from [`Shorthand`] entries.
pub struct FormBuilder;

impl FormBuilder {
    pub fn control(value: impl Into<Value>, validators: impl IntoIterator<Item = Validator>) -> FormControl {
        FormControl::with_validators(value, validators)
    }

    /// Builds a group, normalizing each entry.
    pub fn group<I, K, S>(controls: I) -> FormGroup
    where
        I: IntoIterator<Item = (K, S)>,
        K: Into<String>,
        S: Into<Shorthand>,
    {
        FormGroup::new(controls.into_iter().map(|(name, entry)| (name, Into::<Shorthand>::into(entry).into_node())))
    }

    /// Builds an array, normalizing each entry in order.
    pub fn array<I, S>(controls: I) -> FormArray
    where
        I: IntoIterator<Item = S>,
        S: Into<Shorthand>,
    {
        FormArray::new(controls.into_iter().map(|entry| Into::<Shorthand>::into(entry).into_node()))
    }
}
