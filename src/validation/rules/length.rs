//! Length rules for strings, sequences and other shapes.
use super::presence::is_empty_value;
use crate::validation::{ValidationErrors, Validator, ValidatorKind};
use serde_json::Value;

fn measured_length(value: &Value) -> usize {
    match value {
        Value::Null => 0,
        Value::String(s) => s.chars().count(),
        Value::Array(items) => items.len(),
        Value::Object(map) => map.len(),
        Value::Number(n) => n.to_string().len(),
        Value::Bool(b) => if *b { 4 } else { 5 },
    }
}

/// Fails with `{minLength: true}` when a non-empty value is shorter than `bound`.
pub fn min_length(bound: usize) -> Validator {
    Validator::from_kind(ValidatorKind::MinLength(bound), move |value| {
        if is_empty_value(value) {
            return None;
        }
        (measured_length(value) < bound).then(|| ValidationErrors::flag("minLength"))
    })
}

/// Fails with `{maxLength: true}` when a value is longer than `bound`.
pub fn max_length(bound: usize) -> Validator {
    Validator::from_kind(ValidatorKind::MaxLength(bound), move |value| {
        if is_empty_value(value) {
            return None;
        }
        (measured_length(value) > bound).then(|| ValidationErrors::flag("maxLength"))
    })
}
