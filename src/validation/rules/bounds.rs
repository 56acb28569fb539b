//! Numeric range rules.
use super::presence::is_empty_value;
use crate::validation::{ValidationErrors, Validator, ValidatorKind};
use serde_json::Value;

/// Coerces a value to a number for range checks. Numeric strings are parsed and
/// booleans count as 0 or 1; every other shape is not comparable.
fn as_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
        _ => None,
    }
}

/// Fails with `{min: true}` when a non-empty value is below `bound` or is not a number.
pub fn min(bound: f64) -> Validator {
    Validator::from_kind(ValidatorKind::Min(bound), move |value| {
        if is_empty_value(value) {
            return None;
        }
        let ok = as_number(value).is_some_and(|n| n >= bound);
        (!ok).then(|| ValidationErrors::flag("min"))
    })
}

/// Fails with `{max: true}` when a non-empty value is above `bound` or is not a number.
pub fn max(bound: f64) -> Validator {
    Validator::from_kind(ValidatorKind::Max(bound), move |value| {
        if is_empty_value(value) {
            return None;
        }
        let ok = as_number(value).is_some_and(|n| n <= bound);
        (!ok).then(|| ValidationErrors::flag("max"))
    })
}
