//! Presence rules: the value must be supplied (`required`) or must be literally `true`.
use crate::validation::{ValidationErrors, Validator, ValidatorKind};
use serde_json::Value;

/// Emptiness as the built-in rules understand it: `null`, an empty string or an
/// empty sequence. Numbers, `false` and mappings are never empty.
pub fn is_empty_value(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.is_empty(),
        Value::Array(items) => items.is_empty(),
        _ => false,
    }
}

/// Fails with `{required: true}` when the value is empty.
pub fn required() -> Validator {
    Validator::from_kind(ValidatorKind::Required, |value| {
        is_empty_value(value).then(|| ValidationErrors::flag("required"))
    })
}

/// Fails with `{required: true}` unless the value is the boolean `true`.
/// Intended for consent checkboxes.
pub fn required_true() -> Validator {
    Validator::from_kind(ValidatorKind::RequiredTrue, |value| {
        (value != &Value::Bool(true)).then(|| ValidationErrors::flag("required"))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[case(json!(null), true)]
    #[case(json!(""), true)]
    #[case(json!([]), true)]
    #[case(json!(0), false)]
    #[case(json!(false), false)]
    #[case(json!({}), false)]
    #[case(json!(" "), false)]
    #[case(json!([null]), false)]
    fn emptiness(#[case] value: Value, #[case] expected: bool) {
        assert_eq!(is_empty_value(&value), expected);
    }

    #[rstest]
    #[case(json!("test"), None)]
    #[case(json!(0), None)]
    #[case(json!(false), None)]
    #[case(json!(""), Some("required"))]
    #[case(json!(null), Some("required"))]
    #[case(json!([]), Some("required"))]
    fn required_rule(#[case] value: Value, #[case] code: Option<&str>) {
        assert_eq!(required().validate(&value), code.map(ValidationErrors::flag));
    }

    #[rstest]
    #[case(json!(true), None)]
    #[case(json!(false), Some("required"))]
    #[case(json!("true"), Some("required"))]
    #[case(json!(1), Some("required"))]
    #[case(json!(null), Some("required"))]
    fn required_true_rule(#[case] value: Value, #[case] code: Option<&str>) {
        assert_eq!(required_true().validate(&value), code.map(ValidationErrors::flag));
    }
}
