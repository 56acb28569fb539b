//! Regular-expression rule.
use super::presence::is_empty_value;
use crate::error::FormError;
use crate::validation::{ValidationErrors, Validator, ValidatorKind};
use regex::Regex;
use serde_json::Value;

/// Compiles `source` and fails with `{pattern: true}` when a non-empty value
/// does not match it.
///
/// Matching is unanchored; include `^...$` to require a full match.
pub fn pattern(source: &str) -> Result<Validator, FormError> {
    let regex = Regex::new(source).map_err(|e| FormError::InvalidPattern {
        pattern: source.to_string(),
        source: e,
    })?;
    Ok(pattern_regex(regex))
}

/// Same as [`pattern`] for an already compiled expression.
pub fn pattern_regex(regex: Regex) -> Validator {
    let kind = ValidatorKind::Pattern(regex.as_str().to_string());
    Validator::from_kind(kind, move |value| {
        if is_empty_value(value) {
            return None;
        }
        let matched = match value {
            Value::String(s) => regex.is_match(s),
            Value::Number(n) => regex.is_match(&n.to_string()),
            Value::Bool(b) => regex.is_match(if *b { "true" } else { "false" }),
            _ => false,
        };
        (!matched).then(|| ValidationErrors::flag("pattern"))
    })
}
