//! Defines the error record produced by validators.
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A structured validation outcome: error code mapped to a diagnostic payload.
///
/// The payload is commonly `true`, but any JSON value is accepted so that
/// externally detected errors (e.g. from a server round-trip) can carry
/// details such as `{"minLength": {"required": 5, "actual": 2}}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ValidationErrors(Map<String, Value>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the single-key record `{code: true}` used by the built-in rules.
    pub fn flag(code: impl Into<String>) -> Self {
        Self::with(code, Value::Bool(true))
    }

    /// Builds a single-key record with an arbitrary payload.
    pub fn with(code: impl Into<String>, payload: Value) -> Self {
        let mut map = Map::new();
        map.insert(code.into(), payload);
        Self(map)
    }

    pub fn insert(&mut self, code: impl Into<String>, payload: Value) -> Option<Value> {
        self.0.insert(code.into(), payload)
    }

    pub fn contains(&self, code: &str) -> bool {
        self.0.contains_key(code)
    }

    pub fn get(&self, code: &str) -> Option<&Value> {
        self.0.get(code)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub(crate) fn clear(&mut self) {
        self.0.clear();
    }
}

impl<K: Into<String>> FromIterator<(K, Value)> for ValidationErrors {
    fn from_iter<I: IntoIterator<Item = (K, Value)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

impl From<ValidationErrors> for Value {
    fn from(errors: ValidationErrors) -> Self {
        Value::Object(errors.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn flag_builds_single_true_entry() {
        let errors = ValidationErrors::flag("required");
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get("required"), Some(&json!(true)));
        assert!(errors.contains("required"));
        assert!(!errors.contains("pattern"));
    }

    #[test]
    fn serializes_as_plain_mapping() {
        let errors: ValidationErrors = [("server", json!("taken")), ("min", json!(true))]
            .into_iter()
            .collect();
        let encoded = serde_json::to_value(&errors).unwrap();
        assert_eq!(encoded, json!({"server": "taken", "min": true}));

        let decoded: ValidationErrors = serde_json::from_value(encoded).unwrap();
        assert_eq!(decoded, errors);
    }
}
