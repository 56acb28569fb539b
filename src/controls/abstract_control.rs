//! The capability set shared by every node of a control tree.
use crate::error::FormError;
use crate::validation::ValidationErrors;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;

/// Operations every control kind supports.
///
/// Composite nodes implement each operation by delegating to their children
/// and aggregating the results, so callers never need to know the concrete
/// kind of the node they hold. Aggregates are recomputed from the live tree on
/// every call; nothing is cached.
pub trait AbstractControl {
    /// The current value. Composites rebuild it structurally from their children.
    fn value(&self) -> Value;

    fn valid(&self) -> bool;

    fn invalid(&self) -> bool {
        !self.valid()
    }

    /// Whether this leaf, or any leaf below this composite, has been touched.
    fn touched(&self) -> bool;

    fn untouched(&self) -> bool {
        !self.touched()
    }

    /// Whether this leaf, or any leaf below this composite, holds a value that
    /// differs from its reset baseline.
    fn dirty(&self) -> bool;

    /// Restores every leaf to its reset baseline and clears touched flags and errors.
    fn reset(&mut self);

    /// Applies a partial update. Keys or indices without a matching child are ignored.
    fn patch_value(&mut self, value: Value);

    fn mark_all_as_touched(&mut self);

    /// Appends the errors of every invalid leaf, keyed by dot path relative to
    /// the node this was first called on.
    fn collect_errors(&self, path: &str, out: &mut BTreeMap<String, ValidationErrors>);

    fn errors_by_path(&self) -> BTreeMap<String, ValidationErrors> {
        let mut out = BTreeMap::new();
        self.collect_errors("", &mut out);
        out
    }

    /// Deserializes the current value into a typed model.
    fn value_as<T: DeserializeOwned>(&self) -> Result<T, FormError>
    where
        Self: Sized,
    {
        serde_json::from_value(self.value()).map_err(FormError::Deserialize)
    }

    /// Serializes `patch` and applies it with [`patch_value`](Self::patch_value).
    fn patch_from<T: Serialize + ?Sized>(&mut self, patch: &T) -> Result<(), FormError>
    where
        Self: Sized,
    {
        let value = serde_json::to_value(patch).map_err(FormError::Serialize)?;
        self.patch_value(value);
        Ok(())
    }
}

/// Joins a parent path and a child segment with `.`.
pub(crate) fn child_path(parent: &str, segment: &str) -> String {
    if parent.is_empty() {
        segment.to_string()
    } else {
        format!("{}.{}", parent, segment)
    }
}
