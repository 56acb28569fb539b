//! The leaf control: one value, its validators and its interaction state.
use super::abstract_control::AbstractControl;
use crate::validation::{first_error, ValidationErrors, Validator};
use serde_json::Value;
use smallvec::SmallVec;
use std::collections::BTreeMap;

/// Most controls carry zero to a few validators.
type ValidatorList = SmallVec<[Validator; 4]>;

/// A single editable value with validation state.
///
/// Validation runs synchronously whenever something that can change the
/// outcome happens: the value is set, the control is marked touched, or the
/// validator list changes. Validators run in insertion order and stop at the
/// first failure, whose record becomes [`errors`](Self::errors).
#[derive(Debug, Clone, PartialEq)]
pub struct FormControl {
    value: Value,
    /// Independent copy of the construction-time value; the only reset target.
    initial_value: Value,
    validators: ValidatorList,
    touched: bool,
    valid: bool,
    errors: ValidationErrors,
}

impl FormControl {
    /// A control without validators. It is valid whatever its value.
    pub fn new(value: impl Into<Value>) -> Self {
        let value = value.into();
        Self {
            initial_value: value.clone(),
            value,
            validators: ValidatorList::new(),
            touched: false,
            valid: true,
            errors: ValidationErrors::new(),
        }
    }

    /// A control validated immediately against its initial value.
    pub fn with_validators(
        value: impl Into<Value>,
        validators: impl IntoIterator<Item = Validator>,
    ) -> Self {
        let mut control = Self::new(value);
        control.validators.extend(validators);
        if !control.validators.is_empty() {
            control.validate();
        }
        control
    }

    pub fn value_ref(&self) -> &Value {
        &self.value
    }

    /// The value [`reset`](AbstractControl::reset) restores.
    pub fn initial_value(&self) -> &Value {
        &self.initial_value
    }

    /// Re-seeds the reset baseline with a copy of `value`. The current value,
    /// touched flag and validity are left as they are.
    pub fn set_initial_value(&mut self, value: impl Into<Value>) {
        self.initial_value = value.into();
    }

    /// Replaces the value and marks the control touched, which re-validates.
    pub fn set_value(&mut self, value: impl Into<Value>) {
        self.value = value.into();
        self.mark_as_touched();
    }

    /// Marks the control touched and re-validates if it has validators.
    pub fn mark_as_touched(&mut self) {
        self.touched = true;
        if !self.validators.is_empty() {
            self.validate();
        }
    }

    pub fn mark_as_untouched(&mut self) {
        self.touched = false;
    }

    pub fn validators(&self) -> &[Validator] {
        &self.validators
    }

    pub fn has_validators(&self) -> bool {
        !self.validators.is_empty()
    }

    /// Replaces the whole validator list, then re-validates.
    pub fn set_validators(&mut self, validators: impl IntoIterator<Item = Validator>) {
        self.validators = validators.into_iter().collect();
        self.validate();
    }

    /// Appends validators after the existing ones, then re-validates.
    pub fn add_validators(&mut self, validators: impl IntoIterator<Item = Validator>) {
        self.validators.extend(validators);
        self.validate();
    }

    /// Removes the first matching entry for each given validator, then
    /// re-validates. Validators that are not attached are skipped.
    pub fn remove_validators<'a>(&mut self, validators: impl IntoIterator<Item = &'a Validator>) {
        for validator in validators {
            if let Some(pos) = self.validators.iter().position(|v| v == validator) {
                self.validators.remove(pos);
            }
        }
        self.validate();
    }

    pub fn has_validator(&self, validator: &Validator) -> bool {
        self.validators.iter().any(|v| v == validator)
    }

    /// Drops every validator; the control becomes valid.
    pub fn clear_validators(&mut self) {
        self.validators.clear();
        self.validate();
    }

    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    /// Forces the control invalid with an externally produced record. The
    /// override lasts until the control's own validators next run.
    pub fn set_errors(&mut self, errors: ValidationErrors) {
        tracing::debug!(codes = ?errors.codes().collect::<Vec<_>>(), "errors set externally");
        self.errors = errors;
        self.valid = false;
    }

    pub fn has_error(&self, code: &str) -> bool {
        self.errors.contains(code)
    }

    fn validate(&mut self) {
        match first_error(&self.validators, &self.value) {
            Some(errors) => self.errors = errors,
            None => self.errors.clear(),
        }
        self.valid = self.errors.is_empty();
    }
}

impl AbstractControl for FormControl {
    fn value(&self) -> Value {
        self.value.clone()
    }

    fn valid(&self) -> bool {
        self.valid
    }

    fn touched(&self) -> bool {
        self.touched
    }

    fn dirty(&self) -> bool {
        self.value != self.initial_value
    }

    /// Restores the initial value and clears touched and errors.
    ///
    /// Validators are not re-run: validity after a reset is simply "has no
    /// validators", even if the restored value would pass them.
    fn reset(&mut self) {
        self.value = self.initial_value.clone();
        self.touched = false;
        self.valid = self.validators.is_empty();
        self.errors.clear();
    }

    fn patch_value(&mut self, value: Value) {
        self.set_value(value);
    }

    fn mark_all_as_touched(&mut self) {
        self.mark_as_touched();
    }

    fn collect_errors(&self, path: &str, out: &mut BTreeMap<String, ValidationErrors>) {
        if !self.valid {
            out.insert(path.to_string(), self.errors.clone());
        }
    }
}
