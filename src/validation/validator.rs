//! The validator function type and the short-circuiting evaluation over an ordered list.
use super::error::ValidationErrors;
use serde_json::Value;
use std::fmt;
use std::sync::Arc;

/// The signature every validator wraps: a pure function from value to error record.
pub type ValidatorFn = dyn Fn(&Value) -> Option<ValidationErrors> + Send + Sync;

/// Describes what a validator checks.
///
/// Built-in kinds carry their parameters so two independently constructed
/// validators with the same rule and parameters are recognized as the same
/// validator (`min(5) == min(5)`).
#[derive(Debug, Clone, PartialEq)]
pub enum ValidatorKind {
    Required,
    RequiredTrue,
    /// Holds the source of the compiled expression.
    Pattern(String),
    Min(f64),
    Max(f64),
    MinLength(usize),
    MaxLength(usize),
    /// A user-supplied function. Matched by function identity only; the name is
    /// for diagnostics.
    Custom(String),
}

impl fmt::Display for ValidatorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidatorKind::Required => write!(f, "required"),
            ValidatorKind::RequiredTrue => write!(f, "requiredTrue"),
            ValidatorKind::Pattern(src) => write!(f, "pattern(/{}/)", src),
            ValidatorKind::Min(n) => write!(f, "min({})", n),
            ValidatorKind::Max(n) => write!(f, "max({})", n),
            ValidatorKind::MinLength(n) => write!(f, "minLength({})", n),
            ValidatorKind::MaxLength(n) => write!(f, "maxLength({})", n),
            ValidatorKind::Custom(name) => write!(f, "{}", name),
        }
    }
}

/// A stateless validation rule.
///
/// Cloning is cheap and shares the underlying function, so one validator can
/// be attached to any number of controls.
#[derive(Clone)]
pub struct Validator {
    kind: ValidatorKind,
    func: Arc<ValidatorFn>,
}

impl Validator {
    /// Wraps a user-defined function. The function must be pure: controls call
    /// it on demand and expect the same answer for the same value.
    pub fn new<F>(name: impl Into<String>, func: F) -> Self
    where
        F: Fn(&Value) -> Option<ValidationErrors> + Send + Sync + 'static,
    {
        Self::from_kind(ValidatorKind::Custom(name.into()), func)
    }

    pub(crate) fn from_kind<F>(kind: ValidatorKind, func: F) -> Self
    where
        F: Fn(&Value) -> Option<ValidationErrors> + Send + Sync + 'static,
    {
        Self { kind, func: Arc::new(func) }
    }

    pub fn kind(&self) -> &ValidatorKind {
        &self.kind
    }

    /// Runs the rule against a value.
    pub fn validate(&self, value: &Value) -> Option<ValidationErrors> {
        (self.func)(value)
    }
}

impl PartialEq for Validator {
    fn eq(&self, other: &Self) -> bool {
        match (&self.kind, &other.kind) {
            (ValidatorKind::Custom(_), ValidatorKind::Custom(_)) => {
                Arc::ptr_eq(&self.func, &other.func)
            }
            (a, b) => a == b,
        }
    }
}

impl fmt::Debug for Validator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Validator").field(&self.kind).finish()
    }
}

impl fmt::Display for Validator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.kind.fmt(f)
    }
}

/// Evaluates validators in order and returns the first error record.
///
/// Later validators are never invoked once one fails, so at most one record
/// is surfaced at a time.
pub fn first_error<'a, I>(validators: I, value: &Value) -> Option<ValidationErrors>
where
    I: IntoIterator<Item = &'a Validator>,
{
    for validator in validators {
        if let Some(errors) = validator.validate(value) {
            tracing::trace!(validator = %validator, codes = ?errors.codes().collect::<Vec<_>>(), "validator failed");
            return Some(errors);
        }
    }
    None
}
