//! Validation primitives: the error record, the validator function type, and
//! the built-in rule library.
//!
//! Validation outcomes are data, not `Err`s. A control stores the record
//! produced by the first failing validator and derives its validity from it.

pub use self::error::ValidationErrors;
pub use self::validator::{first_error, Validator, ValidatorFn, ValidatorKind};

mod error;
mod validator;

/// The built-in validator library.
pub mod rules {
    mod bounds;
    mod length;
    mod pattern;
    mod presence;

    pub use self::bounds::{max, min};
    pub use self::length::{max_length, min_length};
    pub use self::pattern::{pattern, pattern_regex};
    pub use self::presence::{is_empty_value, required, required_true};
}
