//! Reactive-forms core: a tree of editable, validatable controls.
//!
//! A form is built from three node kinds sharing one capability set
//! ([`AbstractControl`]):
//!
//! - [`FormControl`]: a leaf holding a value, its validators and its
//!   touched/valid/error state, plus a copy of the initial value for reset.
//! - [`FormGroup`]: named children, addressable by dot path.
//! - [`FormArray`]: ordered children, addressable by index.
//!
//! Composite state (`value`, `valid`, `touched`) is derived from the live tree
//! on every query. All operations are synchronous; a tree is meant to be owned
//! and mutated by one logical owner at a time.
//!
//! ```
//! use reactive_forms_core::prelude::*;
//! use serde_json::json;
//!
//! let mut form = FormBuilder::group([
//!     ("name", Shorthand::from((json!(null), validators::required()))),
//!     ("age", Shorthand::from(30)),
//! ]);
//! assert!(!form.valid());
//!
//! form.patch_value(json!({"name": "Ann"}));
//! assert!(form.valid());
//! assert_eq!(form.control("name").unwrap().value(), json!("Ann"));
//! ```

pub mod builder;
pub mod controls;
pub mod display;
pub mod error;
pub mod validation;

pub use builder::{FormBuilder, Shorthand};
pub use controls::{
    AbstractControl, ControlContainer, FormArray, FormControl, FormGroup, Node, NodeKind,
};
pub use error::FormError;
pub use validation::rules as validators;
pub use validation::{ValidationErrors, Validator, ValidatorKind};

/// Everything needed to build and drive a form.
pub mod prelude {
    pub use crate::builder::{FormBuilder, Shorthand};
    pub use crate::controls::{
        AbstractControl, ControlContainer, FormArray, FormControl, FormGroup, Node, NodeKind,
    };
    pub use crate::error::FormError;
    pub use crate::validation::rules as validators;
    pub use crate::validation::{ValidationErrors, Validator};
}
