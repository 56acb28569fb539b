//! Construction adapter: turns shorthand entries into a canonical control tree.
pub mod form_builder;
pub mod shorthand;

pub use form_builder::FormBuilder;
pub use shorthand::Shorthand;
