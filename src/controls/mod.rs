//! The control tree: leaves, named groups and ordered arrays behind one
//! capability trait.
pub mod abstract_control;
pub mod array;
pub mod control;
pub mod group;
pub mod node;
pub mod path;

// Re-export key types for convenient access
pub use abstract_control::AbstractControl;
pub use array::FormArray;
pub use control::FormControl;
pub use group::FormGroup;
pub use node::{Node, NodeKind};
pub use path::ControlContainer;
