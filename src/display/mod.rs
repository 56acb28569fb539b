//! Human-readable renderings of control trees.
pub mod tree;

pub use tree::format_tree;
