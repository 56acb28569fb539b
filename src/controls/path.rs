//! Dot-path resolution through nested composites.
//!
//! A path such as `"address.lines.0"` is split on `.`. Segments name children
//! of a group; segments addressing a collection must parse as an index. A leaf
//! terminates resolution, so any segment after one yields nothing.
use super::node::Node;
use crate::error::FormError;
use super::control::FormControl;

fn step<'a>(node: &'a Node, segment: &str) -> Option<&'a Node> {
    match node {
        Node::Group(group) => group.child(segment),
        Node::Array(array) => array.child(segment),
        Node::Control(_) => None,
    }
}

fn step_mut<'a>(node: &'a mut Node, segment: &str) -> Option<&'a mut Node> {
    match node {
        Node::Group(group) => group.child_mut(segment),
        Node::Array(array) => array.child_mut(segment),
        Node::Control(_) => None,
    }
}

/// Path lookup for composites. Implementors only provide direct child access
/// by segment; descent is shared.
pub trait ControlContainer {
    /// The direct child named by a single segment.
    fn child(&self, segment: &str) -> Option<&Node>;

    fn child_mut(&mut self, segment: &str) -> Option<&mut Node>;

    /// Resolves a dot-separated path, returning `None` if any segment is missing.
    fn get(&self, path: &str) -> Option<&Node> {
        let mut segments = path.split('.');
        let first = self.child(segments.next()?)?;
        segments.try_fold(first, step)
    }

    fn get_mut(&mut self, path: &str) -> Option<&mut Node> {
        let mut segments = path.split('.');
        let first = self.child_mut(segments.next()?)?;
        segments.try_fold(first, step_mut)
    }

    /// Like [`get`](Self::get), reporting the missing path as an error.
    fn try_get(&self, path: &str) -> Result<&Node, FormError> {
        self.get(path).ok_or_else(|| FormError::PathNotFound { path: path.to_string() })
    }

    /// The leaf at `path`, if the path resolves to one.
    fn control(&self, path: &str) -> Option<&FormControl> {
        self.get(path).and_then(Node::as_control)
    }

    fn control_mut(&mut self, path: &str) -> Option<&mut FormControl> {
        self.get_mut(path).and_then(Node::as_control_mut)
    }
}
