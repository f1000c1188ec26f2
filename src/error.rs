use thiserror::Error;

use crate::node::NodeId;

/// Defects in a tree or cursor address handed to the editor. Reaching the edge of the document,
/// or deleting with nothing to delete, is not an error - those operations just return their input.
#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum EditorError {
    /// A composite node has no child rows to put a cursor into.
    #[error("node {id} has no child rows")]
    EmptyComposite { id: NodeId },

    /// A cursor path refers to a child which does not exist.
    #[error("index {index} out of range for node {id} with {len} children")]
    PathOutOfRange { id: NodeId, index: usize, len: usize },

    /// A cursor path tries to step inside an atom.
    #[error("cannot navigate into atom {id}")]
    IntoAtom { id: NodeId },

    #[error("table rows have differing lengths: expected {expected}, found {found}")]
    RaggedTable { expected: usize, found: usize },

    #[error("table has no cells")]
    EmptyTable,
}
