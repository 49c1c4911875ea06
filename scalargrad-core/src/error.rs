use crate::node::NodeId;
use thiserror::Error;

/// Custom error type for the scalargrad engine.
#[derive(Error, Debug, PartialEq, Clone)] // PartialEq for easier testing
pub enum AutogradError {
    #[error("Invalid argument for operation {operation}: {message}")]
    InvalidArgument { operation: String, message: String },

    #[error("Node {id:?} does not belong to this graph (graph holds {len} nodes)")]
    NodeNotFound { id: NodeId, len: usize },

    #[error("Node {id:?} is not a leaf (op {op}); only leaf values can be reassigned")]
    NotALeaf { id: NodeId, op: String },

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl AutogradError {
    pub(crate) fn invalid_argument(operation: &str, message: impl Into<String>) -> Self {
        AutogradError::InvalidArgument {
            operation: operation.to_string(),
            message: message.into(),
        }
    }
}
