//! Error types for the graph library.

use thiserror::Error;

/// All errors that can occur in the graph library.
#[derive(Error, Debug)]
pub enum GraphError {
    /// A node id outside `[0, node_count)` was referenced.
    #[error("Node ID {id} out of range for graph with {node_count} nodes")]
    InvalidNodeId { id: usize, node_count: usize },

    /// The graph could not be constructed with the requested node count.
    #[error("Invalid graph construction: {0}")]
    InvalidConstruction(String),

    /// IO error while rendering.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience result type for graph operations.
pub type GraphResult<T> = Result<T, GraphError>;
