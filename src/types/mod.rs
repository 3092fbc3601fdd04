//! All data types for the graph library.

pub mod edge;
pub mod error;

pub use edge::{Edge, Neighbor};
pub use error::{GraphError, GraphResult};

/// Dense node identifier in `[0, node_count)`.
pub type NodeId = usize;

/// Edge weight. Stored on every edge, never read by traversal.
pub type Weight = i64;

/// Weight used by [`AdjacencyGraph::add_edge`](crate::graph::AdjacencyGraph::add_edge).
pub const DEFAULT_WEIGHT: Weight = 1;

/// Upper bound on nodes per graph unless a config overrides it: 16M.
pub const MAX_NODE_COUNT: usize = 1 << 24;
