//! bfs-graph — weighted adjacency-set graph with breadth-first traversal.
//!
//! Nodes are dense ids in `[0, n)` fixed at construction. Each node owns an
//! ordered set of `(neighbor, weight)` entries. Traversal is unweighted BFS
//! from a single start node.

pub mod format;
pub mod graph;
pub mod types;

// Re-export commonly used types at the crate root
pub use format::{print_adjacency, print_traversal, write_adjacency, write_traversal};
pub use graph::{
    bfs_traverse, bfs_traverse_with, AdjacencyGraph, EdgePolicy, GraphBuilder, GraphConfig,
    Traversal, TraversalParams,
};
pub use types::{
    Edge, GraphError, GraphResult, Neighbor, NodeId, Weight, DEFAULT_WEIGHT, MAX_NODE_COUNT,
};
