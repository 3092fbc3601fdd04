//! In-memory graph operations — the core data structure.

pub mod adjacency_graph;
pub mod builder;
pub mod config;
pub mod traversal;

pub use adjacency_graph::AdjacencyGraph;
pub use builder::GraphBuilder;
pub use config::{EdgePolicy, GraphConfig};
pub use traversal::{bfs_traverse, bfs_traverse_with, Traversal, TraversalParams};
