//! Construction-time graph configuration.

use crate::types::MAX_NODE_COUNT;

/// How an edge re-added with a different weight is stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EdgePolicy {
    /// Adjacency sets are keyed on the full `(neighbor, weight)` pair, so the
    /// same two nodes may be joined by several edges of distinct weight.
    #[default]
    Multigraph,
    /// At most one entry per neighbor; re-adding an edge replaces its weight.
    LastWriteWins,
}

/// Graph configuration.
#[derive(Debug, Clone)]
pub struct GraphConfig {
    /// Whether edges are one-way.
    pub directed: bool,
    /// Policy for re-added edges.
    pub edge_policy: EdgePolicy,
    /// Largest node count accepted at construction.
    pub max_nodes: usize,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            directed: true,
            edge_policy: EdgePolicy::Multigraph,
            max_nodes: MAX_NODE_COUNT,
        }
    }
}

impl GraphConfig {
    /// Create the default configuration (directed multigraph).
    pub fn new() -> Self {
        Self::default()
    }

    /// Set directedness.
    pub fn with_directed(mut self, directed: bool) -> Self {
        self.directed = directed;
        self
    }

    /// Set the edge policy.
    pub fn with_edge_policy(mut self, policy: EdgePolicy) -> Self {
        self.edge_policy = policy;
        self
    }

    /// Set the maximum node count.
    pub fn with_max_nodes(mut self, max: usize) -> Self {
        self.max_nodes = max;
        self
    }
}
