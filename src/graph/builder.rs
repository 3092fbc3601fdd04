//! Fluent API for building AdjacencyGraph instances.

use crate::types::{Edge, GraphResult, NodeId, Weight, DEFAULT_WEIGHT};

use super::{AdjacencyGraph, EdgePolicy, GraphConfig};

/// Fluent builder for constructing an AdjacencyGraph.
///
/// Edges are collected unchecked and validated in one pass by
/// [`build`](GraphBuilder::build), in the order they were linked.
pub struct GraphBuilder {
    node_count: usize,
    config: GraphConfig,
    edges: Vec<Edge>,
}

impl GraphBuilder {
    /// Create a new builder for a directed graph.
    pub fn new(node_count: usize) -> Self {
        Self {
            node_count,
            config: GraphConfig::default(),
            edges: Vec::new(),
        }
    }

    /// Create a new builder for an undirected graph.
    pub fn undirected(node_count: usize) -> Self {
        Self::new(node_count).directed(false)
    }

    /// Set directedness.
    pub fn directed(mut self, directed: bool) -> Self {
        self.config.directed = directed;
        self
    }

    /// Set the edge policy.
    pub fn edge_policy(mut self, policy: EdgePolicy) -> Self {
        self.config.edge_policy = policy;
        self
    }

    /// Replace the whole configuration.
    pub fn config(mut self, config: GraphConfig) -> Self {
        self.config = config;
        self
    }

    /// Add an edge with the default weight.
    pub fn link(&mut self, source: NodeId, target: NodeId) -> &mut Self {
        self.link_weighted(source, target, DEFAULT_WEIGHT)
    }

    /// Add a weighted edge.
    pub fn link_weighted(&mut self, source: NodeId, target: NodeId, weight: Weight) -> &mut Self {
        self.edges.push(Edge::new(source, target, weight));
        self
    }

    /// Add several `(source, target, weight)` edges.
    pub fn link_all(&mut self, edges: &[(NodeId, NodeId, Weight)]) -> &mut Self {
        self.edges
            .extend(edges.iter().map(|&(s, t, w)| Edge::new(s, t, w)));
        self
    }

    /// Build the final AdjacencyGraph. Fails on the first invalid node id.
    pub fn build(self) -> GraphResult<AdjacencyGraph> {
        let mut graph = AdjacencyGraph::with_config(self.node_count, self.config)?;
        for edge in &self.edges {
            graph.add_weighted_edge(edge.source, edge.target, edge.weight)?;
        }
        log::debug!(
            "Built graph: {} nodes, {} adjacency entries",
            graph.node_count(),
            graph.edge_count()
        );
        Ok(graph)
    }
}
