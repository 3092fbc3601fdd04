//! Core graph structure — a fixed set of nodes with one adjacency set each.

use std::collections::BTreeSet;
use std::ops::Range;

use crate::types::{Edge, GraphError, GraphResult, Neighbor, NodeId, Weight, DEFAULT_WEIGHT};

use super::{EdgePolicy, GraphConfig};

/// A weighted graph over the dense node ids `[0, node_count)`.
///
/// The node count and directedness are fixed at construction. Edges are
/// append-only. In an undirected graph every added edge is stored on both
/// endpoints with the same weight.
#[derive(Debug, Clone)]
pub struct AdjacencyGraph {
    /// One adjacency set per node, indexed by ID.
    adjacency: Vec<BTreeSet<Neighbor>>,
    directed: bool,
    edge_policy: EdgePolicy,
}

impl AdjacencyGraph {
    /// Create a directed graph with `node_count` isolated nodes.
    pub fn new(node_count: usize) -> GraphResult<Self> {
        Self::with_config(node_count, GraphConfig::default())
    }

    /// Create an undirected graph with `node_count` isolated nodes.
    pub fn undirected(node_count: usize) -> GraphResult<Self> {
        Self::with_config(node_count, GraphConfig::default().with_directed(false))
    }

    /// Create a graph with an explicit configuration.
    pub fn with_config(node_count: usize, config: GraphConfig) -> GraphResult<Self> {
        if node_count > config.max_nodes {
            log::warn!(
                "Rejected graph of {} nodes (limit {})",
                node_count,
                config.max_nodes
            );
            return Err(GraphError::InvalidConstruction(format!(
                "node count {} exceeds maximum {}",
                node_count, config.max_nodes
            )));
        }

        log::debug!(
            "Created {} graph with {} nodes ({:?})",
            if config.directed { "directed" } else { "undirected" },
            node_count,
            config.edge_policy
        );

        Ok(Self {
            adjacency: vec![BTreeSet::new(); node_count],
            directed: config.directed,
            edge_policy: config.edge_policy,
        })
    }

    /// Create a graph from a signed node count, as handed over by callers that
    /// do not track counts as `usize`. Negative counts are rejected.
    pub fn from_signed_count(count: i64, directed: bool) -> GraphResult<Self> {
        let node_count = usize::try_from(count).map_err(|_| {
            GraphError::InvalidConstruction(format!("node count must be non-negative, got {count}"))
        })?;
        Self::with_config(node_count, GraphConfig::default().with_directed(directed))
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Whether edges are one-way.
    pub fn is_directed(&self) -> bool {
        self.directed
    }

    /// The policy applied when an edge is re-added.
    pub fn edge_policy(&self) -> EdgePolicy {
        self.edge_policy
    }

    /// All node ids in ascending order.
    pub fn nodes(&self) -> Range<NodeId> {
        0..self.adjacency.len()
    }

    /// Total number of stored adjacency entries. An undirected edge between
    /// two distinct nodes counts twice.
    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(BTreeSet::len).sum()
    }

    fn check_node(&self, id: NodeId) -> GraphResult<()> {
        if id < self.adjacency.len() {
            Ok(())
        } else {
            Err(GraphError::InvalidNodeId {
                id,
                node_count: self.adjacency.len(),
            })
        }
    }

    /// Add an edge with [`DEFAULT_WEIGHT`].
    pub fn add_edge(&mut self, u: NodeId, v: NodeId) -> GraphResult<bool> {
        self.add_weighted_edge(u, v, DEFAULT_WEIGHT)
    }

    /// Add an edge from `u` to `v`, and from `v` to `u` when undirected.
    ///
    /// Both ids are validated before anything is stored. Returns whether the
    /// graph changed; re-adding an identical `(neighbor, weight)` pair is a
    /// no-op.
    pub fn add_weighted_edge(&mut self, u: NodeId, v: NodeId, weight: Weight) -> GraphResult<bool> {
        if let Err(e) = self.check_node(u).and_then(|_| self.check_node(v)) {
            log::warn!("Rejected edge ({}, {}, {}): {}", u, v, weight, e);
            return Err(e);
        }

        let edge = Edge::new(u, v, weight);
        let mut changed = self.insert_entry(u, edge.forward());
        if !self.directed {
            changed |= self.insert_entry(v, edge.reverse());
        }

        log::trace!("Added edge ({}, {}, {}), changed={}", u, v, weight, changed);
        Ok(changed)
    }

    /// Insert one entry into `node`'s set under the configured policy.
    fn insert_entry(&mut self, node: NodeId, entry: Neighbor) -> bool {
        let set = &mut self.adjacency[node];
        match self.edge_policy {
            EdgePolicy::Multigraph => set.insert(entry),
            EdgePolicy::LastWriteWins => {
                if set.contains(&entry) {
                    return false;
                }
                set.retain(|n| n.node != entry.node);
                set.insert(entry)
            }
        }
    }

    /// The adjacency set of one node.
    pub fn neighbors(&self, id: NodeId) -> GraphResult<&BTreeSet<Neighbor>> {
        self.check_node(id)?;
        Ok(&self.adjacency[id])
    }

    /// Number of entries in a node's adjacency set.
    pub fn degree(&self, id: NodeId) -> GraphResult<usize> {
        self.neighbors(id).map(BTreeSet::len)
    }

    /// Whether `(v, weight)` is in `u`'s adjacency set. Out-of-range ids are
    /// simply absent.
    pub fn contains_edge(&self, u: NodeId, v: NodeId, weight: Weight) -> bool {
        self.adjacency
            .get(u)
            .is_some_and(|set| set.contains(&Neighbor::new(v, weight)))
    }

    /// Every node with its adjacency set, in ascending id order.
    pub fn adjacency(&self) -> impl Iterator<Item = (NodeId, &BTreeSet<Neighbor>)> {
        self.adjacency.iter().enumerate()
    }

    /// Every stored adjacency entry as an edge, grouped by source.
    pub fn edges(&self) -> Vec<Edge> {
        self.adjacency()
            .flat_map(|(source, set)| set.iter().map(move |n| Edge::new(source, n.node, n.weight)))
            .collect()
    }
}
