//! Adjacency entries and the edge struct.

use serde::Serialize;

use super::{NodeId, Weight};

/// One member of a node's adjacency set: the node on the far end and the
/// weight of the connecting edge.
///
/// Ordering is by `node`, then `weight`, which fixes the iteration order of
/// an adjacency set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Neighbor {
    /// Node at the other end of the edge.
    pub node: NodeId,
    /// Weight of the edge.
    pub weight: Weight,
}

impl Neighbor {
    pub fn new(node: NodeId, weight: Weight) -> Self {
        Self { node, weight }
    }
}

impl std::fmt::Display for Neighbor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.node, self.weight)
    }
}

/// A directed relationship between two nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Edge {
    /// Source node ID.
    pub source: NodeId,
    /// Target node ID.
    pub target: NodeId,
    /// Weight of the relationship.
    pub weight: Weight,
}

impl Edge {
    /// Create a new edge.
    pub fn new(source: NodeId, target: NodeId, weight: Weight) -> Self {
        Self {
            source,
            target,
            weight,
        }
    }

    /// The adjacency entry this edge contributes to its source's set.
    pub fn forward(&self) -> Neighbor {
        Neighbor::new(self.target, self.weight)
    }

    /// The adjacency entry stored on the target when the graph is undirected.
    pub fn reverse(&self) -> Neighbor {
        Neighbor::new(self.source, self.weight)
    }
}
