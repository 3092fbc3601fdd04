//! Graph traversal algorithms (BFS).

use std::collections::{HashMap, HashSet, VecDeque};

use serde::Serialize;

use crate::types::{GraphResult, NodeId};

use super::AdjacencyGraph;

/// Parameters for a bounded traversal.
#[derive(Debug, Clone)]
pub struct TraversalParams {
    /// Starting node ID.
    pub start: NodeId,
    /// Nodes at this depth are visited but not expanded.
    pub max_depth: u32,
    /// Maximum number of nodes to visit.
    pub max_results: usize,
}

impl TraversalParams {
    /// Unbounded traversal from `start`.
    pub fn new(start: NodeId) -> Self {
        Self {
            start,
            max_depth: u32::MAX,
            max_results: usize::MAX,
        }
    }

    /// Set maximum depth.
    pub fn with_max_depth(mut self, max: u32) -> Self {
        self.max_depth = max;
        self
    }

    /// Set maximum number of visited nodes.
    pub fn with_max_results(mut self, max: usize) -> Self {
        self.max_results = max;
        self
    }
}

/// Result of a traversal.
#[derive(Debug, Clone, Serialize)]
pub struct Traversal {
    /// Visited node IDs in BFS order.
    pub order: Vec<NodeId>,
    /// Hop distance from the start for each visited node.
    pub depths: HashMap<NodeId, u32>,
}

impl Traversal {
    /// Number of visited nodes.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Whether `node` was reached.
    pub fn contains(&self, node: NodeId) -> bool {
        self.depths.contains_key(&node)
    }

    /// Hop distance of `node` from the start, if reached.
    pub fn depth_of(&self, node: NodeId) -> Option<u32> {
        self.depths.get(&node).copied()
    }

    /// Visited nodes grouped by depth. Each layer keeps visit order.
    pub fn layers(&self) -> Vec<Vec<NodeId>> {
        let mut layers: Vec<Vec<NodeId>> = Vec::new();
        for &node in &self.order {
            let depth = self.depths[&node] as usize;
            if layers.len() <= depth {
                layers.resize_with(depth + 1, Vec::new);
            }
            layers[depth].push(node);
        }
        layers
    }
}

/// BFS traversal visiting every node reachable from `start` exactly once.
pub fn bfs_traverse(graph: &AdjacencyGraph, start: NodeId) -> GraphResult<Traversal> {
    bfs_traverse_with(graph, &TraversalParams::new(start))
}

/// BFS traversal bounded by depth and result count.
///
/// Weights are ignored: order is by hop count only. Within one node,
/// neighbors are enqueued in adjacency-set order.
pub fn bfs_traverse_with(
    graph: &AdjacencyGraph,
    params: &TraversalParams,
) -> GraphResult<Traversal> {
    // Validates the start id.
    graph.neighbors(params.start)?;

    let mut visited: HashSet<NodeId> = HashSet::new();
    let mut order: Vec<NodeId> = Vec::new();
    let mut depths: HashMap<NodeId, u32> = HashMap::new();
    let mut queue: VecDeque<(NodeId, u32)> = VecDeque::new();

    if params.max_results == 0 {
        return Ok(Traversal { order, depths });
    }

    visited.insert(params.start);
    depths.insert(params.start, 0);
    queue.push_back((params.start, 0));

    while let Some((current, depth)) = queue.pop_front() {
        order.push(current);
        log::trace!("Visited node {} at depth {}", current, depth);

        if depth >= params.max_depth {
            continue;
        }

        for neighbor in graph.neighbors(current)? {
            if visited.len() >= params.max_results {
                break;
            }
            if visited.insert(neighbor.node) {
                depths.insert(neighbor.node, depth + 1);
                queue.push_back((neighbor.node, depth + 1));
            }
        }
    }

    log::debug!(
        "BFS from {} visited {} of {} nodes",
        params.start,
        order.len(),
        graph.node_count()
    );

    Ok(Traversal { order, depths })
}
