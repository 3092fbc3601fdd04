//! Phase 2 tests: breadth-first traversal.

use std::collections::HashSet;

use rand::Rng;

use bfs_graph::graph::{bfs_traverse, bfs_traverse_with, AdjacencyGraph, TraversalParams};
use bfs_graph::types::{GraphError, NodeId, Weight};

// ==================== Helper ====================

fn undirected(node_count: usize, edges: &[(NodeId, NodeId, Weight)]) -> AdjacencyGraph {
    let _ = env_logger::builder().is_test(true).try_init();
    let mut graph = AdjacencyGraph::undirected(node_count).unwrap();
    for &(u, v, w) in edges {
        graph.add_weighted_edge(u, v, w).unwrap();
    }
    graph
}

/// Layers as sets, so within-layer order is not asserted.
fn layer_sets(layers: Vec<Vec<NodeId>>) -> Vec<HashSet<NodeId>> {
    layers.into_iter().map(|l| l.into_iter().collect()).collect()
}

fn set(ids: &[NodeId]) -> HashSet<NodeId> {
    ids.iter().copied().collect()
}

// ==================== Reference Scenarios ====================

#[test]
fn test_scenario_weighted_five_nodes() {
    let graph = undirected(
        5,
        &[(0, 1, 3), (0, 2, 2), (1, 2, 1), (1, 4, 3), (2, 3, 1)],
    );
    let result = bfs_traverse(&graph, 0).unwrap();

    assert_eq!(result.len(), 5);
    assert_eq!(
        layer_sets(result.layers()),
        vec![set(&[0]), set(&[1, 2]), set(&[3, 4])]
    );
}

#[test]
fn test_scenario_four_nodes() {
    let graph = undirected(4, &[(1, 2, 1), (0, 2, 1), (0, 1, 1), (1, 3, 1)]);
    let result = bfs_traverse(&graph, 0).unwrap();

    assert_eq!(result.len(), 4);
    assert_eq!(
        layer_sets(result.layers()),
        vec![set(&[0]), set(&[1, 2]), set(&[3])]
    );
}

#[test]
fn test_scenario_seven_nodes_from_one() {
    let mut graph = AdjacencyGraph::undirected(7).unwrap();
    for (u, v) in [(6, 1), (2, 1), (3, 4), (0, 1), (1, 3), (4, 2), (5, 3)] {
        graph.add_edge(u, v).unwrap();
    }
    let result = bfs_traverse(&graph, 1).unwrap();

    assert_eq!(result.len(), 7);
    assert_eq!(
        layer_sets(result.layers()),
        vec![set(&[1]), set(&[6, 2, 0, 3]), set(&[4, 5])]
    );
    assert_eq!(result.depth_of(5), Some(2));
}

#[test]
fn test_ordered_sets_give_deterministic_order() {
    let graph = undirected(
        5,
        &[(0, 1, 3), (0, 2, 2), (1, 2, 1), (1, 4, 3), (2, 3, 1)],
    );
    let first = bfs_traverse(&graph, 0).unwrap();
    assert_eq!(first.order, vec![0, 1, 2, 4, 3]);
    assert_eq!(bfs_traverse(&graph, 0).unwrap().order, first.order);
}

// ==================== Reachability ====================

#[test]
fn test_directed_reachability() {
    let mut graph = AdjacencyGraph::new(4).unwrap();
    graph.add_edge(0, 1).unwrap();
    graph.add_edge(1, 2).unwrap();
    graph.add_edge(3, 0).unwrap();

    let from_zero = bfs_traverse(&graph, 0).unwrap();
    assert_eq!(from_zero.order, vec![0, 1, 2]);
    assert!(!from_zero.contains(3));

    let from_two = bfs_traverse(&graph, 2).unwrap();
    assert_eq!(from_two.order, vec![2]);
}

#[test]
fn test_isolated_start() {
    let graph = undirected(3, &[(1, 2, 1)]);
    let result = bfs_traverse(&graph, 0).unwrap();
    assert_eq!(result.order, vec![0]);
    assert_eq!(result.layers(), vec![vec![0]]);
}

#[test]
fn test_cycle_visits_once() {
    let graph = undirected(4, &[(0, 1, 1), (1, 2, 1), (2, 3, 1), (3, 0, 1)]);
    let result = bfs_traverse(&graph, 0).unwrap();

    assert_eq!(result.len(), 4);
    assert_eq!(result.depth_of(2), Some(2));
}

#[test]
fn test_weights_do_not_affect_order() {
    // A heavy direct edge still wins over a light two-hop path.
    let graph = undirected(3, &[(0, 2, 100), (0, 1, 1), (1, 2, 1)]);
    let result = bfs_traverse(&graph, 0).unwrap();
    assert_eq!(result.depth_of(2), Some(1));
}

#[test]
fn test_invalid_start() {
    let graph = AdjacencyGraph::new(3).unwrap();
    assert!(matches!(
        bfs_traverse(&graph, 3),
        Err(GraphError::InvalidNodeId { id: 3, node_count: 3 })
    ));

    let empty = AdjacencyGraph::new(0).unwrap();
    assert!(bfs_traverse(&empty, 0).is_err());
}

// ==================== Bounded Traversal ====================

#[test]
fn test_max_depth() {
    let graph = undirected(
        5,
        &[(0, 1, 3), (0, 2, 2), (1, 2, 1), (1, 4, 3), (2, 3, 1)],
    );

    let params = TraversalParams::new(0).with_max_depth(1);
    let result = bfs_traverse_with(&graph, &params).unwrap();
    assert_eq!(set(&result.order), set(&[0, 1, 2]));

    let params = TraversalParams::new(0).with_max_depth(0);
    assert_eq!(bfs_traverse_with(&graph, &params).unwrap().order, vec![0]);
}

#[test]
fn test_max_results() {
    let graph = undirected(
        5,
        &[(0, 1, 3), (0, 2, 2), (1, 2, 1), (1, 4, 3), (2, 3, 1)],
    );

    let params = TraversalParams::new(0).with_max_results(3);
    let result = bfs_traverse_with(&graph, &params).unwrap();
    assert_eq!(result.len(), 3);
    assert_eq!(result.order[0], 0);

    let params = TraversalParams::new(0).with_max_results(0);
    assert!(bfs_traverse_with(&graph, &params).unwrap().is_empty());
}

// ==================== Randomized Properties ====================

#[test]
fn test_random_graphs_respect_layering() {
    let mut rng = rand::thread_rng();

    for _ in 0..50 {
        let n = rng.gen_range(1..40);
        let directed = rng.gen_bool(0.5);
        let mut graph = if directed {
            AdjacencyGraph::new(n).unwrap()
        } else {
            AdjacencyGraph::undirected(n).unwrap()
        };
        for _ in 0..rng.gen_range(0..n * 2) {
            let u = rng.gen_range(0..n);
            let v = rng.gen_range(0..n);
            graph.add_weighted_edge(u, v, rng.gen_range(1..5)).unwrap();
        }

        let start = rng.gen_range(0..n);
        let result = bfs_traverse(&graph, start).unwrap();

        // Each node at most once
        let unique: HashSet<NodeId> = result.order.iter().copied().collect();
        assert_eq!(unique.len(), result.len());
        assert_eq!(result.order[0], start);

        // Depths never decrease along the visit order
        let depths: Vec<u32> = result
            .order
            .iter()
            .map(|&id| result.depth_of(id).unwrap())
            .collect();
        assert!(depths.windows(2).all(|w| w[0] <= w[1]));

        // Closed under neighbors, and one hop adds at most one layer
        for &id in &result.order {
            let d = result.depth_of(id).unwrap();
            for neighbor in graph.neighbors(id).unwrap() {
                let nd = result.depth_of(neighbor.node).unwrap();
                assert!(nd <= d + 1);
            }
        }
    }
}
