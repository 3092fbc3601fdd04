//! Runs the three reference graphs: adjacency listing, then BFS order.

use bfs_graph::*;

fn run_case(
    title: &str,
    node_count: usize,
    edges: &[(NodeId, NodeId, Weight)],
    start: NodeId,
) -> GraphResult<()> {
    println!(" {}", title);

    let mut graph = AdjacencyGraph::undirected(node_count)?;
    for &(u, v, w) in edges {
        graph.add_weighted_edge(u, v, w)?;
    }
    print_adjacency(&graph)?;

    println!("Breadth-first traversal starting from node {}:", start);
    let traversal = bfs_traverse(&graph, start)?;
    print_traversal(&traversal)?;
    Ok(())
}

fn main() -> GraphResult<()> {
    env_logger::init();

    run_case(
        "Test case 1",
        5,
        &[(0, 1, 3), (0, 2, 2), (1, 2, 1), (1, 4, 3), (2, 3, 1)],
        0,
    )?;

    run_case(
        "Test case 2",
        4,
        &[(1, 2, 1), (0, 2, 1), (0, 1, 1), (1, 3, 1)],
        0,
    )?;

    // Default weight throughout
    let mut builder = GraphBuilder::undirected(7);
    builder
        .link(6, 1)
        .link(2, 1)
        .link(3, 4)
        .link(0, 1)
        .link(1, 3)
        .link(4, 2)
        .link(5, 3);
    let graph = builder.build()?;

    println!(" Test case 3");
    print_adjacency(&graph)?;
    println!("Breadth-first traversal starting from node 1:");
    print_traversal(&bfs_traverse(&graph, 1)?)?;

    Ok(())
}
