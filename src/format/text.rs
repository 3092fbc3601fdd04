//! Console text forms of a graph and a traversal.

use std::io::Write;

use crate::graph::{AdjacencyGraph, Traversal};
use crate::types::{GraphResult, Neighbor};

/// Render one adjacency set as `{(n, w), (n, w)}`; empty sets render as `{}`.
pub fn format_neighbor_set<'a, I>(neighbors: I) -> String
where
    I: IntoIterator<Item = &'a Neighbor>,
{
    let entries: Vec<String> = neighbors.into_iter().map(|n| n.to_string()).collect();
    format!("{{{}}}", entries.join(", "))
}

/// Write the adjacency listing, one `nodo <id> :  {...}` line per node in
/// ascending id order.
pub fn write_adjacency(graph: &AdjacencyGraph, writer: &mut impl Write) -> GraphResult<()> {
    for (id, set) in graph.adjacency() {
        writeln!(writer, "nodo {} :  {}", id, format_neighbor_set(set))?;
    }
    Ok(())
}

/// Write the visit order on one line, space separated.
pub fn write_traversal(traversal: &Traversal, writer: &mut impl Write) -> GraphResult<()> {
    let ids: Vec<String> = traversal.order.iter().map(|id| id.to_string()).collect();
    writeln!(writer, "{}", ids.join(" "))?;
    Ok(())
}

/// Print the adjacency listing to stdout.
pub fn print_adjacency(graph: &AdjacencyGraph) -> GraphResult<()> {
    let stdout = std::io::stdout();
    let mut lock = stdout.lock();
    write_adjacency(graph, &mut lock)
}

/// Print the visit order to stdout.
pub fn print_traversal(traversal: &Traversal) -> GraphResult<()> {
    let stdout = std::io::stdout();
    let mut lock = stdout.lock();
    write_traversal(traversal, &mut lock)
}
