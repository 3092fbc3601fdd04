//! Text rendering, kept apart from the data-producing graph operations.

pub mod text;

pub use text::{
    format_neighbor_set, print_adjacency, print_traversal, write_adjacency, write_traversal,
};
