//! Connectivity algorithms over [`Network`](crate::Network).
//!
//! Everything here is generic over [`NetworkEdge`](crate::NetworkEdge) and
//! allocates only local traversal state, so calls on the same network may run
//! concurrently.

/// Connected components (weak connectivity).
pub mod components;

/// Reachability and shortest path lengths.
pub mod paths;

/// Line graphs (second-order networks).
pub mod line_graph;

pub use components::{
    connected_component, connected_components, is_connected, largest_connected_component,
};
pub use line_graph::{directed_line_graph, undirected_line_graph};
pub use paths::{
    in_component, is_reachable, out_component, shortest_path_lengths_from,
    shortest_path_lengths_to,
};
