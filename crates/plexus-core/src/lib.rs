// Allow minor clippy style warnings at crate level
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::cast_precision_loss)]

//! Core types for static and temporal networks.
//!
//! This crate provides the network container and the connectivity engine:
//!
//! - [`NetworkEdge`] - The edge abstraction (cause/effect vertex sets)
//! - [`DirectedEdge`], [`UndirectedEdge`] - Simple static edges
//! - [`DirectedHyperedge`], [`UndirectedHyperedge`] - Static hyperedges
//! - [`Network`] - An immutable, deduplicated edge/vertex container with
//!   precomputed incidence
//!
//! Temporal edges implement [`TemporalEdge`]; the concrete temporal variants
//! and the temporal adjacency models live in `plexus-temporal`.
//!
//! # Algorithms
//!
//! - [`algo::components`] - Connected components (weak connectivity)
//! - [`algo::paths`] - Reachability and shortest path lengths
//! - [`algo::line_graph`] - Second-order (line graph) networks
//!
//! # Example
//!
//! ```rust
//! use plexus_core::algo::{connected_components, shortest_path_lengths_from};
//! use plexus_core::{DirectedEdge, Network};
//!
//! let net = Network::with_vertices(
//!     vec![DirectedEdge::new(1, 2), DirectedEdge::new(2, 3)],
//!     vec![9],
//! ).unwrap();
//!
//! let components = connected_components(&net, false);
//! assert_eq!(components.len(), 1);
//!
//! let dist = shortest_path_lengths_from(&net, &1).unwrap();
//! assert_eq!(dist[&3], 2);
//! assert!(!dist.contains_key(&9));
//! ```

pub mod algo;
mod edge;
mod error;
pub mod hyper;
mod network;

pub use edge::{
    DirectedEdge, FloatTimestamp, IntegralTimestamp, NetworkEdge, NetworkVertex,
    SecondOrderDirectedEdge, SecondOrderUndirectedEdge, StaticEdge, TemporalEdge, Timestamp,
    UndirectedEdge, VertList,
};
pub use error::{Error, Result};
pub use hyper::{DirectedHyperedge, UndirectedHyperedge};
pub use network::Network;
