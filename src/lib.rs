//! `plexus`: static and temporal network connectivity.
//!
//! This crate re-exports the workspace members under one name:
//!
//! - [`plexus_core`] - edges, the [`Network`] container and static
//!   connectivity ([`algo`])
//! - [`temporal`] - temporal edges, adjacency models and time-respecting
//!   reachability
//!
//! ```rust
//! use plexus::temporal::{reach, DirectedTemporalEdge, Simple};
//! use plexus::{algo, Network};
//!
//! let net = Network::new(vec![
//!     DirectedTemporalEdge::new(1, 2, 10),
//!     DirectedTemporalEdge::new(2, 3, 11),
//! ]).unwrap();
//!
//! assert!(algo::is_connected(&net));
//! assert!(reach::is_reachable(&net, &mut Simple::new(), &1, &3).unwrap());
//! ```

pub use plexus_core::*;

/// Temporal edges, adjacency models and time-respecting reachability.
pub mod temporal {
    pub use plexus_temporal::*;
}
