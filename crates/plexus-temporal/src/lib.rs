#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::module_name_repetitions)]

//! Temporal networks on top of `plexus-core`.
//!
//! - Temporal edge variants ([`DirectedTemporalEdge`],
//!   [`UndirectedTemporalEdge`], [`DirectedDelayedTemporalEdge`] and the
//!   temporal hyperedges)
//! - Temporal adjacency models ([`adjacency`]) deciding when one event can
//!   follow another
//! - Time-respecting reachability ([`reach`])
//! - [`AdjacencyConfig`], a serializable model selector
//!
//! # Example
//!
//! ```rust
//! use plexus_core::Network;
//! use plexus_temporal::adjacency::LimitedWaitingTime;
//! use plexus_temporal::{reach, DirectedTemporalEdge};
//!
//! type Edge = DirectedTemporalEdge<&'static str, i64>;
//!
//! let net = Network::new(vec![
//!     Edge::new("A", "B", 1),
//!     Edge::new("B", "C", 2),
//!     Edge::new("C", "A", 3),
//! ]).unwrap();
//!
//! let mut adj = LimitedWaitingTime::new(0).unwrap();
//! assert!(reach::is_reachable(&net, &mut adj, &"A", &"C").unwrap());
//! ```

pub mod adjacency;
pub mod config;
mod edge;
pub mod reach;

pub use adjacency::{Exponential, Geometric, LimitedWaitingTime, Linger, Simple, TemporalAdjacency};
pub use config::{AdjacencyConfig, DynAdjacency};
pub use edge::{
    DirectedDelayedTemporalEdge, DirectedTemporalEdge, DirectedTemporalHyperedge,
    UndirectedTemporalEdge, UndirectedTemporalHyperedge,
};
