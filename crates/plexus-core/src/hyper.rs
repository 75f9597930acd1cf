//! Static hyperedges: edges connecting arbitrary vertex sets.
//!
//! | Type | Cause side | Effect side |
//! |------|------------|-------------|
//! | [`DirectedHyperedge`] | tail set | head set |
//! | [`UndirectedHyperedge`] | all verts | all verts |
//!
//! Vertex sets are kept sorted and deduplicated, which makes equality and
//! hashing structural. A vertex may sit on both sides of a directed
//! hyperedge. Empty sides are representable here; [`crate::Network`] rejects
//! them at construction.

use std::fmt;

use crate::edge::{NetworkEdge, NetworkVertex, StaticEdge, VertList};

pub(crate) fn sorted_set<V: Ord>(verts: impl IntoIterator<Item = V>) -> Vec<V> {
    let mut verts: Vec<V> = verts.into_iter().collect();
    verts.sort();
    verts.dedup();
    verts
}

pub(crate) fn write_set<V: fmt::Debug>(f: &mut fmt::Formatter<'_>, verts: &[V]) -> fmt::Result {
    f.write_str("{")?;
    for (i, v) in verts.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{v:?}")?;
    }
    f.write_str("}")
}

/// A directed hyperedge from a set of tails to a set of heads.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DirectedHyperedge<V> {
    tails: Vec<V>,
    heads: Vec<V>,
}

impl<V: NetworkVertex> DirectedHyperedge<V> {
    /// Create a hyperedge. Duplicate vertices within a side are collapsed.
    pub fn new(tails: impl IntoIterator<Item = V>, heads: impl IntoIterator<Item = V>) -> Self {
        Self {
            tails: sorted_set(tails),
            heads: sorted_set(heads),
        }
    }

    /// Cause vertices, sorted.
    pub fn tails(&self) -> &[V] {
        &self.tails
    }

    /// Effect vertices, sorted.
    pub fn heads(&self) -> &[V] {
        &self.heads
    }
}

impl<V: NetworkVertex> NetworkEdge for DirectedHyperedge<V> {
    type Vertex = V;

    const DIRECTED: bool = true;
    const HYPER: bool = true;
    const TEMPORAL: bool = false;

    fn variant_name() -> &'static str {
        "directed_hyperedge"
    }

    fn mutator_verts(&self) -> VertList<V> {
        self.tails.iter().cloned().collect()
    }

    fn mutated_verts(&self) -> VertList<V> {
        self.heads.iter().cloned().collect()
    }

    fn is_out_incident(&self, vert: &V) -> bool {
        self.tails.binary_search(vert).is_ok()
    }

    fn is_in_incident(&self, vert: &V) -> bool {
        self.heads.binary_search(vert).is_ok()
    }
}

impl<V: NetworkVertex> StaticEdge for DirectedHyperedge<V> {}

impl<V: fmt::Debug> fmt::Display for DirectedHyperedge<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_set(f, &self.tails)?;
        f.write_str(" -> ")?;
        write_set(f, &self.heads)
    }
}

/// An undirected hyperedge over a set of vertices.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct UndirectedHyperedge<V> {
    verts: Vec<V>,
}

impl<V: NetworkVertex> UndirectedHyperedge<V> {
    /// Create a hyperedge. Duplicate vertices are collapsed.
    pub fn new(verts: impl IntoIterator<Item = V>) -> Self {
        Self {
            verts: sorted_set(verts),
        }
    }

    /// Member vertices, sorted.
    pub fn verts(&self) -> &[V] {
        &self.verts
    }
}

impl<V: NetworkVertex> NetworkEdge for UndirectedHyperedge<V> {
    type Vertex = V;

    const DIRECTED: bool = false;
    const HYPER: bool = true;
    const TEMPORAL: bool = false;

    fn variant_name() -> &'static str {
        "undirected_hyperedge"
    }

    fn mutator_verts(&self) -> VertList<V> {
        self.incident_verts()
    }

    fn mutated_verts(&self) -> VertList<V> {
        self.incident_verts()
    }

    fn incident_verts(&self) -> VertList<V> {
        self.verts.iter().cloned().collect()
    }

    fn is_out_incident(&self, vert: &V) -> bool {
        self.verts.binary_search(vert).is_ok()
    }

    fn is_in_incident(&self, vert: &V) -> bool {
        self.is_out_incident(vert)
    }
}

impl<V: NetworkVertex> StaticEdge for UndirectedHyperedge<V> {}

impl<V: fmt::Debug> fmt::Display for UndirectedHyperedge<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_set(f, &self.verts)
    }
}
