//! Temporal edge types.
//!
//! Each variant pairs a static vertex structure with one timestamp, except
//! [`DirectedDelayedTemporalEdge`], which departs at a cause time and arrives
//! at a later effect time.
//!
//! All variants order by time first and then by structure, so a sorted edge
//! list is a chronological one. Timestamps may be floating point; ordering and
//! hashing use [`Timestamp::time_cmp`] and [`Timestamp::hash_time`].

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use plexus_core::{
    DirectedHyperedge, Error, NetworkEdge, NetworkVertex, Result, TemporalEdge, Timestamp,
    UndirectedHyperedge, VertList,
};

/// Structural equality, ordering and hashing for a time-stamped edge:
/// compare the listed time fields first, then whatever `$rest` returns.
macro_rules! impl_time_ordered {
    ($ty:ident, [$($time:ident),+], $rest:ident) => {
        impl<V: NetworkVertex, T: Timestamp> PartialEq for $ty<V, T> {
            fn eq(&self, other: &Self) -> bool {
                self.cmp(other) == Ordering::Equal
            }
        }

        impl<V: NetworkVertex, T: Timestamp> Eq for $ty<V, T> {}

        impl<V: NetworkVertex, T: Timestamp> PartialOrd for $ty<V, T> {
            fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
                Some(self.cmp(other))
            }
        }

        impl<V: NetworkVertex, T: Timestamp> Ord for $ty<V, T> {
            fn cmp(&self, other: &Self) -> Ordering {
                Ordering::Equal
                    $(.then_with(|| self.$time.time_cmp(&other.$time)))+
                    .then_with(|| self.$rest().cmp(&other.$rest()))
            }
        }

        impl<V: NetworkVertex, T: Timestamp> Hash for $ty<V, T> {
            fn hash<H: Hasher>(&self, state: &mut H) {
                $(self.$time.hash_time(state);)+
                self.$rest().hash(state);
            }
        }
    };
}

/// A directed edge `tail -> head` at a single point in time.
#[derive(Debug, Clone, Copy)]
pub struct DirectedTemporalEdge<V, T> {
    tail: V,
    head: V,
    time: T,
}

impl<V: NetworkVertex, T: Timestamp> DirectedTemporalEdge<V, T> {
    /// Create an edge from `tail` to `head` at `time`.
    pub fn new(tail: V, head: V, time: T) -> Self {
        Self { tail, head, time }
    }

    /// The cause vertex.
    pub fn tail(&self) -> &V {
        &self.tail
    }

    /// The effect vertex.
    pub fn head(&self) -> &V {
        &self.head
    }

    /// When the edge happens.
    pub fn time(&self) -> T {
        self.time
    }

    fn endpoints(&self) -> (&V, &V) {
        (&self.tail, &self.head)
    }
}

impl_time_ordered!(DirectedTemporalEdge, [time], endpoints);

impl<V: NetworkVertex, T: Timestamp> NetworkEdge for DirectedTemporalEdge<V, T> {
    type Vertex = V;

    const DIRECTED: bool = true;
    const HYPER: bool = false;
    const TEMPORAL: bool = true;

    fn variant_name() -> &'static str {
        "directed_temporal_edge"
    }

    fn mutator_verts(&self) -> VertList<V> {
        smallvec::smallvec![self.tail.clone()]
    }

    fn mutated_verts(&self) -> VertList<V> {
        smallvec::smallvec![self.head.clone()]
    }

    fn is_out_incident(&self, vert: &V) -> bool {
        &self.tail == vert
    }

    fn is_in_incident(&self, vert: &V) -> bool {
        &self.head == vert
    }
}

impl<V: NetworkVertex, T: Timestamp> TemporalEdge for DirectedTemporalEdge<V, T> {
    type Time = T;

    fn cause_time(&self) -> T {
        self.time
    }
}

impl<V: fmt::Debug, T: fmt::Display> fmt::Display for DirectedTemporalEdge<V, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} -> {:?} @ {}", self.tail, self.head, self.time)
    }
}

/// An undirected edge `{v1, v2}` at a single point in time.
///
/// Endpoints are stored in ascending order.
#[derive(Debug, Clone, Copy)]
pub struct UndirectedTemporalEdge<V, T> {
    v1: V,
    v2: V,
    time: T,
}

impl<V: NetworkVertex, T: Timestamp> UndirectedTemporalEdge<V, T> {
    /// Create an edge between `v1` and `v2` at `time`.
    pub fn new(v1: V, v2: V, time: T) -> Self {
        if v2 < v1 {
            Self { v1: v2, v2: v1, time }
        } else {
            Self { v1, v2, time }
        }
    }

    /// Endpoints in ascending order.
    pub fn endpoints(&self) -> (&V, &V) {
        (&self.v1, &self.v2)
    }

    /// When the edge happens.
    pub fn time(&self) -> T {
        self.time
    }
}

impl_time_ordered!(UndirectedTemporalEdge, [time], endpoints);

impl<V: NetworkVertex, T: Timestamp> NetworkEdge for UndirectedTemporalEdge<V, T> {
    type Vertex = V;

    const DIRECTED: bool = false;
    const HYPER: bool = false;
    const TEMPORAL: bool = true;

    fn variant_name() -> &'static str {
        "undirected_temporal_edge"
    }

    fn mutator_verts(&self) -> VertList<V> {
        self.incident_verts()
    }

    fn mutated_verts(&self) -> VertList<V> {
        self.incident_verts()
    }

    fn incident_verts(&self) -> VertList<V> {
        if self.v1 == self.v2 {
            smallvec::smallvec![self.v1.clone()]
        } else {
            smallvec::smallvec![self.v1.clone(), self.v2.clone()]
        }
    }

    fn is_out_incident(&self, vert: &V) -> bool {
        &self.v1 == vert || &self.v2 == vert
    }

    fn is_in_incident(&self, vert: &V) -> bool {
        self.is_out_incident(vert)
    }
}

impl<V: NetworkVertex, T: Timestamp> TemporalEdge for UndirectedTemporalEdge<V, T> {
    type Time = T;

    fn cause_time(&self) -> T {
        self.time
    }
}

impl<V: fmt::Debug, T: fmt::Display> fmt::Display for UndirectedTemporalEdge<V, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} -- {:?} @ {}", self.v1, self.v2, self.time)
    }
}

/// A directed edge that leaves `tail` at `cause_time` and reaches `head` at
/// `effect_time`.
#[derive(Debug, Clone, Copy)]
pub struct DirectedDelayedTemporalEdge<V, T> {
    tail: V,
    head: V,
    cause_time: T,
    effect_time: T,
}

impl<V: NetworkVertex, T: Timestamp> DirectedDelayedTemporalEdge<V, T> {
    /// Create a delayed edge.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidParameter`] if `effect_time` precedes `cause_time`.
    pub fn new(tail: V, head: V, cause_time: T, effect_time: T) -> Result<Self> {
        if effect_time.time_cmp(&cause_time) == Ordering::Less {
            return Err(Error::invalid_parameter(
                "effect_time",
                format!("arrival {effect_time} precedes departure {cause_time}"),
            ));
        }
        Ok(Self {
            tail,
            head,
            cause_time,
            effect_time,
        })
    }

    /// The cause vertex.
    pub fn tail(&self) -> &V {
        &self.tail
    }

    /// The effect vertex.
    pub fn head(&self) -> &V {
        &self.head
    }

    fn endpoints(&self) -> (&V, &V) {
        (&self.tail, &self.head)
    }
}

impl_time_ordered!(DirectedDelayedTemporalEdge, [cause_time, effect_time], endpoints);

impl<V: NetworkVertex, T: Timestamp> NetworkEdge for DirectedDelayedTemporalEdge<V, T> {
    type Vertex = V;

    const DIRECTED: bool = true;
    const HYPER: bool = false;
    const TEMPORAL: bool = true;

    fn variant_name() -> &'static str {
        "directed_delayed_temporal_edge"
    }

    fn mutator_verts(&self) -> VertList<V> {
        smallvec::smallvec![self.tail.clone()]
    }

    fn mutated_verts(&self) -> VertList<V> {
        smallvec::smallvec![self.head.clone()]
    }

    fn is_out_incident(&self, vert: &V) -> bool {
        &self.tail == vert
    }

    fn is_in_incident(&self, vert: &V) -> bool {
        &self.head == vert
    }
}

impl<V: NetworkVertex, T: Timestamp> TemporalEdge for DirectedDelayedTemporalEdge<V, T> {
    type Time = T;

    fn cause_time(&self) -> T {
        self.cause_time
    }

    fn effect_time(&self) -> T {
        self.effect_time
    }
}

impl<V: fmt::Debug, T: fmt::Display> fmt::Display for DirectedDelayedTemporalEdge<V, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:?} -> {:?} @ {}..{}",
            self.tail, self.head, self.cause_time, self.effect_time
        )
    }
}

/// A directed hyperedge at a single point in time.
#[derive(Debug, Clone)]
pub struct DirectedTemporalHyperedge<V, T> {
    edge: DirectedHyperedge<V>,
    time: T,
}

impl<V: NetworkVertex, T: Timestamp> DirectedTemporalHyperedge<V, T> {
    /// Create a hyperedge from `tails` to `heads` at `time`.
    pub fn new(
        tails: impl IntoIterator<Item = V>,
        heads: impl IntoIterator<Item = V>,
        time: T,
    ) -> Self {
        Self {
            edge: DirectedHyperedge::new(tails, heads),
            time,
        }
    }

    /// The static structure of this edge.
    pub fn static_projection(&self) -> &DirectedHyperedge<V> {
        &self.edge
    }

    /// When the edge happens.
    pub fn time(&self) -> T {
        self.time
    }

    fn structure(&self) -> &DirectedHyperedge<V> {
        &self.edge
    }
}

impl_time_ordered!(DirectedTemporalHyperedge, [time], structure);

impl<V: NetworkVertex, T: Timestamp> NetworkEdge for DirectedTemporalHyperedge<V, T> {
    type Vertex = V;

    const DIRECTED: bool = true;
    const HYPER: bool = true;
    const TEMPORAL: bool = true;

    fn variant_name() -> &'static str {
        "directed_temporal_hyperedge"
    }

    fn mutator_verts(&self) -> VertList<V> {
        self.edge.mutator_verts()
    }

    fn mutated_verts(&self) -> VertList<V> {
        self.edge.mutated_verts()
    }

    fn is_out_incident(&self, vert: &V) -> bool {
        self.edge.is_out_incident(vert)
    }

    fn is_in_incident(&self, vert: &V) -> bool {
        self.edge.is_in_incident(vert)
    }
}

impl<V: NetworkVertex, T: Timestamp> TemporalEdge for DirectedTemporalHyperedge<V, T> {
    type Time = T;

    fn cause_time(&self) -> T {
        self.time
    }
}

impl<V: fmt::Debug, T: fmt::Display> fmt::Display for DirectedTemporalHyperedge<V, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} @ {}", self.edge, self.time)
    }
}

/// An undirected hyperedge at a single point in time.
#[derive(Debug, Clone)]
pub struct UndirectedTemporalHyperedge<V, T> {
    edge: UndirectedHyperedge<V>,
    time: T,
}

impl<V: NetworkVertex, T: Timestamp> UndirectedTemporalHyperedge<V, T> {
    /// Create a hyperedge over `verts` at `time`.
    pub fn new(verts: impl IntoIterator<Item = V>, time: T) -> Self {
        Self {
            edge: UndirectedHyperedge::new(verts),
            time,
        }
    }

    /// The static structure of this edge.
    pub fn static_projection(&self) -> &UndirectedHyperedge<V> {
        &self.edge
    }

    /// When the edge happens.
    pub fn time(&self) -> T {
        self.time
    }

    fn structure(&self) -> &UndirectedHyperedge<V> {
        &self.edge
    }
}

impl_time_ordered!(UndirectedTemporalHyperedge, [time], structure);

impl<V: NetworkVertex, T: Timestamp> NetworkEdge for UndirectedTemporalHyperedge<V, T> {
    type Vertex = V;

    const DIRECTED: bool = false;
    const HYPER: bool = true;
    const TEMPORAL: bool = true;

    fn variant_name() -> &'static str {
        "undirected_temporal_hyperedge"
    }

    fn mutator_verts(&self) -> VertList<V> {
        self.edge.incident_verts()
    }

    fn mutated_verts(&self) -> VertList<V> {
        self.edge.incident_verts()
    }

    fn incident_verts(&self) -> VertList<V> {
        self.edge.incident_verts()
    }

    fn is_out_incident(&self, vert: &V) -> bool {
        self.edge.is_incident(vert)
    }

    fn is_in_incident(&self, vert: &V) -> bool {
        self.edge.is_incident(vert)
    }
}

impl<V: NetworkVertex, T: Timestamp> TemporalEdge for UndirectedTemporalHyperedge<V, T> {
    type Time = T;

    fn cause_time(&self) -> T {
        self.time
    }
}

impl<V: fmt::Debug, T: fmt::Display> fmt::Display for UndirectedTemporalHyperedge<V, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} @ {}", self.edge, self.time)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_temporal_edge_ordering() {
        let e1 = DirectedTemporalEdge::new(0, 1, 100);
        let e2 = DirectedTemporalEdge::new(0, 1, 200);
        let e3 = DirectedTemporalEdge::new(0, 2, 100);

        assert!(e1 < e2); // Earlier time
        assert!(e1 < e3); // Same time, different head
        assert!(e3 < e2); // Time dominates structure
    }

    #[test]
    fn test_float_time_equality_and_hash() {
        let a = UndirectedTemporalEdge::new("x", "y", 1.5);
        let b = UndirectedTemporalEdge::new("y", "x", 1.5);
        let c = UndirectedTemporalEdge::new("x", "y", 2.5);

        assert_eq!(a, b);
        assert_ne!(a, c);

        let set: HashSet<_> = [a, b, c].into_iter().collect();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_delayed_edge_times() {
        let e = DirectedDelayedTemporalEdge::new(1, 2, 10, 15).unwrap();

        assert_eq!(e.cause_time(), 10);
        assert_eq!(e.effect_time(), 15);
        assert_eq!(e.to_string(), "1 -> 2 @ 10..15");
    }

    #[test]
    fn test_delayed_edge_rejects_negative_delay() {
        let err = DirectedDelayedTemporalEdge::new(1, 2, 10, 5).unwrap_err();
        assert!(matches!(err, Error::InvalidParameter { name: "effect_time", .. }));
    }

    #[test]
    fn test_temporal_hyperedge() {
        let e = DirectedTemporalHyperedge::new([2, 1], [3], 7u32);

        assert_eq!(e.mutator_verts().as_slice(), &[1, 2]);
        assert_eq!(e.mutated_verts().as_slice(), &[3]);
        assert_eq!(e.cause_time(), 7);
        assert_eq!(e.effect_time(), 7);
        assert_eq!(e.to_string(), "{1, 2} -> {3} @ 7");

        let u = UndirectedTemporalHyperedge::new(["b", "a"], 0.5);
        assert!(u.is_in_incident(&"a"));
        assert_eq!(u.static_projection().verts(), &["a", "b"]);
    }

    #[test]
    fn test_variant_names() {
        assert_eq!(DirectedTemporalEdge::<i32, i64>::variant_name(), "directed_temporal_edge");
        assert_eq!(
            UndirectedTemporalHyperedge::<i32, f64>::variant_name(),
            "undirected_temporal_hyperedge"
        );
        assert!(DirectedDelayedTemporalEdge::<i32, i64>::TEMPORAL);
        assert!(!UndirectedTemporalEdge::<i32, i64>::DIRECTED);
    }
}
