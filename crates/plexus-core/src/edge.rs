//! Vertex and edge abstractions, plus the static simple-edge variants.
//!
//! Every edge exposes two (possibly overlapping) vertex sets:
//!
//! - **mutator** (cause, tail) vertices: the side the edge departs from
//! - **mutated** (effect, head) vertices: the side the edge arrives at
//!
//! Undirected variants report the same set for both. Algorithms only talk to
//! edges through [`NetworkEdge`], so one generic implementation serves every
//! variant. Hyperedges live in [`crate::hyper`], temporal variants in the
//! `plexus-temporal` crate.

use smallvec::SmallVec;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Vertex list returned by edge accessors.
///
/// Simple edges never touch more than two vertices, so these stay inline.
pub type VertList<V> = SmallVec<[V; 2]>;

/// Anything usable as a vertex identifier.
///
/// Every edge type satisfies this bound too, which is what makes second-order
/// networks (edges between edges) work without extra machinery.
pub trait NetworkVertex: Clone + Eq + Hash + Ord + fmt::Debug {}

impl<T: Clone + Eq + Hash + Ord + fmt::Debug> NetworkVertex for T {}

/// The edge abstraction every network and algorithm is generic over.
///
/// Equality, hashing and ordering must be structural: two edges with the same
/// cause set, effect set (and time, for temporal edges) compare equal.
pub trait NetworkEdge: Clone + Eq + Hash + Ord + fmt::Debug {
    /// Vertex type connected by this edge.
    type Vertex: NetworkVertex;

    /// Whether cause and effect sides are distinct.
    const DIRECTED: bool;
    /// Whether the edge may touch more than two vertices.
    const HYPER: bool;
    /// Whether the edge carries timestamps (see [`TemporalEdge`]).
    const TEMPORAL: bool;

    /// Short name of the variant, e.g. `directed_edge`.
    fn variant_name() -> &'static str;

    /// Cause (tail) vertices, sorted.
    fn mutator_verts(&self) -> VertList<Self::Vertex>;

    /// Effect (head) vertices, sorted.
    fn mutated_verts(&self) -> VertList<Self::Vertex>;

    /// Every vertex the edge touches, sorted and deduplicated.
    fn incident_verts(&self) -> VertList<Self::Vertex> {
        let mut verts = self.mutator_verts();
        verts.extend(self.mutated_verts());
        verts.sort();
        verts.dedup();
        verts
    }

    /// Whether `vert` is a cause vertex of this edge.
    fn is_out_incident(&self, vert: &Self::Vertex) -> bool {
        self.mutator_verts().contains(vert)
    }

    /// Whether `vert` is an effect vertex of this edge.
    fn is_in_incident(&self, vert: &Self::Vertex) -> bool {
        self.mutated_verts().contains(vert)
    }

    /// Whether `vert` is touched by this edge at all.
    fn is_incident(&self, vert: &Self::Vertex) -> bool {
        self.is_out_incident(vert) || self.is_in_incident(vert)
    }
}

/// Marker for edges without timestamps.
///
/// Static reachability and shortest paths are only defined for these; temporal
/// networks go through the temporal adjacency machinery instead.
pub trait StaticEdge: NetworkEdge {}

/// Scalar time type carried by temporal edges.
///
/// Floating point types are supported, so ordering and hashing go through
/// [`Timestamp::time_cmp`] and [`Timestamp::hash_time`] instead of `Ord`/`Hash`.
pub trait Timestamp: Copy + PartialOrd + fmt::Debug + fmt::Display + Send + Sync + 'static {
    /// The zero duration.
    const ZERO: Self;

    /// Total order over all values, including NaN for floats.
    fn time_cmp(&self, other: &Self) -> Ordering;

    /// Hash consistent with [`Timestamp::time_cmp`] equality.
    fn hash_time<H: Hasher>(&self, state: &mut H);

    /// Idle time spent at a vertex between arriving at `self` and departing at
    /// `later`.
    ///
    /// Integral clocks count an event as occupying its whole tick, so
    /// departing on the next tick is back-to-back and waits zero. Floating
    /// clocks measure the plain difference. Never negative.
    fn waiting_time(self, later: Self) -> Self;
}

/// Timestamps counted in whole ticks.
pub trait IntegralTimestamp: Timestamp {
    /// Convert a tick count, saturating at the type's maximum.
    fn from_u64_saturating(ticks: u64) -> Self;

    /// Convert from `f64` if the value is whole and in range.
    fn from_f64_exact(value: f64) -> Option<Self>;
}

/// Timestamps on a continuous clock.
pub trait FloatTimestamp: Timestamp {
    /// Lossy conversion from `f64`.
    fn from_f64(value: f64) -> Self;

    /// Widening conversion to `f64`.
    fn to_f64(self) -> f64;
}

/// Edges carrying timestamps.
///
/// Implementations must order edges by `(cause_time, effect_time, ..)` first,
/// so a sorted edge list is also time-sorted. Network window queries and the
/// temporal sweeps rely on this.
pub trait TemporalEdge: NetworkEdge {
    /// Time scalar.
    type Time: Timestamp;

    /// Time at which the edge departs its cause vertices.
    fn cause_time(&self) -> Self::Time;

    /// Time at which the edge reaches its effect vertices.
    fn effect_time(&self) -> Self::Time {
        self.cause_time()
    }
}

macro_rules! impl_integral_timestamp {
    ($($t:ty),*) => {$(
        impl Timestamp for $t {
            const ZERO: Self = 0;

            fn time_cmp(&self, other: &Self) -> Ordering {
                self.cmp(other)
            }

            fn hash_time<H: Hasher>(&self, state: &mut H) {
                self.hash(state);
            }

            fn waiting_time(self, later: Self) -> Self {
                if later <= self {
                    0
                } else {
                    later.saturating_sub(self).saturating_sub(1)
                }
            }
        }

        impl IntegralTimestamp for $t {
            fn from_u64_saturating(ticks: u64) -> Self {
                <$t>::try_from(ticks).unwrap_or(<$t>::MAX)
            }

            #[allow(clippy::cast_possible_truncation, clippy::float_cmp)]
            fn from_f64_exact(value: f64) -> Option<Self> {
                if !value.is_finite() || value.fract() != 0.0 {
                    return None;
                }
                // `MAX as f64` rounds up for 64-bit types, so compare against
                // the first value past the range.
                if value < <$t>::MIN as f64 || value >= <$t>::MAX as f64 + 1.0 {
                    return None;
                }
                Some(value as $t)
            }
        }
    )*};
}

macro_rules! impl_float_timestamp {
    ($($t:ty),*) => {$(
        impl Timestamp for $t {
            const ZERO: Self = 0.0;

            fn time_cmp(&self, other: &Self) -> Ordering {
                self.total_cmp(other)
            }

            fn hash_time<H: Hasher>(&self, state: &mut H) {
                self.to_bits().hash(state);
            }

            fn waiting_time(self, later: Self) -> Self {
                if later <= self {
                    0.0
                } else {
                    later - self
                }
            }
        }

        impl FloatTimestamp for $t {
            #[allow(clippy::cast_possible_truncation)]
            fn from_f64(value: f64) -> Self {
                value as $t
            }

            fn to_f64(self) -> f64 {
                f64::from(self)
            }
        }
    )*};
}

impl_integral_timestamp!(i32, i64, u32, u64);
impl_float_timestamp!(f32, f64);

/// A directed edge `tail -> head`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DirectedEdge<V> {
    tail: V,
    head: V,
}

impl<V: NetworkVertex> DirectedEdge<V> {
    /// Create an edge from `tail` to `head`.
    pub fn new(tail: V, head: V) -> Self {
        Self { tail, head }
    }

    /// The cause vertex.
    pub fn tail(&self) -> &V {
        &self.tail
    }

    /// The effect vertex.
    pub fn head(&self) -> &V {
        &self.head
    }
}

impl<V: NetworkVertex> NetworkEdge for DirectedEdge<V> {
    type Vertex = V;

    const DIRECTED: bool = true;
    const HYPER: bool = false;
    const TEMPORAL: bool = false;

    fn variant_name() -> &'static str {
        "directed_edge"
    }

    fn mutator_verts(&self) -> VertList<V> {
        smallvec::smallvec![self.tail.clone()]
    }

    fn mutated_verts(&self) -> VertList<V> {
        smallvec::smallvec![self.head.clone()]
    }

    fn incident_verts(&self) -> VertList<V> {
        match self.tail.cmp(&self.head) {
            Ordering::Less => smallvec::smallvec![self.tail.clone(), self.head.clone()],
            Ordering::Equal => smallvec::smallvec![self.tail.clone()],
            Ordering::Greater => smallvec::smallvec![self.head.clone(), self.tail.clone()],
        }
    }

    fn is_out_incident(&self, vert: &V) -> bool {
        &self.tail == vert
    }

    fn is_in_incident(&self, vert: &V) -> bool {
        &self.head == vert
    }
}

impl<V: NetworkVertex> StaticEdge for DirectedEdge<V> {}

impl<V: fmt::Debug> fmt::Display for DirectedEdge<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} -> {:?}", self.tail, self.head)
    }
}

/// An undirected edge `{v1, v2}`.
///
/// Endpoints are stored in ascending order, so `new(a, b) == new(b, a)`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct UndirectedEdge<V> {
    v1: V,
    v2: V,
}

impl<V: NetworkVertex> UndirectedEdge<V> {
    /// Create an edge between `v1` and `v2`.
    pub fn new(v1: V, v2: V) -> Self {
        if v2 < v1 {
            Self { v1: v2, v2: v1 }
        } else {
            Self { v1, v2 }
        }
    }

    /// Endpoints in ascending order.
    pub fn endpoints(&self) -> (&V, &V) {
        (&self.v1, &self.v2)
    }
}

impl<V: NetworkVertex> NetworkEdge for UndirectedEdge<V> {
    type Vertex = V;

    const DIRECTED: bool = false;
    const HYPER: bool = false;
    const TEMPORAL: bool = false;

    fn variant_name() -> &'static str {
        "undirected_edge"
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

impl<V: NetworkVertex> StaticEdge for UndirectedEdge<V> {}

impl<V: fmt::Debug> fmt::Display for UndirectedEdge<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} -- {:?}", self.v1, self.v2)
    }
}

/// Directed edge whose endpoints are edges of another network.
pub type SecondOrderDirectedEdge<E> = DirectedEdge<E>;

/// Undirected edge whose endpoints are edges of another network.
pub type SecondOrderUndirectedEdge<E> = UndirectedEdge<E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_directed_edge_sides() {
        let e = DirectedEdge::new(2, 1);

        assert_eq!(e.mutator_verts().as_slice(), &[2]);
        assert_eq!(e.mutated_verts().as_slice(), &[1]);
        assert_eq!(e.incident_verts().as_slice(), &[1, 2]);
        assert!(e.is_out_incident(&2));
        assert!(!e.is_out_incident(&1));
        assert!(e.is_in_incident(&1));
    }

    #[test]
    fn test_self_loop_touches_one_vertex() {
        let e = DirectedEdge::new(7, 7);
        assert_eq!(e.incident_verts().as_slice(), &[7]);

        let u = UndirectedEdge::new(7, 7);
        assert_eq!(u.incident_verts().as_slice(), &[7]);
    }

    #[test]
    fn test_undirected_edge_is_canonical() {
        let a = UndirectedEdge::new("b", "a");
        let b = UndirectedEdge::new("a", "b");

        assert_eq!(a, b);
        assert_eq!(a.endpoints(), (&"a", &"b"));
        assert_eq!(a.mutator_verts(), a.mutated_verts());
    }

    #[test]
    fn test_second_order_edge() {
        let inner1 = DirectedEdge::new(1, 2);
        let inner2 = DirectedEdge::new(2, 3);
        let outer: SecondOrderDirectedEdge<DirectedEdge<i32>> =
            DirectedEdge::new(inner1.clone(), inner2.clone());

        assert_eq!(outer.tail(), &inner1);
        assert_eq!(outer.head(), &inner2);
        assert_eq!(format!("{outer}"), "DirectedEdge { tail: 1, head: 2 } -> DirectedEdge { tail: 2, head: 3 }");
    }

    #[test]
    fn test_integral_waiting_time() {
        assert_eq!(5i64.waiting_time(5), 0);
        assert_eq!(5i64.waiting_time(6), 0);
        assert_eq!(5i64.waiting_time(8), 2);
        assert_eq!(5u32.waiting_time(3), 0);
        assert_eq!(i64::MIN.waiting_time(i64::MAX), i64::MAX - 1);
    }

    #[test]
    fn test_float_waiting_time() {
        assert!((1.0f64.waiting_time(3.5) - 2.5).abs() < 1e-12);
        assert_eq!(2.0f64.waiting_time(2.0), 0.0);
        assert_eq!(2.0f64.waiting_time(1.0), 0.0);
    }

    #[test]
    fn test_from_f64_exact() {
        assert_eq!(i64::from_f64_exact(5.0), Some(5));
        assert_eq!(i64::from_f64_exact(5.5), None);
        assert_eq!(u32::from_f64_exact(-1.0), None);
        assert_eq!(i32::from_f64_exact(f64::NAN), None);
    }

    #[test]
    fn test_from_f64_exact_upper_bound() {
        assert_eq!(i64::from_f64_exact(9.223_372_036_854_775_808e18), None);
        assert_eq!(u64::from_f64_exact(18_446_744_073_709_551_616.0), None);
        assert_eq!(i32::from_f64_exact(2_147_483_647.0), Some(i32::MAX));
        assert_eq!(i32::from_f64_exact(2_147_483_648.0), None);
        assert_eq!(u32::from_f64_exact(4_294_967_295.0), Some(u32::MAX));
        assert_eq!(i64::from_f64_exact(-9.223_372_036_854_775_808e18), Some(i64::MIN));
    }
}
