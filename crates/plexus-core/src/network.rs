//! The immutable network container.

use std::collections::HashMap;
use std::fmt;

use smallvec::SmallVec;

use crate::edge::{NetworkEdge, TemporalEdge, Timestamp};
use crate::{Error, Result};

/// Compressed adjacency: row `i` is `items[offsets[i]..offsets[i + 1]]`.
///
/// Sized from the final row count and filled in a single pass; never resized.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct Incidence {
    offsets: Vec<usize>,
    items: Vec<usize>,
}

impl Incidence {
    /// Transpose `rows` (source -> targets) into a `target_count`-row table.
    ///
    /// Rows of the result come out sorted because sources are visited in order.
    fn transpose(rows: &Incidence, target_count: usize) -> Self {
        let mut offsets = vec![0usize; target_count + 1];
        for &t in &rows.items {
            offsets[t + 1] += 1;
        }
        for i in 0..target_count {
            offsets[i + 1] += offsets[i];
        }

        let mut cursor = offsets.clone();
        let mut items = vec![0usize; rows.items.len()];
        for src in 0..rows.len() {
            for &t in rows.row(src) {
                items[cursor[t]] = src;
                cursor[t] += 1;
            }
        }

        Self { offsets, items }
    }

    fn from_rows(rows: impl ExactSizeIterator<Item = SmallVec<[usize; 2]>>) -> Self {
        let mut offsets = Vec::with_capacity(rows.len() + 1);
        let mut items = Vec::new();
        offsets.push(0);
        for row in rows {
            items.extend(row);
            offsets.push(items.len());
        }
        Self { offsets, items }
    }

    fn len(&self) -> usize {
        self.offsets.len().saturating_sub(1)
    }

    fn row(&self, i: usize) -> &[usize] {
        &self.items[self.offsets[i]..self.offsets[i + 1]]
    }
}

/// Merge two sorted index slices into a sorted, deduplicated list.
fn merge_sorted(a: &[usize], b: &[usize]) -> Vec<usize> {
    let mut out = Vec::with_capacity(a.len() + b.len());
    let (mut i, mut j) = (0, 0);
    while i < a.len() && j < b.len() {
        match a[i].cmp(&b[j]) {
            std::cmp::Ordering::Less => {
                out.push(a[i]);
                i += 1;
            }
            std::cmp::Ordering::Greater => {
                out.push(b[j]);
                j += 1;
            }
            std::cmp::Ordering::Equal => {
                out.push(a[i]);
                i += 1;
                j += 1;
            }
        }
    }
    out.extend_from_slice(&a[i..]);
    out.extend_from_slice(&b[j..]);
    out
}

/// An immutable network over edges of type `E`.
///
/// Built once from an edge list (and optionally extra, possibly isolated,
/// vertices). Duplicate edges collapse into one. All incidence data is
/// tabulated at construction:
///
/// - edges and vertices are stored sorted, which is their canonical order
/// - per-vertex out-incidence (vertex is a cause) and in-incidence (vertex is
///   an effect), identical for undirected edges
/// - per-edge cause and effect vertex indices
/// - per-vertex degree
///
/// Queries never mutate, so a network can be shared freely between threads.
///
/// # Example
///
/// ```rust
/// use plexus_core::{DirectedEdge, Network};
///
/// let net = Network::new(vec![
///     DirectedEdge::new("a", "b"),
///     DirectedEdge::new("b", "c"),
///     DirectedEdge::new("a", "b"),
/// ]).unwrap();
///
/// assert_eq!(net.edge_count(), 2);
/// assert_eq!(net.successors(&"a"), vec!["b"]);
/// assert_eq!(net.in_degree(&"b"), 1);
/// ```
#[derive(Clone)]
pub struct Network<E: NetworkEdge> {
    edges: Vec<E>,
    verts: Vec<E::Vertex>,
    index: HashMap<E::Vertex, usize>,
    /// edge -> cause vertex indices
    edge_causes: Incidence,
    /// edge -> effect vertex indices
    edge_effects: Incidence,
    /// vertex -> edges where it is a cause
    out_incidence: Incidence,
    /// vertex -> edges where it is an effect
    in_incidence: Incidence,
    degrees: Vec<usize>,
}

impl<E: NetworkEdge> Network<E> {
    /// Build a network from an edge list.
    pub fn new(edges: impl IntoIterator<Item = E>) -> Result<Self> {
        Self::with_vertices(edges, std::iter::empty())
    }

    /// Build a network from an edge list plus extra vertices.
    ///
    /// Extra vertices need not touch any edge, which is how isolated vertices
    /// enter a network.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidInput`] if an edge touches no vertex, or if a directed
    /// edge has an empty cause or effect side.
    pub fn with_vertices(
        edges: impl IntoIterator<Item = E>,
        verts: impl IntoIterator<Item = E::Vertex>,
    ) -> Result<Self> {
        let mut edges: Vec<E> = edges.into_iter().collect();
        edges.sort();
        edges.dedup();

        let mut all_verts: Vec<E::Vertex> = verts.into_iter().collect();
        for edge in &edges {
            let causes = edge.mutator_verts();
            let effects = edge.mutated_verts();
            if causes.is_empty() && effects.is_empty() {
                return Err(Error::InvalidInput(format!(
                    "{} {edge:?} has no vertices",
                    E::variant_name()
                )));
            }
            if E::DIRECTED && (causes.is_empty() || effects.is_empty()) {
                return Err(Error::InvalidInput(format!(
                    "{} {edge:?} has an empty {} side",
                    E::variant_name(),
                    if causes.is_empty() { "cause" } else { "effect" }
                )));
            }
            all_verts.extend(causes);
            all_verts.extend(effects);
        }
        all_verts.sort();
        all_verts.dedup();

        let index: HashMap<E::Vertex, usize> = all_verts
            .iter()
            .enumerate()
            .map(|(i, v)| (v.clone(), i))
            .collect();
        let lookup = |v: E::Vertex| index[&v];

        let edge_causes = Incidence::from_rows(
            edges
                .iter()
                .map(|e| e.mutator_verts().into_iter().map(lookup).collect()),
        );
        let out_incidence = Incidence::transpose(&edge_causes, all_verts.len());

        let (edge_effects, in_incidence) = if E::DIRECTED {
            let effects = Incidence::from_rows(
                edges
                    .iter()
                    .map(|e| e.mutated_verts().into_iter().map(lookup).collect()),
            );
            let incoming = Incidence::transpose(&effects, all_verts.len());
            (effects, incoming)
        } else {
            (edge_causes.clone(), out_incidence.clone())
        };

        let degrees = (0..all_verts.len())
            .map(|v| {
                if E::DIRECTED {
                    merge_sorted(out_incidence.row(v), in_incidence.row(v)).len()
                } else {
                    out_incidence.row(v).len()
                }
            })
            .collect();

        tracing::debug!(
            variant = E::variant_name(),
            verts = all_verts.len(),
            edges = edges.len(),
            "built network"
        );

        Ok(Self {
            edges,
            verts: all_verts,
            index,
            edge_causes,
            edge_effects,
            out_incidence,
            in_incidence,
            degrees,
        })
    }

    /// All vertices in canonical (ascending) order.
    pub fn vertices(&self) -> &[E::Vertex] {
        &self.verts
    }

    /// All edges in canonical (ascending) order, duplicates collapsed.
    pub fn edges(&self) -> &[E] {
        &self.edges
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.verts.len()
    }

    /// Number of distinct edges.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Whether the network has no vertices (and hence no edges).
    pub fn is_empty(&self) -> bool {
        self.verts.is_empty()
    }

    /// Whether `vert` belongs to the network.
    pub fn contains_vertex(&self, vert: &E::Vertex) -> bool {
        self.index.contains_key(vert)
    }

    /// Edges in which `vert` is a cause vertex.
    ///
    /// Same as [`Network::out_edges`]; for undirected networks this is every
    /// incident edge.
    pub fn edges_cause(&self, vert: &E::Vertex) -> Vec<&E> {
        self.out_edges(vert)
    }

    /// Edges in which `vert` is an effect vertex.
    ///
    /// Same as [`Network::in_edges`]; for undirected networks this is every
    /// incident edge.
    pub fn edges_effect(&self, vert: &E::Vertex) -> Vec<&E> {
        self.in_edges(vert)
    }

    /// Edges leaving `vert`, in canonical order.
    pub fn out_edges(&self, vert: &E::Vertex) -> Vec<&E> {
        self.index
            .get(vert)
            .map_or_else(Vec::new, |&i| self.resolve(self.out_incidence.row(i)))
    }

    /// Edges entering `vert`, in canonical order.
    pub fn in_edges(&self, vert: &E::Vertex) -> Vec<&E> {
        self.index
            .get(vert)
            .map_or_else(Vec::new, |&i| self.resolve(self.in_incidence.row(i)))
    }

    /// Every edge touching `vert`, each listed once.
    pub fn incident_edges(&self, vert: &E::Vertex) -> Vec<&E> {
        let Some(&i) = self.index.get(vert) else {
            return vec![];
        };
        if E::DIRECTED {
            self.resolve(&merge_sorted(
                self.out_incidence.row(i),
                self.in_incidence.row(i),
            ))
        } else {
            self.resolve(self.out_incidence.row(i))
        }
    }

    /// Every edge with at least one effect vertex (all edges).
    pub fn all_in_edges(&self) -> &[E] {
        &self.edges
    }

    /// Every edge with at least one cause vertex (all edges).
    pub fn all_out_edges(&self) -> &[E] {
        &self.edges
    }

    /// Number of distinct edges touching `vert`. Zero for unknown vertices.
    pub fn degree(&self, vert: &E::Vertex) -> usize {
        self.index.get(vert).map_or(0, |&i| self.degrees[i])
    }

    /// Number of edges entering `vert`.
    pub fn in_degree(&self, vert: &E::Vertex) -> usize {
        self.index
            .get(vert)
            .map_or(0, |&i| self.in_incidence.row(i).len())
    }

    /// Number of edges leaving `vert`.
    pub fn out_degree(&self, vert: &E::Vertex) -> usize {
        self.index
            .get(vert)
            .map_or(0, |&i| self.out_incidence.row(i).len())
    }

    /// Vertices with an edge into `vert`, sorted.
    pub fn predecessors(&self, vert: &E::Vertex) -> Vec<E::Vertex> {
        let Some(&i) = self.index.get(vert) else {
            return vec![];
        };
        self.opposite(i, self.in_incidence.row(i), &self.edge_causes)
    }

    /// Vertices reached by an edge out of `vert`, sorted.
    pub fn successors(&self, vert: &E::Vertex) -> Vec<E::Vertex> {
        let Some(&i) = self.index.get(vert) else {
            return vec![];
        };
        self.opposite(i, self.out_incidence.row(i), &self.edge_effects)
    }

    /// Predecessors and successors combined, sorted.
    pub fn neighbours(&self, vert: &E::Vertex) -> Vec<E::Vertex> {
        let mut verts = self.predecessors(vert);
        if E::DIRECTED {
            verts.extend(self.successors(vert));
            verts.sort();
            verts.dedup();
        }
        verts
    }

    /// Position of `vert` in [`Network::vertices`].
    pub fn vertex_index(&self, vert: &E::Vertex) -> Option<usize> {
        self.index.get(vert).copied()
    }

    /// Vertex at position `i` of [`Network::vertices`].
    ///
    /// # Panics
    ///
    /// If `i >= self.vertex_count()`.
    pub fn vertex_at(&self, i: usize) -> &E::Vertex {
        &self.verts[i]
    }

    /// Edge at position `i` of [`Network::edges`].
    ///
    /// # Panics
    ///
    /// If `i >= self.edge_count()`.
    pub fn edge_at(&self, i: usize) -> &E {
        &self.edges[i]
    }

    /// Indices of edges leaving vertex `i`, ascending.
    pub fn out_edge_indices(&self, i: usize) -> &[usize] {
        self.out_incidence.row(i)
    }

    /// Indices of edges entering vertex `i`, ascending.
    pub fn in_edge_indices(&self, i: usize) -> &[usize] {
        self.in_incidence.row(i)
    }

    /// Vertex indices on the cause side of edge `e`, ascending.
    pub fn edge_cause_indices(&self, e: usize) -> &[usize] {
        self.edge_causes.row(e)
    }

    /// Vertex indices on the effect side of edge `e`, ascending.
    pub fn edge_effect_indices(&self, e: usize) -> &[usize] {
        self.edge_effects.row(e)
    }

    fn resolve(&self, indices: &[usize]) -> Vec<&E> {
        indices.iter().map(|&e| &self.edges[e]).collect()
    }

    /// Vertices on the `side` of `edges`, leaving out `vert` unless an edge
    /// loops on it alone.
    fn opposite(&self, vert: usize, edges: &[usize], side: &Incidence) -> Vec<E::Vertex> {
        let mut found: Vec<usize> = Vec::new();
        for &e in edges {
            let verts = side.row(e);
            if E::DIRECTED || verts.len() == 1 {
                found.extend_from_slice(verts);
            } else {
                found.extend(verts.iter().copied().filter(|&v| v != vert));
            }
        }
        found.sort_unstable();
        found.dedup();
        found.into_iter().map(|v| self.verts[v].clone()).collect()
    }
}

impl<E: TemporalEdge> Network<E> {
    /// `(earliest cause time, latest effect time)`, or `None` without edges.
    pub fn time_window(&self) -> Option<(E::Time, E::Time)> {
        let first = self.edges.first()?.cause_time();
        let last = self
            .edges
            .iter()
            .map(|e| e.effect_time())
            .max_by(|a, b| a.time_cmp(b))?;
        Some((first, last))
    }

    /// Edges whose cause time lies in `[start, end]`.
    pub fn edges_in_window(&self, start: E::Time, end: E::Time) -> &[E] {
        let lo = self.edges.partition_point(|e| e.cause_time() < start);
        let hi = lo + self.edges[lo..].partition_point(|e| e.cause_time() <= end);
        &self.edges[lo..hi]
    }
}

impl<E: NetworkEdge> PartialEq for Network<E> {
    fn eq(&self, other: &Self) -> bool {
        self.edges == other.edges && self.verts == other.verts
    }
}

impl<E: NetworkEdge> Eq for Network<E> {}

impl<E: NetworkEdge> Default for Network<E> {
    fn default() -> Self {
        Self {
            edges: Vec::new(),
            verts: Vec::new(),
            index: HashMap::new(),
            edge_causes: Incidence::default(),
            edge_effects: Incidence::default(),
            out_incidence: Incidence::default(),
            in_incidence: Incidence::default(),
            degrees: Vec::new(),
        }
    }
}

impl<E: NetworkEdge> fmt::Display for Network<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "<network[{}] with {} verts and {} edges>",
            E::variant_name(),
            self.verts.len(),
            self.edges.len()
        )
    }
}

impl<E: NetworkEdge> fmt::Debug for Network<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Network")
            .field("variant", &E::variant_name())
            .field("verts", &self.verts)
            .field("edges", &self.edges)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{DirectedEdge, DirectedHyperedge, UndirectedEdge, UndirectedHyperedge};

    #[test]
    fn test_index_accessors_follow_canonical_order() {
        let net = Network::new(vec![DirectedEdge::new(5, 3), DirectedEdge::new(3, 4)]).unwrap();

        assert_eq!(net.vertex_at(0), &3);
        assert_eq!(net.vertex_index(&5), Some(2));
        assert_eq!(net.edge_at(0), &DirectedEdge::new(3, 4));
    }

    #[test]
    #[should_panic]
    fn test_vertex_at_out_of_range_panics() {
        let net = Network::new(vec![UndirectedEdge::new(1, 2)]).unwrap();
        let _ = net.vertex_at(2);
    }

    #[test]
    #[should_panic]
    fn test_edge_at_out_of_range_panics() {
        let net = Network::new(vec![UndirectedEdge::new(1, 2)]).unwrap();
        let _ = net.edge_at(1);
    }

    #[test]
    fn test_network_basic() {
        let net = Network::new(vec![
            DirectedEdge::new(0, 1),
            DirectedEdge::new(1, 2),
            DirectedEdge::new(2, 0),
        ])
        .unwrap();

        assert_eq!(net.vertex_count(), 3);
        assert_eq!(net.edge_count(), 3);
        assert_eq!(net.successors(&0), vec![1]);
        assert_eq!(net.predecessors(&0), vec![2]);
        assert_eq!(net.neighbours(&0), vec![1, 2]);
        assert_eq!(net.degree(&0), 2);
    }

    #[test]
    fn test_duplicates_collapse() {
        let once = Network::new(vec![DirectedEdge::new(1, 2)]).unwrap();
        let twice = Network::new(vec![DirectedEdge::new(1, 2), DirectedEdge::new(1, 2)]).unwrap();

        assert_eq!(once, twice);
        assert_eq!(twice.edge_count(), 1);
    }

    #[test]
    fn test_isolated_vertices() {
        let net = Network::with_vertices(vec![UndirectedEdge::new(1, 2)], vec![5, 1]).unwrap();

        assert_eq!(net.vertices(), &[1, 2, 5]);
        assert_eq!(net.degree(&5), 0);
        assert!(net.incident_edges(&5).is_empty());
        assert!(net.neighbours(&5).is_empty());
    }

    #[test]
    fn test_unknown_vertex_is_empty() {
        let net = Network::new(vec![DirectedEdge::new(1, 2)]).unwrap();

        assert!(!net.contains_vertex(&9));
        assert_eq!(net.degree(&9), 0);
        assert!(net.out_edges(&9).is_empty());
        assert!(net.successors(&9).is_empty());
    }

    #[test]
    fn test_directed_self_loop() {
        let net = Network::new(vec![DirectedEdge::new(1, 1), DirectedEdge::new(1, 2)]).unwrap();

        assert_eq!(net.in_degree(&1), 1);
        assert_eq!(net.out_degree(&1), 2);
        assert_eq!(net.degree(&1), 2);
        assert_eq!(net.successors(&1), vec![1, 2]);
        assert_eq!(net.predecessors(&1), vec![1]);
    }

    #[test]
    fn test_undirected_incidence() {
        let net = Network::new(vec![
            UndirectedEdge::new(1, 2),
            UndirectedEdge::new(3, 1),
            UndirectedEdge::new(3, 3),
        ])
        .unwrap();

        assert_eq!(net.in_edges(&1), net.out_edges(&1));
        assert_eq!(net.edges_cause(&3), net.edges_effect(&3));
        assert_eq!(net.degree(&1), 2);
        assert_eq!(net.degree(&3), 2);
        assert_eq!(net.neighbours(&1), vec![2, 3]);
        assert_eq!(net.neighbours(&3), vec![1, 3]);
        assert_eq!(net.all_in_edges(), net.edges());
    }

    #[test]
    fn test_hyperedge_on_both_sides() {
        let net = Network::new(vec![DirectedHyperedge::new([1, 2], [2, 3])]).unwrap();

        assert_eq!(net.in_degree(&2), 1);
        assert_eq!(net.out_degree(&2), 1);
        assert_eq!(net.degree(&2), 1);
        assert_eq!(net.incident_edges(&2).len(), 1);
        assert_eq!(net.successors(&1), vec![2, 3]);
        assert_eq!(net.predecessors(&3), vec![1, 2]);
    }

    #[test]
    fn test_empty_side_rejected() {
        let err = Network::new(vec![DirectedHyperedge::new(Vec::<i32>::new(), [1])]).unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));

        let err = Network::new(vec![UndirectedHyperedge::new(Vec::<i32>::new())]).unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));
    }

    #[test]
    fn test_undirected_hyperedge_neighbours() {
        let net = Network::new(vec![UndirectedHyperedge::new([1, 2, 3])]).unwrap();

        assert_eq!(net.neighbours(&2), vec![1, 3]);
        assert_eq!(net.degree(&2), 1);
    }

    #[test]
    fn test_display() {
        let net = Network::new(vec![DirectedEdge::new("a", "b")]).unwrap();
        assert_eq!(net.to_string(), "<network[directed_edge] with 2 verts and 1 edges>");

        let empty: Network<UndirectedEdge<u32>> = Network::default();
        assert_eq!(empty.to_string(), "<network[undirected_edge] with 0 verts and 0 edges>");
        assert_eq!(empty, Network::new(vec![]).unwrap());
    }
}
