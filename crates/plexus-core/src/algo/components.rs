//! Connected components analysis.
//!
//! Components here are **weakly** connected: edge direction is ignored and
//! two vertices are connected if some chain of edges links them through any
//! of their cause or effect vertices. For undirected networks this is plain
//! connectivity. Timestamps are ignored as well; for time-respecting
//! reachability see `plexus-temporal`.
//!
//! Every sweep is a depth-first traversal over the network's vertex indices.
//! Full partitions share one visited table, so each vertex and edge is
//! touched once: O(V + E) overall.

use crate::{Error, Network, NetworkEdge, Result};
use std::collections::HashSet;

/// Traverse the weak component of `start`, marking vertices in `seen`.
fn sweep<E: NetworkEdge>(
    net: &Network<E>,
    start: usize,
    seen: &mut [bool],
    size_hint: usize,
) -> Vec<usize> {
    let mut component = Vec::with_capacity(size_hint.max(1));
    let mut stack = Vec::with_capacity(size_hint);

    seen[start] = true;
    stack.push(start);

    while let Some(v) = stack.pop() {
        component.push(v);

        let incoming: &[usize] = if E::DIRECTED {
            net.in_edge_indices(v)
        } else {
            &[]
        };
        for &e in net.out_edge_indices(v).iter().chain(incoming) {
            let effects: &[usize] = if E::DIRECTED {
                net.edge_effect_indices(e)
            } else {
                &[]
            };
            for &w in net.edge_cause_indices(e).iter().chain(effects) {
                if !seen[w] {
                    seen[w] = true;
                    stack.push(w);
                }
            }
        }
    }

    component
}

fn to_vertex_set<E: NetworkEdge>(net: &Network<E>, indices: &[usize]) -> HashSet<E::Vertex> {
    indices.iter().map(|&i| net.vertex_at(i).clone()).collect()
}

/// The component containing `vert`.
///
/// `size_hint` pre-reserves traversal storage and never changes the result.
/// The returned set always contains `vert`, even when it is isolated.
///
/// # Errors
///
/// [`Error::InvalidInput`] if `vert` is not in the network.
pub fn connected_component<E: NetworkEdge>(
    net: &Network<E>,
    vert: &E::Vertex,
    size_hint: usize,
) -> Result<HashSet<E::Vertex>> {
    let start = net
        .vertex_index(vert)
        .ok_or_else(|| Error::vertex_not_found(vert))?;

    let mut seen = vec![false; net.vertex_count()];
    let component = sweep(net, start, &mut seen, size_hint);

    Ok(to_vertex_set(net, &component))
}

/// Whether the network forms a single component.
///
/// An empty network is trivially connected.
#[must_use]
pub fn is_connected<E: NetworkEdge>(net: &Network<E>) -> bool {
    if net.is_empty() {
        return true;
    }
    let mut seen = vec![false; net.vertex_count()];
    sweep(net, 0, &mut seen, net.vertex_count()).len() == net.vertex_count()
}

/// The largest component.
///
/// Vertices are scanned in canonical order and a component only replaces the
/// current best when strictly larger, so among equally large components the
/// one holding the lowest vertex wins. Empty for an empty network.
#[must_use]
pub fn largest_connected_component<E: NetworkEdge>(net: &Network<E>) -> HashSet<E::Vertex> {
    let n = net.vertex_count();
    let mut seen = vec![false; n];
    let mut best: Vec<usize> = Vec::new();

    for v in 0..n {
        if seen[v] {
            continue;
        }
        let component = sweep(net, v, &mut seen, 0);
        if component.len() > best.len() {
            best = component;
        }
        // Nothing left can beat it.
        if best.len() * 2 >= n {
            break;
        }
    }

    tracing::debug!(size = best.len(), verts = n, "largest connected component");
    to_vertex_set(net, &best)
}

/// Partition the network into components.
///
/// Components come out ordered by their lowest vertex. With
/// `singletons == false`, components of a single vertex are left out.
#[must_use]
pub fn connected_components<E: NetworkEdge>(
    net: &Network<E>,
    singletons: bool,
) -> Vec<HashSet<E::Vertex>> {
    let n = net.vertex_count();
    let mut seen = vec![false; n];
    let mut components = Vec::new();

    for v in 0..n {
        if seen[v] {
            continue;
        }
        let component = sweep(net, v, &mut seen, 0);
        if singletons || component.len() > 1 {
            components.push(to_vertex_set(net, &component));
        }
    }

    tracing::debug!(
        components = components.len(),
        verts = n,
        singletons,
        "connected components"
    );
    components
}
