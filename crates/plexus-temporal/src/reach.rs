//! Time-respecting reachability.
//!
//! A time-respecting path is a sequence of edges where every consecutive pair
//! satisfies [`TemporalAdjacency::follows`]. The sweep runs breadth-first over
//! *edges*: every edge leaving the source starts a path, and an edge `b` is
//! reached once some already reached edge `a` is followed by it.
//!
//! Candidates for `b` come from the out-edge rows of `a`'s effect vertices.
//! Those rows are in time order, so the scan starts at `a`'s arrival time and
//! stops as soon as the wait exceeds a bounded maximum linger. Every
//! `(a, b)` pair is offered to the model at most once, which keeps the call
//! sequence of randomized models reproducible for a given network and source.

use std::collections::{HashSet, VecDeque};

use plexus_core::{Error, Network, Result, TemporalEdge, Timestamp};

use crate::adjacency::TemporalAdjacency;

/// Visit every edge reachable from vertex index `src`.
///
/// `on_vertex` is called for each newly reached vertex; returning `true`
/// stops the sweep.
fn sweep<E, A, F>(net: &Network<E>, adj: &mut A, src: usize, mut on_vertex: F)
where
    E: TemporalEdge,
    A: TemporalAdjacency<E> + ?Sized,
    F: FnMut(usize) -> bool,
{
    let max_linger = adj.maximum_linger();
    let mut edge_seen = vec![false; net.edge_count()];
    let mut vert_seen = vec![false; net.vertex_count()];
    // Last edge that offered each candidate, so hyperedges with several
    // shared vertices query a pair once.
    let mut last_offer = vec![usize::MAX; net.edge_count()];
    let mut queue = VecDeque::new();

    vert_seen[src] = true;
    for &e in net.out_edge_indices(src) {
        edge_seen[e] = true;
        queue.push_back(e);
    }

    let mut queries = 0usize;
    while let Some(a) = queue.pop_front() {
        for &w in net.edge_effect_indices(a) {
            if !vert_seen[w] {
                vert_seen[w] = true;
                if on_vertex(w) {
                    tracing::trace!(queries, "reachability sweep stopped early");
                    return;
                }
            }
        }

        let edge_a = net.edge_at(a);
        let arrival = edge_a.effect_time();
        for &w in net.edge_effect_indices(a) {
            let row = net.out_edge_indices(w);
            let start = row.partition_point(|&i| net.edge_at(i).cause_time() < arrival);

            for &b in &row[start..] {
                let edge_b = net.edge_at(b);
                let wait = arrival.waiting_time(edge_b.cause_time());
                if max_linger.is_bounded() && !max_linger.admits(wait) {
                    break;
                }
                if edge_seen[b] || last_offer[b] == a {
                    continue;
                }
                last_offer[b] = a;
                queries += 1;
                if adj.linger(edge_a, edge_b).admits(wait) {
                    edge_seen[b] = true;
                    queue.push_back(b);
                }
            }
        }
    }

    tracing::trace!(queries, "reachability sweep finished");
}

fn lookup<E: TemporalEdge>(net: &Network<E>, vert: &E::Vertex) -> Result<usize> {
    net.vertex_index(vert)
        .ok_or_else(|| Error::vertex_not_found(vert))
}

/// Whether a time-respecting path leads from `source` to `destination`.
///
/// Every vertex reaches itself.
///
/// # Errors
///
/// [`Error::InvalidInput`] if either vertex is not in the network.
pub fn is_reachable<E, A>(
    net: &Network<E>,
    adj: &mut A,
    source: &E::Vertex,
    destination: &E::Vertex,
) -> Result<bool>
where
    E: TemporalEdge,
    A: TemporalAdjacency<E> + ?Sized,
{
    let src = lookup(net, source)?;
    let dst = lookup(net, destination)?;
    if src == dst {
        return Ok(true);
    }

    let mut found = false;
    sweep(net, adj, src, |v| {
        found = v == dst;
        found
    });

    tracing::debug!(?source, ?destination, found, "temporal reachability");
    Ok(found)
}

/// Every vertex reachable from `source` by a time-respecting path, including
/// `source`.
///
/// # Errors
///
/// [`Error::InvalidInput`] if `source` is not in the network.
pub fn out_cluster<E, A>(
    net: &Network<E>,
    adj: &mut A,
    source: &E::Vertex,
) -> Result<HashSet<E::Vertex>>
where
    E: TemporalEdge,
    A: TemporalAdjacency<E> + ?Sized,
{
    let src = lookup(net, source)?;
    let mut cluster = HashSet::from([source.clone()]);

    sweep(net, adj, src, |v| {
        cluster.insert(net.vertex_at(v).clone());
        false
    });

    tracing::debug!(?source, size = cluster.len(), "temporal out-cluster");
    Ok(cluster)
}
