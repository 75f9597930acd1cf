//! Directed reachability and shortest path lengths on static networks.
//!
//! Edges are followed from cause to effect vertices; undirected edges can be
//! followed either way. Distances count edges (hops), so a hyperedge moves
//! every one of its tails to every one of its heads in a single hop.
//!
//! Hop counts accept any edge type and ignore timestamps, so on a temporal
//! network they describe its static projection. Reachability and in/out
//! components are restricted to static edges; time-respecting reachability
//! lives in `plexus-temporal`.
//!
//! Only vertices that are actually reached show up in the returned maps.
//! There is no "infinite distance" sentinel: `map.contains_key(v)` is the
//! reachability test.

use std::collections::{HashMap, HashSet, VecDeque};

use crate::{Error, Network, NetworkEdge, Result, StaticEdge};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Forward,
    Backward,
}

/// Breadth-first hop counts from vertex index `start`.
///
/// Stops early once `target` is labelled.
fn bfs_levels<E: NetworkEdge>(
    net: &Network<E>,
    start: usize,
    direction: Direction,
    target: Option<usize>,
) -> Vec<(usize, usize)> {
    let mut seen = vec![false; net.vertex_count()];
    let mut queue = VecDeque::new();
    let mut levels = Vec::new();

    seen[start] = true;
    queue.push_back((start, 0usize));

    while let Some((v, dist)) = queue.pop_front() {
        levels.push((v, dist));
        if target == Some(v) {
            break;
        }

        let edges = match direction {
            Direction::Forward => net.out_edge_indices(v),
            Direction::Backward => net.in_edge_indices(v),
        };
        for &e in edges {
            let next = match direction {
                Direction::Forward => net.edge_effect_indices(e),
                Direction::Backward => net.edge_cause_indices(e),
            };
            for &w in next {
                if !seen[w] {
                    seen[w] = true;
                    queue.push_back((w, dist + 1));
                }
            }
        }
    }

    levels
}

fn lookup<E: NetworkEdge>(net: &Network<E>, vert: &E::Vertex) -> Result<usize> {
    net.vertex_index(vert)
        .ok_or_else(|| Error::vertex_not_found(vert))
}

fn to_distance_map<E: NetworkEdge>(
    net: &Network<E>,
    levels: Vec<(usize, usize)>,
) -> HashMap<E::Vertex, usize> {
    levels
        .into_iter()
        .map(|(v, dist)| (net.vertex_at(v).clone(), dist))
        .collect()
}

/// Whether `destination` can be reached from `source` along edge direction.
///
/// Every vertex reaches itself.
///
/// # Errors
///
/// [`Error::InvalidInput`] if either vertex is not in the network.
pub fn is_reachable<E: StaticEdge>(
    net: &Network<E>,
    source: &E::Vertex,
    destination: &E::Vertex,
) -> Result<bool> {
    let src = lookup(net, source)?;
    let dst = lookup(net, destination)?;
    if src == dst {
        return Ok(true);
    }

    let levels = bfs_levels(net, src, Direction::Forward, Some(dst));
    Ok(levels.last().is_some_and(|&(v, _)| v == dst))
}

/// Minimum hop count from `source` to every vertex it reaches.
///
/// `source` maps to 0. Unreachable vertices are absent.
///
/// # Errors
///
/// [`Error::InvalidInput`] if `source` is not in the network.
pub fn shortest_path_lengths_from<E: NetworkEdge>(
    net: &Network<E>,
    source: &E::Vertex,
) -> Result<HashMap<E::Vertex, usize>> {
    let src = lookup(net, source)?;
    let levels = bfs_levels(net, src, Direction::Forward, None);
    tracing::trace!(reached = levels.len(), "shortest path lengths from source");
    Ok(to_distance_map(net, levels))
}

/// Minimum hop count to `destination` from every vertex that reaches it.
///
/// `destination` maps to 0. Vertices that cannot reach it are absent.
///
/// # Errors
///
/// [`Error::InvalidInput`] if `destination` is not in the network.
pub fn shortest_path_lengths_to<E: NetworkEdge>(
    net: &Network<E>,
    destination: &E::Vertex,
) -> Result<HashMap<E::Vertex, usize>> {
    let dst = lookup(net, destination)?;
    let levels = bfs_levels(net, dst, Direction::Backward, None);
    tracing::trace!(reached = levels.len(), "shortest path lengths to destination");
    Ok(to_distance_map(net, levels))
}

/// Every vertex reachable from `vert`, including `vert`.
///
/// # Errors
///
/// [`Error::InvalidInput`] if `vert` is not in the network.
pub fn out_component<E: StaticEdge>(
    net: &Network<E>,
    vert: &E::Vertex,
) -> Result<HashSet<E::Vertex>> {
    let start = lookup(net, vert)?;
    Ok(bfs_levels(net, start, Direction::Forward, None)
        .into_iter()
        .map(|(v, _)| net.vertex_at(v).clone())
        .collect())
}

/// Every vertex that reaches `vert`, including `vert`.
///
/// # Errors
///
/// [`Error::InvalidInput`] if `vert` is not in the network.
pub fn in_component<E: StaticEdge>(
    net: &Network<E>,
    vert: &E::Vertex,
) -> Result<HashSet<E::Vertex>> {
    let start = lookup(net, vert)?;
    Ok(bfs_levels(net, start, Direction::Backward, None)
        .into_iter()
        .map(|(v, _)| net.vertex_at(v).clone())
        .collect())
}
