//! Line graphs: second-order networks whose vertices are the edges of a
//! first-order network.
//!
//! ```text
//! first order:   1 -> 2 -> 3
//! line graph:    (1 -> 2) => (2 -> 3)
//! ```
//!
//! Every edge of the input becomes a vertex, including edges that end up with
//! no line-graph neighbour. Timestamps are not consulted.

use crate::{DirectedEdge, Network, NetworkEdge, Result, UndirectedEdge};

/// Link `a -> b` whenever an effect vertex of `a` is a cause vertex of `b`.
///
/// Self-links (`a -> a`, from an edge looping back on its own cause) are
/// skipped.
pub fn directed_line_graph<E: NetworkEdge>(net: &Network<E>) -> Result<Network<DirectedEdge<E>>> {
    let mut links = Vec::new();

    for a in 0..net.edge_count() {
        for &w in net.edge_effect_indices(a) {
            for &b in net.out_edge_indices(w) {
                if a != b {
                    links.push(DirectedEdge::new(net.edge_at(a).clone(), net.edge_at(b).clone()));
                }
            }
        }
    }

    tracing::debug!(verts = net.edge_count(), links = links.len(), "directed line graph");
    Network::with_vertices(links, net.edges().iter().cloned())
}

/// Link `{a, b}` whenever `a` and `b` share any vertex.
pub fn undirected_line_graph<E: NetworkEdge>(
    net: &Network<E>,
) -> Result<Network<UndirectedEdge<E>>> {
    let mut links = Vec::new();

    for v in 0..net.vertex_count() {
        let mut incident: Vec<usize> = net
            .out_edge_indices(v)
            .iter()
            .chain(net.in_edge_indices(v))
            .copied()
            .collect();
        incident.sort_unstable();
        incident.dedup();

        for (i, &a) in incident.iter().enumerate() {
            for &b in &incident[i + 1..] {
                links.push(UndirectedEdge::new(net.edge_at(a).clone(), net.edge_at(b).clone()));
            }
        }
    }

    tracing::debug!(verts = net.edge_count(), links = links.len(), "undirected line graph");
    Network::with_vertices(links, net.edges().iter().cloned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algo::is_reachable;

    #[test]
    fn test_directed_line_graph_chain() {
        let e12 = DirectedEdge::new(1, 2);
        let e23 = DirectedEdge::new(2, 3);
        let e45 = DirectedEdge::new(4, 5);
        let net = Network::new(vec![e12.clone(), e23.clone(), e45.clone()]).unwrap();

        let lg = directed_line_graph(&net).unwrap();

        assert_eq!(lg.vertex_count(), 3);
        assert_eq!(lg.edges(), &[DirectedEdge::new(e12.clone(), e23.clone())]);
        assert!(lg.contains_vertex(&e45));
        assert!(is_reachable(&lg, &e12, &e23).unwrap());
        assert!(!is_reachable(&lg, &e23, &e12).unwrap());
    }

    #[test]
    fn test_directed_line_graph_skips_self_links() {
        let net = Network::new(vec![DirectedEdge::new(1, 1)]).unwrap();
        let lg = directed_line_graph(&net).unwrap();

        assert_eq!(lg.vertex_count(), 1);
        assert_eq!(lg.edge_count(), 0);
    }

    #[test]
    fn test_undirected_line_graph_star() {
        let net = Network::new(vec![
            UndirectedEdge::new(0, 1),
            UndirectedEdge::new(0, 2),
            UndirectedEdge::new(0, 3),
        ])
        .unwrap();

        let lg = undirected_line_graph(&net).unwrap();

        // Three edges sharing vertex 0 form a triangle.
        assert_eq!(lg.vertex_count(), 3);
        assert_eq!(lg.edge_count(), 3);
        assert_eq!(lg.to_string(), "<network[undirected_edge] with 3 verts and 3 edges>");
    }
}
