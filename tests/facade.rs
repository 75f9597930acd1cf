//! The facade exposes the static and temporal halves side by side.

use plexus::algo::{connected_component, largest_connected_component};
use plexus::temporal::reach::out_cluster;
use plexus::temporal::{AdjacencyConfig, DirectedTemporalEdge, UndirectedTemporalEdge};
use plexus::{Error, Network, UndirectedEdge};

type Contact = UndirectedTemporalEdge<u32, i64>;

#[test]
fn static_and_temporal_views_of_one_contact_list() {
    let contacts = [(1, 2, 0), (2, 3, 4), (4, 5, 1)];

    let static_net =
        Network::new(contacts.iter().map(|&(a, b, _)| UndirectedEdge::new(a, b))).unwrap();
    let temporal_net = Network::new(
        contacts
            .iter()
            .map(|&(a, b, t)| Contact::new(a, b, t)),
    )
    .unwrap();

    assert_eq!(largest_connected_component(&static_net).len(), 3);
    assert_eq!(
        connected_component(&temporal_net, &1, 0).unwrap(),
        connected_component(&static_net, &1, 0).unwrap()
    );

    let mut simple = AdjacencyConfig::Simple.build_integral::<Contact>().unwrap();
    assert_eq!(out_cluster(&temporal_net, simple.as_mut(), &1).unwrap().len(), 2);

    let mut patient = AdjacencyConfig::LimitedWaitingTime { dt: 3.0 }
        .build_integral::<Contact>()
        .unwrap();
    assert_eq!(out_cluster(&temporal_net, patient.as_mut(), &1).unwrap().len(), 3);
}

#[test]
fn errors_are_shared() {
    let net = Network::new(vec![DirectedTemporalEdge::<u32, f64>::new(0, 1, 0.5)]).unwrap();
    let err = AdjacencyConfig::Geometric { p: 0.5, seed: 1 }
        .build_floating::<DirectedTemporalEdge<u32, f64>>()
        .err().unwrap();

    assert!(matches!(err, Error::InvalidParameter { .. }));
    assert!(!err.to_string().is_empty());
    assert_eq!(net.vertex_count(), 2);
}
