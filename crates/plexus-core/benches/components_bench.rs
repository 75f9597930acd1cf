use criterion::{black_box, criterion_group, criterion_main, Criterion};
use plexus_core::algo::{connected_components, largest_connected_component, shortest_path_lengths_from};
use plexus_core::{Network, UndirectedEdge};

fn bench_components(c: &mut Criterion) {
    // 100 rings of 100 vertices each
    let edges = (0..100u32).flat_map(|ring| {
        (0..100u32).map(move |i| UndirectedEdge::new(ring * 100 + i, ring * 100 + (i + 1) % 100))
    });
    let net = Network::new(edges).unwrap();

    c.bench_function("connected_components_10k_vertices", |b| {
        b.iter(|| connected_components(black_box(&net), true))
    });

    c.bench_function("largest_connected_component_10k_vertices", |b| {
        b.iter(|| largest_connected_component(black_box(&net)))
    });

    c.bench_function("shortest_paths_ring_100", |b| {
        b.iter(|| shortest_path_lengths_from(black_box(&net), black_box(&0)))
    });
}

criterion_group!(benches, bench_components);
criterion_main!(benches);
