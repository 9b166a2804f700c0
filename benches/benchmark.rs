// Performance benchmarks for the graph engine and store
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use graphx_core::{
    adjacency_matrix, all_shortest_paths, cartesian, eulerian_cycle, find_radius, hamiltonian_path,
    incidence_matrix, is_tree, Edge, Graph, Node,
};
use graphx_storage::{GraphRepository, GraphStore};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::Arc;

/// A ring over `nodes` nodes plus `chords` random undirected chords.
fn generate_random_graph(nodes: u64, chords: usize, seed: u64) -> Graph {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut edges: Vec<Edge> = (1..=nodes)
        .map(|i| Edge::new(i, Node::new(i), Node::new(i % nodes + 1)))
        .collect();
    for _ in 0..chords {
        let a = rng.random_range(1..=nodes);
        let b = rng.random_range(1..=nodes);
        edges.push(Edge::new(edges.len() as u64 + 1, Node::new(a), Node::new(b)));
    }
    Graph::from_edges(edges)
}

fn benchmark_matrices(c: &mut Criterion) {
    let mut group = c.benchmark_group("matrices");

    for size in [16u64, 64, 256].iter() {
        let graph = generate_random_graph(*size, *size as usize, 7);
        group.bench_with_input(BenchmarkId::new("incidence", size), &graph, |b, graph| {
            b.iter(|| black_box(incidence_matrix(black_box(graph))));
        });
        group.bench_with_input(BenchmarkId::new("adjacency", size), &graph, |b, graph| {
            b.iter(|| black_box(adjacency_matrix(black_box(graph))));
        });
    }

    group.finish();
}

fn benchmark_paths(c: &mut Criterion) {
    let mut group = c.benchmark_group("paths");

    // the search is exhaustive, keep graphs small
    for size in [8u64, 12, 16].iter() {
        let graph = generate_random_graph(*size, 4, 11);
        let target = size / 2;
        group.bench_with_input(BenchmarkId::new("all_shortest", size), &graph, |b, graph| {
            b.iter(|| black_box(all_shortest_paths(black_box(graph), 1, target)));
        });
        group.bench_with_input(BenchmarkId::new("radius", size), &graph, |b, graph| {
            b.iter(|| black_box(find_radius(black_box(graph))));
        });
    }

    group.finish();
}

fn benchmark_circuits(c: &mut Criterion) {
    let mut group = c.benchmark_group("circuits");

    let graph = generate_random_graph(10, 6, 3);
    group.bench_function("hamiltonian", |b| {
        b.iter(|| black_box(hamiltonian_path(black_box(&graph), 1)));
    });

    let ring = generate_random_graph(1000, 0, 0);
    group.bench_function("eulerian_ring_1000", |b| {
        b.iter(|| black_box(eulerian_cycle(black_box(&ring), 1)));
    });
    group.bench_function("is_tree_ring_1000", |b| {
        b.iter(|| black_box(is_tree(black_box(&ring))));
    });

    let a = generate_random_graph(20, 10, 5);
    let b_graph = generate_random_graph(20, 10, 6);
    group.bench_function("cartesian_20x20", |b| {
        b.iter(|| black_box(cartesian(black_box(&a), black_box(&b_graph))));
    });

    group.finish();
}

fn benchmark_concurrent_reads(c: &mut Criterion) {
    let mut group = c.benchmark_group("concurrent_reads");

    let store = Arc::new(GraphStore::new());
    let ids: Vec<u64> = (0..10)
        .filter_map(|i| store.create_graph(generate_random_graph(12, 4, i)).ok())
        .collect();

    group.bench_function("store_radius", |b| {
        b.iter(|| {
            use std::thread;
            let handles: Vec<_> = ids
                .iter()
                .map(|&id| {
                    let store = store.clone();
                    thread::spawn(move || store.graph(id).map(|g| find_radius(&g)))
                })
                .collect();

            for handle in handles {
                black_box(handle.join().unwrap().unwrap());
            }
        });
    });

    group.finish();
}

criterion_group!(benches, benchmark_matrices, benchmark_paths, benchmark_circuits, benchmark_concurrent_reads);
criterion_main!(benches);
