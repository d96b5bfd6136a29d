//! Criterion benchmarks for breadth-first traversal

use abprune_engine::graph::Graph;
use criterion::{black_box, criterion_group, criterion_main, Criterion};

/// Grid graph of `side * side` vertices, 4-connected
fn create_grid(side: u32) -> Graph {
    let mut graph = Graph::with_vertices(side * side);
    for row in 0..side {
        for col in 0..side {
            let v = row * side + col + 1;
            if col + 1 < side {
                graph.add_edge(v, v + 1).expect("grid vertex in range");
            }
            if row + 1 < side {
                graph.add_edge(v, v + side).expect("grid vertex in range");
            }
        }
    }
    graph
}

fn benchmark_grid_bfs(c: &mut Criterion) {
    let graph = create_grid(300);

    c.bench_function("bfs_grid_300", |b| {
        b.iter(|| black_box(graph.bfs(1).map(|order| order.len())))
    });
    c.bench_function("traverse_all_grid_300", |b| {
        b.iter(|| black_box(graph.traverse_all().len()))
    });
}

criterion_group!(benches, benchmark_grid_bfs);
criterion_main!(benches);
