use fleury_core::RngHandle;
use fleury_graph::{gen_eulerian_circuit, reachable_from, spans_active};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn reachability_bench(c: &mut Criterion) {
    let mut rng = RngHandle::from_seed(7);
    let graph = gen_eulerian_circuit(200, 1_000, &mut rng).unwrap();
    let vertices: Vec<_> = graph.vertex_ids().collect();

    c.bench_function("reachable_from", |b| {
        b.iter(|| {
            for vertex in vertices.iter().take(16) {
                black_box(reachable_from(&graph, *vertex));
            }
        });
    });

    c.bench_function("spans_active", |b| {
        b.iter(|| black_box(spans_active(&graph, vertices[0])));
    });
}

criterion_group!(benches, reachability_bench);
criterion_main!(benches);
