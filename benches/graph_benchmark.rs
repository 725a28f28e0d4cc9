use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use ghostgraph::{GhostToken, GraphConfig, UndirectedGraph, VisitedStrategy};

const SIZE: usize = 300;

/// Ladder graph: vertex `i` links to `i - 1` and `i - 2`.
fn ladder<'brand>(
    token: &mut GhostToken<'brand>,
    visited: VisitedStrategy,
) -> UndirectedGraph<'brand, usize> {
    let config = GraphConfig {
        visited,
        capacity: SIZE,
        ..GraphConfig::default()
    };
    let graph = UndirectedGraph::with_config(config, |v: &usize| {
        black_box(v);
    }, |a: &usize, b: &usize| a == b)
    .unwrap();

    graph.insert_vertex(token, 0, &[]).unwrap();
    graph.insert_vertex(token, 1, &[0]).unwrap();
    for i in 2..SIZE {
        graph.insert_vertex(token, i, &[i - 1, i - 2]).unwrap();
    }
    graph
}

fn bench_graph_traversal(c: &mut Criterion) {
    let mut group = c.benchmark_group("traversal");
    for visited in [VisitedStrategy::TwoPass, VisitedStrategy::ScopedSet] {
        group.bench_with_input(BenchmarkId::new("bfs", format!("{visited:?}")), &visited, |b, &visited| {
            GhostToken::new(|mut token| {
                let graph = ladder(&mut token, visited);
                b.iter(|| graph.breadth_first_traversal(&token).unwrap());
            });
        });
        group.bench_with_input(BenchmarkId::new("dfs", format!("{visited:?}")), &visited, |b, &visited| {
            GhostToken::new(|mut token| {
                let graph = ladder(&mut token, visited);
                b.iter(|| graph.depth_first_traversal(&token).unwrap());
            });
        });
    }
    group.finish();
}

fn bench_graph_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("search_last");
    for visited in [VisitedStrategy::TwoPass, VisitedStrategy::ScopedSet] {
        group.bench_with_input(BenchmarkId::new("bfs", format!("{visited:?}")), &visited, |b, &visited| {
            GhostToken::new(|mut token| {
                let graph = ladder(&mut token, visited);
                b.iter(|| black_box(graph.breadth_first_search(&token, &(SIZE - 1)).unwrap()));
            });
        });
        group.bench_with_input(BenchmarkId::new("dfs", format!("{visited:?}")), &visited, |b, &visited| {
            GhostToken::new(|mut token| {
                let graph = ladder(&mut token, visited);
                b.iter(|| black_box(graph.depth_first_search(&token, &(SIZE - 1)).unwrap()));
            });
        });
    }
    group.finish();
}

fn bench_graph_build_and_destroy(c: &mut Criterion) {
    c.bench_function("ladder_build_destroy", |b| {
        b.iter(|| {
            GhostToken::new(|mut token| {
                let graph = ladder(&mut token, VisitedStrategy::TwoPass);
                black_box(graph.destroy())
            })
        });
    });

    c.bench_function("ladder_delete_middle", |b| {
        b.iter(|| {
            GhostToken::new(|mut token| {
                let graph = ladder(&mut token, VisitedStrategy::TwoPass);
                black_box(graph.delete_vertex(&mut token, &(SIZE / 2)).unwrap())
            })
        });
    });
}

criterion_group!(
    benches,
    bench_graph_traversal,
    bench_graph_search,
    bench_graph_build_and_destroy
);
criterion_main!(benches);
