//! Criterion benchmarks for the tour heuristics.
//!
//! Uses synthetic Euclidean instances so the numbers measure pure solver
//! overhead independent of any input format.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tsp_heur::constructive::NearestNeighbor;
use tsp_heur::graph::WeightedGraph;
use tsp_heur::kopt::{IncrementalKOpt, KOptConfig, KOptSolver};
use tsp_heur::tour::TourAlgorithm;
use tsp_heur::two_opt::{TwoOptConfig, TwoOptSolver};

fn euclidean_instance(n: usize, seed: u64) -> WeightedGraph<(f64, f64)> {
    let mut rng = StdRng::seed_from_u64(seed);
    let points: Vec<(f64, f64)> = (0..n)
        .map(|_| {
            (
                rng.random_range(0..1000) as f64,
                rng.random_range(0..1000) as f64,
            )
        })
        .collect();
    WeightedGraph::complete(points, |a, b| {
        ((a.0 - b.0).powi(2) + (a.1 - b.1).powi(2)).sqrt()
    })
}

fn bench_two_opt(c: &mut Criterion) {
    let mut group = c.benchmark_group("two_opt");
    group.sample_size(10);

    for &n in &[50, 100, 200] {
        let graph = euclidean_instance(n, 42);
        group.bench_with_input(BenchmarkId::from_parameter(n), &graph, |b, g| {
            b.iter(|| {
                let mut solver =
                    TwoOptSolver::new(TwoOptConfig::default().with_seed(42)).unwrap();
                black_box(solver.compute_tour(black_box(g)).unwrap())
            })
        });
    }
    group.finish();
}

fn bench_kopt(c: &mut Criterion) {
    let mut group = c.benchmark_group("kopt");
    group.sample_size(10);

    for &(k, n) in &[(2usize, 60usize), (3, 40), (4, 25)] {
        let graph = euclidean_instance(n, 42);
        group.bench_with_input(
            BenchmarkId::new(format!("k{k}"), n),
            &graph,
            |b, g| {
                b.iter(|| {
                    let mut solver = KOptSolver::new(KOptConfig::new(k))
                        .unwrap()
                        .with_initializer(NearestNeighbor::from_start(0));
                    black_box(solver.compute_tour(black_box(g)).unwrap())
                })
            },
        );
    }
    group.finish();
}

fn bench_incremental(c: &mut Criterion) {
    let mut group = c.benchmark_group("incremental_kopt");
    group.sample_size(10);

    for &k in &[3usize, 4, 5] {
        let graph = euclidean_instance(30, 42);
        group.bench_with_input(BenchmarkId::from_parameter(k), &graph, |b, g| {
            b.iter(|| {
                let mut solver = IncrementalKOpt::new(KOptConfig::new(k))
                    .unwrap()
                    .with_initializer(NearestNeighbor::from_start(0));
                black_box(solver.compute_tour(black_box(g)).unwrap())
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_two_opt, bench_kopt, bench_incremental);
criterion_main!(benches);
