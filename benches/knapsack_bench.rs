//! Criterion benchmarks for the exact knapsack solvers.
//!
//! Uses seeded random instances so results are comparable across runs.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use u_knapsack::backtracking::BacktrackingRunner;
use u_knapsack::bound::BoundMode;
use u_knapsack::branch_bound::{BranchBoundConfig, BranchBoundRunner};
use u_knapsack::problem::{Item, KnapsackProblem};

fn random_instance(n: usize, seed: u64) -> KnapsackProblem {
    let mut rng = StdRng::seed_from_u64(seed);
    let items: Vec<Item> = (0..n)
        .map(|_| {
            Item::new(
                rng.random_range(1.0..100.0),
                rng.random_range(1.0..30.0),
            )
        })
        .collect();

    // Half the total weight: roughly half the items fit, which keeps
    // the search tree non-trivial.
    let capacity = items.iter().map(|it| it.weight).sum::<f64>() / 2.0;
    KnapsackProblem::new(items, capacity).unwrap()
}

fn bench_backtracking(c: &mut Criterion) {
    let mut group = c.benchmark_group("backtracking");
    for &n in &[10usize, 15, 20] {
        let problem = random_instance(n, 42);
        group.bench_with_input(BenchmarkId::from_parameter(n), &problem, |b, p| {
            b.iter(|| BacktrackingRunner::run(black_box(p)).best_value)
        });
    }
    group.finish();
}

fn bench_branch_bound(c: &mut Criterion) {
    let mut group = c.benchmark_group("branch_bound");
    for &n in &[10usize, 15, 20] {
        let problem = random_instance(n, 42);
        for (label, mode) in [
            ("single_item", BoundMode::SingleItem),
            ("fractional", BoundMode::Fractional),
        ] {
            let config = BranchBoundConfig::default().with_bound_mode(mode);
            group.bench_with_input(BenchmarkId::new(label, n), &problem, |b, p| {
                b.iter(|| BranchBoundRunner::run_with_config(black_box(p), &config).best_value)
            });
        }
    }
    group.finish();
}

criterion_group!(benches, bench_backtracking, bench_branch_bound);
criterion_main!(benches);
