//! Selection benchmarks using Criterion.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use feature_select::{Cmim, Disr, FeatureSelector, FeatureView};

struct Problem {
    matrix: Vec<f64>,
    class: Vec<f64>,
    weights: Vec<f64>,
    n_samples: usize,
    n_features: usize,
}

/// Pseudo-random discrete features; every eighth one leaks the class with noise
fn generate_problem(n_samples: usize, n_features: usize) -> Problem {
    let mut state = 12345u64;
    let mut next = || {
        state = state.wrapping_mul(6364136223846793005).wrapping_add(1);
        state >> 33
    };

    let class: Vec<f64> = (0..n_samples).map(|_| (next() % 2) as f64).collect();
    let weights: Vec<f64> = (0..n_samples).map(|_| 0.5 + (next() % 4) as f64).collect();

    let mut matrix = Vec::with_capacity(n_samples * n_features);
    for j in 0..n_features {
        for &label in &class {
            let value = if j % 8 == 0 && next() % 4 != 0 {
                label
            } else {
                (next() % 5) as f64
            };
            matrix.push(value);
        }
    }

    Problem {
        matrix,
        class,
        weights,
        n_samples,
        n_features,
    }
}

fn benchmark_selectors(c: &mut Criterion) {
    let problem = generate_problem(2000, 64);
    let view =
        FeatureView::from_column_major(&problem.matrix, problem.n_samples, problem.n_features)
            .unwrap();

    let selectors: [Box<dyn FeatureSelector>; 2] = [Box::new(Cmim::new()), Box::new(Disr::new())];

    let mut group = c.benchmark_group("select");
    group.sample_size(20);
    for selector in &selectors {
        for k in [4usize, 16] {
            group.bench_with_input(BenchmarkId::new(selector.name(), k), &k, |b, &k| {
                b.iter(|| {
                    black_box(
                        selector
                            .select(k, &view, &problem.class, &problem.weights)
                            .unwrap(),
                    )
                });
            });
        }
    }
    group.finish();
}

criterion_group!(benches, benchmark_selectors);
criterion_main!(benches);
