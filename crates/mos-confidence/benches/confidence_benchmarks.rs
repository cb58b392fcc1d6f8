use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use mos_confidence::{
    BootstrapCI, MosCiEstimator, MosIntervalEstimator, SignificanceLevel,
};
use mos_core::{RatingMatrix, RowStatistics};
use rand::prelude::*;

/// Generate a synthetic rating matrix with per-condition success
/// probabilities linearly spaced over (0, 1)
fn generate_matrix(conditions: usize, subjects: usize, seed: u64) -> RatingMatrix {
    let mut rng = StdRng::seed_from_u64(seed);
    let rows: Vec<Vec<u8>> = (0..conditions)
        .map(|condition| {
            let p = (condition + 1) as f64 / (conditions + 1) as f64;
            (0..subjects)
                .map(|_| 1 + (0..4).map(|_| u8::from(rng.gen_bool(p))).sum::<u8>())
                .collect()
        })
        .collect();
    RatingMatrix::from_rows(&rows).unwrap()
}

fn bench_full_analysis(c: &mut Criterion) {
    let mut group = c.benchmark_group("MosAnalysis");
    let sizes = [(5, 24), (20, 24), (20, 100)];

    for &(conditions, subjects) in &sizes {
        let matrix = generate_matrix(conditions, subjects, 42);
        let estimator = MosCiEstimator::new(SignificanceLevel::default()).with_seed(42);

        group.bench_with_input(
            BenchmarkId::new("estimate", format!("{conditions}x{subjects}")),
            &matrix,
            |b, matrix| b.iter(|| estimator.estimate(black_box(matrix))),
        );
    }

    group.finish();
}

fn bench_bootstrap(c: &mut Criterion) {
    let mut group = c.benchmark_group("Bootstrap");
    let resamples = [500, 2000, 5000];

    let matrix = generate_matrix(1, 24, 42);
    let ratings = matrix.row(0);
    let stats = RowStatistics::from_ratings(ratings).unwrap();

    for &n_resamples in &resamples {
        let bootstrap = BootstrapCI::new(SignificanceLevel::default())
            .with_resamples(n_resamples)
            .with_seed(42);

        group.bench_with_input(
            BenchmarkId::new("resamples", n_resamples),
            &n_resamples,
            |b, _| b.iter(|| bootstrap.confidence_interval(black_box(ratings), &stats)),
        );
    }

    group.finish();
}

criterion_group!(benches, bench_full_analysis, bench_bootstrap);
criterion_main!(benches);
