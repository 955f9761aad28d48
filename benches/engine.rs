//! Benchmarks for the quadratic tests and the interval scorer.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use u_duration::report::analyze;
use u_duration::scoring::IntervalScorer;
use u_duration::testing::{mann_kendall, runs_test, shapiro_wilk};

/// Deterministic commute-like durations with a weekly wobble.
fn generate_durations(n: usize) -> Vec<f64> {
    (0..n)
        .map(|i| {
            let weekly = (2.0 * std::f64::consts::PI * i as f64 / 7.0).sin();
            30.0 + 4.0 * weekly + ((i * 37) % 11) as f64 * 0.5
        })
        .collect()
}

fn bench_tests(c: &mut Criterion) {
    let mut group = c.benchmark_group("hypothesis_tests");

    for size in [50, 250, 1000, 4000].iter() {
        let data = generate_durations(*size);

        group.bench_with_input(BenchmarkId::new("mann_kendall", size), size, |b, _| {
            b.iter(|| mann_kendall(black_box(&data)))
        });

        group.bench_with_input(BenchmarkId::new("shapiro_wilk", size), size, |b, _| {
            b.iter(|| shapiro_wilk(black_box(&data)))
        });

        group.bench_with_input(BenchmarkId::new("runs_test", size), size, |b, _| {
            b.iter(|| runs_test(black_box(&data)))
        });
    }

    group.finish();
}

fn bench_scoring(c: &mut Criterion) {
    let mut group = c.benchmark_group("interval_scoring");
    let scorer = IntervalScorer::new();

    for size in [50, 1000].iter() {
        let data = generate_durations(*size);

        group.bench_with_input(BenchmarkId::new("breakdown", size), size, |b, _| {
            b.iter(|| scorer.breakdown(black_box(24.0), black_box(38.0), black_box(&data), 8.0))
        });
    }

    group.finish();
}

fn bench_report(c: &mut Criterion) {
    let data = generate_durations(365);
    c.bench_function("analyze_365", |b| b.iter(|| analyze(black_box(&data))));
}

criterion_group!(benches, bench_tests, bench_scoring, bench_report);
criterion_main!(benches);
