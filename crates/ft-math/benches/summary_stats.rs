//! Criterion benchmarks for `ft-math`.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use ft_math::SummaryStats;

fn bench_summary(c: &mut Criterion) {
    let mut group = c.benchmark_group("summary");

    for size in [4usize, 32, 256] {
        let pairs: Vec<(f64, f64)> = (0..size)
            .map(|i| {
                let x = (i as f64 * 7.3) % 100.0;
                (x, 100.0 - x)
            })
            .collect();
        group.bench_with_input(BenchmarkId::new("from_pairs", size), &pairs, |b, pairs| {
            b.iter(|| black_box(SummaryStats::from_pairs(black_box(pairs.iter().copied()))));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_summary);
criterion_main!(benches);
