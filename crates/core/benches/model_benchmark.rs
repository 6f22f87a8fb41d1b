//! Benchmarks des formules G et F

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use kmerjac_core::{expected_error_rate, expected_jaccard, mash_distance};

fn benchmark_formulas(c: &mut Criterion) {
    let mut group = c.benchmark_group("Formules");

    group.bench_function("expected_jaccard", |b| {
        b.iter(|| expected_jaccard(black_box(0.05), black_box(16)))
    });

    group.bench_function("expected_error_rate", |b| {
        b.iter(|| expected_error_rate(black_box(0.3), black_box(16)))
    });

    group.bench_function("mash_distance", |b| {
        b.iter(|| mash_distance(black_box(0.3), black_box(21)))
    });

    group.finish();
}

criterion_group!(benches, benchmark_formulas);
criterion_main!(benches);
