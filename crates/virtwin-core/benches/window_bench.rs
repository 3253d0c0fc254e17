//! Benchmarks for windowing-engine hot paths.
//!
//! Run with: `cargo bench --package virtwin-core --bench window_bench`
//!
//! Scroll handlers run `compute_range` per native scroll event, and a
//! measurement storm can call `measure_item` on most renders, so both
//! must stay O(log n) in the item count.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use virtwin_core::WindowEngine;

fn bench_compute_range(c: &mut Criterion) {
    let mut group = c.benchmark_group("compute_range");
    for count in [1_000usize, 100_000, 1_000_000] {
        let engine = WindowEngine::new(count, 250.0, 8);
        let total = engine.total_extent();
        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, _| {
            let mut offset = 0.0;
            b.iter(|| {
                offset = (offset + 1013.0) % total;
                black_box(engine.compute_range(black_box(offset), 800.0))
            });
        });
    }
    group.finish();
}

fn bench_measure_storm(c: &mut Criterion) {
    let mut group = c.benchmark_group("measure_storm");
    for count in [1_000usize, 100_000] {
        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, &count| {
            let mut engine = WindowEngine::new(count, 250.0, 8);
            let mut idx = 0usize;
            b.iter(|| {
                idx = (idx + 7919) % count;
                engine.measure_item(idx, 250.0 + (idx % 64) as f64);
                black_box(engine.total_extent())
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_compute_range, bench_measure_storm);
criterion_main!(benches);
