//! Benchmarks for tick-signals
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use tick_signals::{
    drop_repeats, fold_past, latch, map, map2, merge_many, record, toggle, History, Signal,
};

// =============================================================================
// STATELESS BENCHMARKS
// =============================================================================

fn bench_map(c: &mut Criterion) {
    c.bench_function("map_present", |b| {
        b.iter(|| map(|x: u32| x.wrapping_mul(3), black_box(Signal::Present(7))))
    });
}

fn bench_merge_many(c: &mut Criterion) {
    let mut group = c.benchmark_group("merge_many_last_present");

    group.bench_function(BenchmarkId::from_parameter(4), |b| {
        let signals = last_present::<4>();
        b.iter(|| merge_many(black_box(signals)))
    });
    group.bench_function(BenchmarkId::from_parameter(16), |b| {
        let signals = last_present::<16>();
        b.iter(|| merge_many(black_box(signals)))
    });
    group.bench_function(BenchmarkId::from_parameter(64), |b| {
        let signals = last_present::<64>();
        b.iter(|| merge_many(black_box(signals)))
    });

    group.finish();
}

fn last_present<const N: usize>() -> [Signal<u32>; N] {
    let mut signals = [Signal::Absent; N];
    signals[N - 1] = Signal::Present(1);
    signals
}

// =============================================================================
// STATEFUL BENCHMARKS
// =============================================================================

fn bench_fold_past(c: &mut Criterion) {
    let mut acc = 0u64;
    c.bench_function("fold_past_sum", |b| {
        b.iter(|| fold_past(|x: u64, s: &u64| s + x, &mut acc, black_box(Signal::Present(1))))
    });
}

fn bench_hold(c: &mut Criterion) {
    let mut cell = 0u32;
    c.bench_function("latch_absent", |b| {
        b.iter(|| latch(black_box(Signal::Absent), &mut cell))
    });

    let mut prev = None;
    c.bench_function("drop_repeats_repeat", |b| {
        b.iter(|| drop_repeats(black_box(Signal::Present(5u32)), &mut prev))
    });
}

fn bench_map2_toggle(c: &mut Criterion) {
    let mut pair = (0i32, 0i32);
    c.bench_function("map2_one_side", |b| {
        b.iter(|| {
            map2(
                |a: &i32, b: &i32| a - b,
                black_box(Signal::Present(3)),
                Signal::Absent,
                &mut pair,
            )
        })
    });

    let mut state = false;
    c.bench_function("toggle", |b| {
        b.iter(|| toggle(false, true, &mut state, black_box(Signal::Present(()))))
    });
}

fn bench_record(c: &mut Criterion) {
    let mut group = c.benchmark_group("record_full_history");

    group.bench_function("cap_8", |b| {
        let mut history: History<u16, 8> = History::filled(0);
        b.iter(|| record(black_box(Signal::Present(1)), &mut history))
    });
    group.bench_function("cap_64", |b| {
        let mut history: History<u16, 64> = History::filled(0);
        b.iter(|| record(black_box(Signal::Present(1)), &mut history))
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_map,
    bench_merge_many,
    bench_fold_past,
    bench_hold,
    bench_map2_toggle,
    bench_record,
);
criterion_main!(benches);
