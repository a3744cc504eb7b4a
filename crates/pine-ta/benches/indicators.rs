//! Performance benchmarks for pine-ta indicators.
//!
//! Run with: `cargo bench -p pine-ta`
//!
//! Most indicators are O(n); the weighted and kernel smoothers are
//! O(n × period), and the kernel smoother is the expected outlier here.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use pine_ta::indicators::{ema, hma, poly_lsma, rma, rsi, sma, zscore_ema};

/// Deterministic synthetic close series.
fn generate_series(size: usize) -> Vec<f64> {
    let mut price = 100.0;
    let mut data = Vec::with_capacity(size);
    for i in 0..size {
        let delta = ((i as f64 * 0.1).sin() * 2.0) + ((i as f64 * 0.03).cos() * 1.5);
        price += delta;
        price = price.max(10.0);
        data.push(price);
    }
    data
}

fn bench_smoothers(c: &mut Criterion) {
    let mut group = c.benchmark_group("smoothers");

    for size in [1_000, 10_000, 100_000] {
        let data = generate_series(size);
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("sma", size), &data, |b, data| {
            b.iter(|| sma(black_box(data), black_box(20)).unwrap());
        });
        group.bench_with_input(BenchmarkId::new("ema", size), &data, |b, data| {
            b.iter(|| ema(black_box(data), black_box(20)).unwrap());
        });
        group.bench_with_input(BenchmarkId::new("rma", size), &data, |b, data| {
            b.iter(|| rma(black_box(data), black_box(20)).unwrap());
        });
        group.bench_with_input(BenchmarkId::new("hma", size), &data, |b, data| {
            b.iter(|| hma(black_box(data), black_box(20)).unwrap());
        });
    }

    group.finish();
}

fn bench_composites(c: &mut Criterion) {
    let mut group = c.benchmark_group("composites");

    for size in [1_000, 10_000, 100_000] {
        let data = generate_series(size);
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("rsi", size), &data, |b, data| {
            b.iter(|| rsi(black_box(data), black_box(14)).unwrap());
        });
        group.bench_with_input(BenchmarkId::new("zscore_ema", size), &data, |b, data| {
            b.iter(|| zscore_ema(black_box(data), black_box(20)).unwrap());
        });
    }

    group.finish();
}

fn bench_kernel_smoother(c: &mut Criterion) {
    let mut group = c.benchmark_group("poly_lsma");
    let data = generate_series(10_000);
    group.throughput(Throughput::Elements(10_000));

    for (period, order) in [(20, 2), (50, 4), (200, 8)] {
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("p{period}_o{order}")),
            &data,
            |b, data| {
                b.iter(|| poly_lsma(black_box(data), black_box(period), black_box(order)).unwrap());
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_smoothers, bench_composites, bench_kernel_smoother);
criterion_main!(benches);
