//! Benchmarks for hueshift operations.
//!
//! Run with: `cargo bench`

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use hueshift_bench::gradient;
use hueshift_core::Color;
use hueshift_ops::{ColorShiftEngine, ShiftParameters};

/// Benchmark single-color RGB <-> HSV conversions.
fn bench_convert(c: &mut Criterion) {
    let mut group = c.benchmark_group("convert");
    let colors: Vec<Color> = gradient(100, 100).data().to_vec();
    group.throughput(Throughput::Elements(colors.len() as u64));

    group.bench_function("rgb_to_hsv", |b| {
        b.iter(|| colors.iter().map(|&c| black_box(c).to_hsv()).collect::<Vec<_>>())
    });

    let hsvs: Vec<_> = colors.iter().map(|c| c.to_hsv()).collect();
    group.bench_function("hsv_to_rgb", |b| {
        b.iter(|| hsvs.iter().map(|&h| black_box(h).to_color()).collect::<Vec<_>>())
    });

    group.finish();
}

/// Benchmark the per-pixel shift without image iteration.
fn bench_shift_color(c: &mut Criterion) {
    let params = ShiftParameters::between(
        Color::new(243, 117, 2).to_hsv(),
        Color::new(0, 0, 255).to_hsv(),
    )
    .unwrap();
    c.bench_function("shift_color", |b| {
        b.iter(|| params.shift_color(black_box(Color::new(200, 100, 50))))
    });
}

/// Benchmark full-image apply, sequential vs engine (parallel by default).
fn bench_apply(c: &mut Criterion) {
    let mut group = c.benchmark_group("apply");
    let engine = ColorShiftEngine::default();
    engine.configure(Color::new(0, 160, 90));
    let params = engine.parameters();

    for size in [64u32, 512, 2048].iter() {
        let img = gradient(*size, *size);
        group.throughput(Throughput::Elements(img.pixel_count() as u64));

        group.bench_with_input(BenchmarkId::new("sequential", size), &img, |b, img| {
            b.iter(|| img.mapped(|c| params.shift_color(c)))
        });

        group.bench_with_input(BenchmarkId::new("engine", size), &img, |b, img| {
            b.iter(|| engine.apply(black_box(img)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_convert, bench_shift_color, bench_apply);
criterion_main!(benches);
