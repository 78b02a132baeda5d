//! Benchmark for rasterization and fill.

use circle_raster::color::Rgba;
use circle_raster::framebuffer::PixelBuffer;
use circle_raster::render::{draw_aa_circle, draw_circle, draw_line, flood_fill};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

fn circle_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("circle");

    for radius in [50, 150, 400] {
        let mut buf = PixelBuffer::new(1000, 1000).unwrap();

        group.bench_with_input(BenchmarkId::new("aliased", radius), &radius, |b, &r| {
            b.iter(|| draw_circle(&mut buf, 500, 500, black_box(r), Rgba::WHITE));
        });
        group.bench_with_input(BenchmarkId::new("aa", radius), &radius, |b, &r| {
            b.iter(|| draw_aa_circle(&mut buf, 500, 500, black_box(r), Rgba::WHITE));
        });
    }

    group.finish();
}

fn line_benchmark(c: &mut Criterion) {
    let mut buf = PixelBuffer::new(1000, 1000).unwrap();

    c.bench_function("line_0_0_999_500", |b| {
        b.iter(|| draw_line(&mut buf, 0, 0, black_box(999), black_box(500), Rgba::RED));
    });
}

fn fill_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("flood_fill");

    for size in [100u32, 500, 1000] {
        group.bench_with_input(BenchmarkId::from_parameter(format!("{size}x{size}")), &size, |b, &s| {
            b.iter_batched(
                || {
                    let mut buf = PixelBuffer::new(s, s).unwrap();
                    let half = (s / 2) as i32;
                    draw_circle(&mut buf, half, half, half - 2, Rgba::WHITE);
                    buf
                },
                |mut buf| {
                    let half = (s / 2) as i32;
                    flood_fill(&mut buf, half, half, Rgba::BLACK, Rgba::GREEN)
                },
                criterion::BatchSize::LargeInput,
            );
        });
    }

    group.finish();
}

criterion_group!(benches, circle_benchmark, line_benchmark, fill_benchmark);
criterion_main!(benches);
