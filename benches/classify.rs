use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use mandelbrot_zoom::{
    DEFAULT_DENSITY, DEFAULT_MAX_ITERATIONS, DisplayHint, MandelbrotStabilityTest, PixelRect,
    Viewport, classify, classify_parallel_rayon, generate_grid, rasterize_points,
};

fn classic_viewport() -> Viewport {
    Viewport::new(-2.0, -1.5, 0.5, 1.5).expect("classic viewport is valid")
}

fn bench_generate_grid(c: &mut Criterion) {
    let viewport = classic_viewport();

    c.bench_function("generate_grid/500", |b| {
        b.iter(|| generate_grid(black_box(viewport), black_box(DEFAULT_DENSITY)))
    });
}

fn bench_classify(c: &mut Criterion) {
    let lattice = generate_grid(classic_viewport(), DEFAULT_DENSITY);
    let test = MandelbrotStabilityTest::new(DEFAULT_MAX_ITERATIONS)
        .expect("default iteration budget is valid");

    let mut group = c.benchmark_group("classify");
    group.sample_size(20);

    group.bench_with_input(BenchmarkId::new("serial", DEFAULT_DENSITY), &lattice, |b, l| {
        b.iter(|| classify(black_box(l), &test))
    });
    group.bench_with_input(BenchmarkId::new("rayon", DEFAULT_DENSITY), &lattice, |b, l| {
        b.iter(|| classify_parallel_rayon(black_box(l), &test))
    });

    group.finish();
}

fn bench_rasterize(c: &mut Criterion) {
    let viewport = classic_viewport();
    let lattice = generate_grid(viewport, DEFAULT_DENSITY);
    let test = MandelbrotStabilityTest::new(DEFAULT_MAX_ITERATIONS)
        .expect("default iteration budget is valid");
    let points = classify_parallel_rayon(&lattice, &test);
    let pixel_rect = PixelRect::from_size(800, 600).expect("800x600 is a valid size");
    let hint = DisplayHint::default();

    c.bench_function("rasterize_points/800x600", |b| {
        b.iter(|| rasterize_points(black_box(&points), viewport, pixel_rect, &hint))
    });
}

criterion_group!(benches, bench_generate_grid, bench_classify, bench_rasterize);
criterion_main!(benches);
