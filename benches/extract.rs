use criterion::{Criterion, criterion_group, criterion_main};
use isomarch::{GridBounds, Point, Region, marching_cubes, marching_squares};

fn sphere_surface(stepsize: f32) {
    let bounds = GridBounds::new(-2.0, 2.0, stepsize).unwrap();
    let vertices = marching_cubes(|p: Point| p.coords.norm_squared(), 1.0, &bounds);
    std::hint::black_box(vertices);
}

fn circle_contour(stepsize: f32) {
    let region = Region::square(-2.0, 2.0, stepsize).unwrap();
    let segments = marching_squares(|p| p.x * p.x + p.y * p.y, 1.0, &region);
    std::hint::black_box(segments);
}

fn extraction_benchmark(c: &mut Criterion) {
    c.bench_function("marching cubes sphere 64^3", |b| {
        b.iter(|| sphere_surface(4.0 / 64.0))
    });
    c.bench_function("marching cubes sphere 128^3", |b| {
        b.iter(|| sphere_surface(4.0 / 128.0))
    });
    c.bench_function("marching squares circle 512^2", |b| {
        b.iter(|| circle_contour(4.0 / 512.0))
    });
}

criterion_group!(benches, extraction_benchmark);
criterion_main!(benches);
