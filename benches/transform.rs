//! Benchmarks for the SVY21 forward and inverse transforms

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use svy21::Svy21;

fn bench_forward(c: &mut Criterion) {
    let proj = Svy21::new();
    c.bench_function("to_svy21", |b| {
        b.iter(|| proj.to_svy21(black_box(1.3521), black_box(103.8198)))
    });
}

fn bench_inverse(c: &mut Criterion) {
    let proj = Svy21::new();
    c.bench_function("to_lat_lon", |b| {
        b.iter(|| proj.to_lat_lon(black_box(39105.269), black_box(30629.967)))
    });
}

criterion_group!(benches, bench_forward, bench_inverse);
criterion_main!(benches);
