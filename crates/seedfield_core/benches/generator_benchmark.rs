//! Benchmark for sequence draws, Perlin and fBm sampling.
//!
//! Run with: cargo bench --package seedfield_core --bench generator_benchmark

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use seedfield_core::{FbmOptions, Generator};

fn benchmark_next_value(c: &mut Criterion) {
    let generator = Generator::new(42);

    c.bench_function("next_value", |b| {
        b.iter(|| black_box(generator.next_value().get()));
    });
}

fn benchmark_perlin(c: &mut Criterion) {
    let generator = Generator::new(42);

    let mut group = c.benchmark_group("perlin");
    group.bench_function("perlin_1d", |b| {
        let mut x = 0.0f64;
        b.iter(|| {
            x += 0.1;
            black_box(generator.perlin_1d(black_box(x)).get())
        });
    });
    group.bench_function("perlin_2d", |b| {
        let mut x = 0.0f64;
        b.iter(|| {
            x += 0.1;
            black_box(generator.perlin_2d(black_box(x), black_box(x * 0.7)).get())
        });
    });
    group.bench_function("perlin_3d", |b| {
        let mut x = 0.0f64;
        b.iter(|| {
            x += 0.1;
            black_box(
                generator
                    .perlin_3d(black_box(x), black_box(x * 0.7), black_box(x * 1.3))
                    .get(),
            )
        });
    });
    group.finish();
}

fn benchmark_fbm_field(c: &mut Criterion) {
    let generator = Generator::new(42);
    let options = FbmOptions::default();

    let mut group = c.benchmark_group("fbm_field");
    group.throughput(Throughput::Elements(256 * 256));
    group.sample_size(10);

    group.bench_function("256x256_fbm_2d_4_octaves", |b| {
        b.iter(|| {
            for y in 0..256u32 {
                for x in 0..256u32 {
                    black_box(generator.fbm_2d(f64::from(x), f64::from(y), &options).get());
                }
            }
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    benchmark_next_value,
    benchmark_perlin,
    benchmark_fbm_field
);
criterion_main!(benches);
