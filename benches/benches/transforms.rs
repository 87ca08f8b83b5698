//! Benchmarks for the 1D and 2D transforms
//!
//! Run with: cargo bench --bench transforms

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use srdct::reference::dct2_2d_reference;
use srdct::{Dct2d, DctOptions};
use srdct_core::Direction;
use srdct_transform::{Dct1d, TrigTables};

fn test_matrix(len: usize) -> Vec<f32> {
    (0..len).map(|i| ((i * 37) % 256) as f32 / 255.0 - 0.5).collect()
}

fn bench_dct1d(c: &mut Criterion) {
    let mut group = c.benchmark_group("DCT 1D");

    for &len in &[16usize, 256, 4096] {
        let mut tables = TrigTables::<f32>::new();
        tables.ensure_capacity(len).unwrap();
        let dct = Dct1d::<f32>::new(len).unwrap();
        let mut data = test_matrix(len);

        group.throughput(Throughput::Elements(len as u64));
        group.bench_with_input(BenchmarkId::new("forward", len), &len, |b, _| {
            b.iter(|| dct.apply(Direction::Forward, &tables, black_box(&mut data), true));
        });
        group.bench_with_input(BenchmarkId::new("inverse", len), &len, |b, _| {
            b.iter(|| dct.apply(Direction::Inverse, &tables, black_box(&mut data), true));
        });
    }

    group.finish();
}

fn bench_dct2d_sequential_vs_parallel(c: &mut Criterion) {
    let mut group = c.benchmark_group("DCT 2D");

    for &size in &[64usize, 256, 1024] {
        let pixel_count = size * size;
        let input = test_matrix(pixel_count);
        group.throughput(Throughput::Elements(pixel_count as u64));

        let mut sequential =
            Dct2d::<f32>::with_options(size, size, DctOptions::new().threads(1)).unwrap();
        let mut data = input.clone();
        group.bench_function(format!("sequential_{}x{}", size, size), |b| {
            b.iter(|| sequential.forward(black_box(&mut data), true).unwrap());
        });

        let forced = DctOptions::new().parallel_threshold(0);
        let mut parallel = Dct2d::<f32>::with_options(size, size, forced).unwrap();
        let mut data = input.clone();
        group.bench_function(format!("parallel_{}x{}", size, size), |b| {
            b.iter(|| parallel.forward(black_box(&mut data), true).unwrap());
        });
    }

    group.finish();
}

fn bench_roundtrip(c: &mut Criterion) {
    let mut dct = Dct2d::<f64>::new(512, 512).unwrap();
    let mut data: Vec<f64> = test_matrix(512 * 512).into_iter().map(f64::from).collect();

    c.bench_function("roundtrip_512x512_f64", |b| {
        b.iter(|| {
            dct.forward(black_box(&mut data), true).unwrap();
            dct.inverse(black_box(&mut data), true).unwrap();
        });
    });
}

fn bench_reference_comparison(c: &mut Criterion) {
    let mut group = c.benchmark_group("DCT 2D vs direct");
    let input: Vec<f64> = test_matrix(32 * 32).into_iter().map(f64::from).collect();

    group.bench_function("direct_32x32", |b| {
        b.iter(|| dct2_2d_reference(black_box(&input), 32, 32, true));
    });

    let mut dct = Dct2d::<f64>::new(32, 32).unwrap();
    let mut data = input.clone();
    group.bench_function("split_radix_32x32", |b| {
        b.iter(|| dct.forward(black_box(&mut data), true).unwrap());
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_dct1d,
    bench_dct2d_sequential_vs_parallel,
    bench_roundtrip,
    bench_reference_comparison
);
criterion_main!(benches);
