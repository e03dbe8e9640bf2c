//! Benchmarks for lutgrade operations.
//!
//! Run with: `cargo bench`

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::hint::black_box;

use lutgrade_lut::{cube, Lut3DGrid};
use lutgrade_ops::grading::{bake, grade, GradingParams};
use lutgrade_ops::transform::transform_rgba;

fn look(size: usize) -> Lut3DGrid {
    Lut3DGrid::from_fn(size, |c| [c[0] * 0.9 + 0.05, c[1], 1.0 - c[2] * 0.8]).unwrap()
}

fn grading() -> GradingParams {
    GradingParams { exposure: 10.0, contrast: 15.0, saturation: -10.0, temperature: 20.0 }
}

/// Benchmark trilinear sampling at common cube sizes.
fn bench_sample(c: &mut Criterion) {
    let mut group = c.benchmark_group("sample");

    let values: Vec<[f32; 3]> = (0..10000)
        .map(|i| {
            let t = i as f32 / 10000.0;
            [t, 1.0 - t, (t * 7.0).fract()]
        })
        .collect();
    group.throughput(Throughput::Elements(values.len() as u64));

    for size in [17, 33, 65] {
        let lut = look(size);
        group.bench_with_input(BenchmarkId::new("trilinear", size), &values, |b, v| {
            b.iter(|| v.iter().map(|&rgb| lut.sample(black_box(rgb))).collect::<Vec<_>>())
        });
    }

    group.finish();
}

/// Benchmark the grading pipeline per color and baked into a grid.
fn bench_grading(c: &mut Criterion) {
    let mut group = c.benchmark_group("grading");
    let params = grading();

    let values: Vec<[f32; 3]> = (0..10000).map(|i| [i as f32 / 10000.0; 3]).collect();
    group.throughput(Throughput::Elements(values.len() as u64));
    group.bench_function("grade", |b| {
        b.iter(|| values.iter().map(|&rgb| grade(black_box(rgb), &params)).collect::<Vec<_>>())
    });

    for size in [17, 33] {
        group.bench_with_input(BenchmarkId::new("bake", size), &size, |b, &size| {
            b.iter(|| bake(black_box(size), &params, "bench"))
        });
    }

    group.finish();
}

/// Benchmark RGBA8 frame transforms.
fn bench_transform(c: &mut Criterion) {
    let mut group = c.benchmark_group("transform");
    let lut = look(33);
    let params = grading();

    for (width, height) in [(640, 360), (1920, 1080)] {
        let pixel_count = width * height;
        let frame: Vec<u8> = (0..pixel_count * 4).map(|i| (i * 31 % 256) as u8).collect();
        group.throughput(Throughput::Elements(pixel_count as u64));

        group.bench_with_input(BenchmarkId::new("lut_only", pixel_count), &frame, |b, frame| {
            b.iter(|| {
                let mut data = frame.clone();
                transform_rgba(&mut data, Some(&lut), 1.0, &GradingParams::neutral()).unwrap();
                data
            })
        });

        group.bench_with_input(BenchmarkId::new("lut_graded", pixel_count), &frame, |b, frame| {
            b.iter(|| {
                let mut data = frame.clone();
                transform_rgba(&mut data, Some(&lut), 0.8, &params).unwrap();
                data
            })
        });
    }

    group.finish();
}

/// Benchmark .cube serialization and parsing.
fn bench_cube(c: &mut Criterion) {
    let mut group = c.benchmark_group("cube");

    for size in [17, 33] {
        let text = cube::to_string(&look(size));
        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_with_input(BenchmarkId::new("parse", size), &text, |b, text| {
            b.iter(|| cube::parse(black_box(text)).unwrap())
        });
    }

    group.finish();
}

criterion_group!(benches, bench_sample, bench_grading, bench_transform, bench_cube);

criterion_main!(benches);
