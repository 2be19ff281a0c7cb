//! Scene construction and extraction benchmarks (criterion - wall-clock time).
//!
//! Run all:    cargo bench --manifest-path benchmarks/Cargo.toml --bench scene
//! Filter:     cargo bench --manifest-path benchmarks/Cargo.toml --bench scene -- extract

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use scenery::{transform_system, Scene};
use scenery_bench::*;

fn bench_initialize(c: &mut Criterion) {
    let mut group = c.benchmark_group("scene/initialize");
    for &n in &[10, 100, 1000, 5000] {
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            b.iter(|| {
                let mut scene = Scene::with_script("Grid", CubeGrid { n, materials: 8 });
                scene.initialize().unwrap();
                scene
            });
        });
    }
    group.finish();
}

fn bench_extract(c: &mut Criterion) {
    let mut group = c.benchmark_group("scene/extract");
    for &n in &[10, 100, 1000, 5000] {
        let scene = setup_grid_scene(n, 8);
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, _| {
            b.iter(|| scene.extract());
        });
    }
    group.finish();
}

fn bench_transform_system(c: &mut Criterion) {
    let mut group = c.benchmark_group("scene/transform_system");
    for &n in &[100, 1000, 5000] {
        let mut scene = setup_grid_scene(n, 1);
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, _| {
            b.iter(|| transform_system(scene.world_mut()));
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_initialize,
    bench_extract,
    bench_transform_system
);
criterion_main!(benches);
