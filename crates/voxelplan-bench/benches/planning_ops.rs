//! Criterion micro-benchmarks for dependency-graph planning.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use voxelplan_bench::{reference_profile, stress_profile, volume_profile};
use voxelplan_planner::plan;

fn bench_plan_reference(c: &mut Criterion) {
    let config = reference_profile();
    c.bench_function("plan_reference_1000x1000", |b| {
        b.iter(|| black_box(plan(&config).unwrap()));
    });
}

fn bench_plan_stress(c: &mut Criterion) {
    let config = stress_profile();
    c.bench_function("plan_stress_4000x4000", |b| {
        b.iter(|| black_box(plan(&config).unwrap()));
    });
}

fn bench_plan_3d(c: &mut Criterion) {
    let config = volume_profile(3, 256, 32, 4);
    c.bench_function("plan_3d_256_cubed", |b| {
        b.iter(|| black_box(plan(&config).unwrap()));
    });
}

criterion_group!(benches, bench_plan_reference, bench_plan_stress, bench_plan_3d);
criterion_main!(benches);
