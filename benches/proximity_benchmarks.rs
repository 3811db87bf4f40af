//! Performance benchmarks for the proximity index.
//!
//! Run with: `cargo bench`
//!
//! These benchmarks use synthetic POI data at city scale (hundreds to a
//! few thousand points) to measure index construction and query cost.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use greenreach::engine::ProximityIndex;
use greenreach::synthetic::PoiScenario;
use greenreach::GeoPoint;

// ============================================================================
// Synthetic Data
// ============================================================================

fn dataset(count: usize) -> Vec<greenreach::PointOfInterest> {
    PoiScenario {
        count,
        ..PoiScenario::default()
    }
    .generate()
}

// ============================================================================
// Benchmarks
// ============================================================================

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("build");

    for count in [100usize, 1_000, 5_000] {
        let points = dataset(count);
        group.bench_with_input(BenchmarkId::from_parameter(count), &points, |b, points| {
            b.iter(|| ProximityIndex::build(black_box(points.clone())).unwrap());
        });
    }

    group.finish();
}

fn bench_k_nearest(c: &mut Criterion) {
    let mut group = c.benchmark_group("k_nearest");

    for count in [100usize, 1_000, 5_000] {
        let index = ProximityIndex::build(dataset(count)).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(count), &index, |b, index| {
            b.iter(|| {
                index
                    .k_nearest(black_box(28.6139), black_box(77.2090), 5)
                    .unwrap()
            });
        });
    }

    group.finish();
}

fn bench_batch_accessibility(c: &mut Criterion) {
    // A coarse query grid over the city, the accessibility-map workload.
    let queries: Vec<GeoPoint> = (0..10)
        .flat_map(|i| {
            (0..10).map(move |j| {
                GeoPoint::new(28.45 + i as f64 * 0.035, 77.05 + j as f64 * 0.035)
            })
        })
        .collect();

    let index = ProximityIndex::build(dataset(2_000)).unwrap();

    c.bench_function("nearest_distances/100_queries", |b| {
        b.iter(|| index.nearest_distances(black_box(&queries)).unwrap());
    });
}

criterion_group!(
    benches,
    bench_build,
    bench_k_nearest,
    bench_batch_accessibility
);
criterion_main!(benches);
