//! Performance benchmarks for recast operations.
//!
//! Run with: cargo bench --package recast

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use recast::{merge, omit, pick, set, set_at, Map, Path, Value};

// ============================================================================
// Helper functions to generate test data
// ============================================================================

/// Generate a flat record with N fields
fn generate_flat_doc(num_fields: usize) -> Value {
    (0..num_fields)
        .map(|i| (format!("field_{i}"), Value::from(i as u64)))
        .collect::<Map>()
        .into()
}

/// Generate a deeply nested record
fn generate_nested_doc(depth: usize) -> Value {
    let mut current = Value::from(Map::from([("value".to_string(), Value::from(42))]));
    for i in (0..depth).rev() {
        let mut map = Map::new();
        map.insert(format!("level_{i}"), current);
        map.insert(format!("sibling_{i}"), generate_flat_doc(8));
        current = Value::from(map);
    }
    current
}

fn nested_path(depth: usize) -> String {
    let mut segments: Vec<String> = (0..depth).map(|i| format!("level_{i}")).collect();
    segments.push("value".to_string());
    segments.join(".")
}

// ============================================================================
// Benchmark: set with varying document shapes
// ============================================================================

fn bench_set_flat(c: &mut Criterion) {
    let mut group = c.benchmark_group("set_flat_doc");

    for size in [10, 100, 1000] {
        let doc = generate_flat_doc(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &doc, |b, doc| {
            b.iter(|| set(black_box("field_0"), black_box(doc), Value::from(1)).unwrap())
        });
    }

    group.finish();
}

fn bench_set_nested(c: &mut Criterion) {
    let mut group = c.benchmark_group("set_nested_doc");

    for depth in [1, 5, 10, 20] {
        let doc = generate_nested_doc(depth);
        let path = Path::parse(&nested_path(depth)).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(depth), &doc, |b, doc| {
            b.iter(|| set_at(black_box(&path), black_box(doc), Value::from(1)).unwrap())
        });
    }

    group.finish();
}

// ============================================================================
// Benchmark: merge and key selection
// ============================================================================

fn bench_merge(c: &mut Criterion) {
    let mut group = c.benchmark_group("merge");

    for depth in [1, 5, 10] {
        let a = generate_nested_doc(depth);
        let b = generate_nested_doc(depth);
        group.bench_with_input(BenchmarkId::from_parameter(depth), &(a, b), |bench, (a, b)| {
            bench.iter(|| {
                merge(
                    black_box(a.as_record().unwrap()),
                    black_box(b.as_record().unwrap()),
                )
            })
        });
    }

    group.finish();
}

fn bench_pick_omit(c: &mut Criterion) {
    let doc = generate_flat_doc(1000);
    let keys: Vec<String> = (0..1000).step_by(10).map(|i| format!("field_{i}")).collect();

    c.bench_function("pick_100_of_1000", |b| b.iter(|| pick(black_box(&doc), &keys)));
    c.bench_function("omit_100_of_1000", |b| b.iter(|| omit(black_box(&doc), &keys)));
}

criterion_group!(
    benches,
    bench_set_flat,
    bench_set_nested,
    bench_merge,
    bench_pick_omit
);
criterion_main!(benches);
