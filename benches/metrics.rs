//! 指标计算与导出性能基准测试

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use entryform::model::{Entry, EntryListModel, EntryPolicy, Metrics, encode_compact};
use std::hint::black_box;

fn make_entries(count: usize) -> Vec<Entry> {
    (0..count)
        .map(|i| Entry::new(format!("Title {}", i), format!("Content for entry number {}", i)))
        .collect()
}

// ============== Metrics ==============

fn bench_compute_metrics(c: &mut Criterion) {
    let mut group = c.benchmark_group("metrics/compute");

    for size in [10, 100, 1000] {
        let entries = make_entries(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("entries", size), &entries, |b, entries| {
            b.iter(|| Metrics::compute(black_box(entries), 5120));
        });
    }
    group.finish();
}

fn bench_encode_compact(c: &mut Criterion) {
    let mut group = c.benchmark_group("metrics/encode_compact");

    for size in [10, 100, 1000] {
        let entries = make_entries(size);
        group.bench_with_input(BenchmarkId::new("entries", size), &entries, |b, entries| {
            b.iter(|| encode_compact(black_box(entries)));
        });
    }
    group.finish();
}

// ============== Add（含超限预估） ==============

fn bench_add_entry(c: &mut Criterion) {
    let policy = EntryPolicy::default().with_block_add_when_over_limit(true);

    c.bench_function("model/add_entry_block_over_limit", |b| {
        b.iter(|| {
            let mut model = EntryListModel::new(policy);
            for i in 0..50 {
                let _ = model.add_entry("Title", black_box(&format!("content {}", i)));
            }
            model.len()
        });
    });
}

criterion_group!(
    benches,
    bench_compute_metrics,
    bench_encode_compact,
    bench_add_entry
);
criterion_main!(benches);
