#![allow(missing_docs, clippy::unwrap_used)]
//! Performance benchmarks for the deterministic collection operations
//!
//! These benchmarks measure:
//! - Sorted key extraction cost over growing map sizes
//! - Strict-uniqueness merge throughput
//! - Duplicate scanning over all-distinct input (worst case)
//! - Canonical account-key sorting

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use std::collections::HashMap;

use lockstep_core::{
    contains_duplicates, merge_maps_distinct_keys, sort_account_keys, sorted_keys, AccountKey,
};

/// Multiplicative scatter keeps keys distinct while defeating any
/// insertion-order locality.
fn scattered_keys(count: u64) -> impl Iterator<Item = u64> {
    (0..count).map(|i| (i * 2_654_435_761) % 1_000_003)
}

/// Benchmark sorted key extraction across map sizes
fn bench_sorted_keys(c: &mut Criterion) {
    let sizes = [10u64, 100, 1000];

    for size in sizes {
        let map: HashMap<u64, u64> = scattered_keys(size).map(|key| (key, key * 3)).collect();

        c.bench_with_input(BenchmarkId::new("sorted_keys", size), &map, |b, map| {
            b.iter(|| {
                let keys = sorted_keys(map);
                black_box(keys);
            });
        });
    }
}

/// Benchmark merging disjoint maps under the distinct-keys contract
fn bench_merge_maps(c: &mut Criterion) {
    let sizes = [10u64, 100, 1000];

    for size in sizes {
        let left: HashMap<u64, u64> = scattered_keys(size).map(|key| (key * 2, key)).collect();
        let right: HashMap<u64, u64> =
            scattered_keys(size).map(|key| (key * 2 + 1, key)).collect();

        c.bench_with_input(
            BenchmarkId::new("merge_maps_distinct_keys", size),
            &(left, right),
            |b, (left, right)| {
                b.iter(|| {
                    let merged =
                        merge_maps_distinct_keys(vec![left.clone(), right.clone()]).unwrap();
                    black_box(merged);
                });
            },
        );
    }
}

/// Benchmark duplicate scanning over all-distinct input (full scan, no
/// early exit)
fn bench_contains_duplicates(c: &mut Criterion) {
    let sizes = [10u64, 100, 1000];

    for size in sizes {
        let values: Vec<u64> = scattered_keys(size).collect();

        c.bench_with_input(
            BenchmarkId::new("contains_duplicates_distinct", size),
            &values,
            |b, values| {
                b.iter(|| {
                    let found = contains_duplicates(values);
                    black_box(found);
                });
            },
        );
    }
}

/// Benchmark canonical account-key sorting from reverse order
fn bench_sort_account_keys(c: &mut Criterion) {
    let sizes = [10u32, 100, 1000];

    for size in sizes {
        // Reverse order for worst-case sorting
        let keys: Vec<AccountKey> = (0..size)
            .rev()
            .map(|i| AccountKey::new(format!("owner-{:04}", i / 4), i % 4))
            .collect();

        c.bench_with_input(
            BenchmarkId::new("sort_account_keys", size),
            &keys,
            |b, keys| {
                b.iter(|| {
                    let mut to_sort = keys.clone();
                    sort_account_keys(&mut to_sort);
                    black_box(to_sort);
                });
            },
        );
    }
}

criterion_group!(
    benches,
    bench_sorted_keys,
    bench_merge_maps,
    bench_contains_duplicates,
    bench_sort_account_keys
);

criterion_main!(benches);
