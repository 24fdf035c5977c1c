//! Benchmarks for the counting-sort merge.
//!
//! Compares against concatenating and sorting with the std sort.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::arithmetic_side_effects)]
#![allow(clippy::indexing_slicing)]

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use ordered_sort::OrderedListSorter;

/// Build `lists` sorted lists of `len` values in `0..range`.
fn generate_lists(lists: usize, len: usize, range: i32) -> Vec<Vec<i32>> {
    (0..lists)
        .map(|list| {
            let mut values: Vec<i32> = (0..len)
                .map(|i| ((i * 7919 + list * 104_729) as i32).rem_euclid(range))
                .collect();
            values.sort_unstable();
            values
        })
        .collect()
}

fn bench_merge(c: &mut Criterion) {
    let sorter = OrderedListSorter::new();
    let mut group = c.benchmark_group("merge_sorted_lists");

    for (lists, len, range) in [(2, 1_000, 1_000), (8, 10_000, 1_000), (8, 10_000, 100_000)] {
        let input = generate_lists(lists, len, range);
        let id = format!("{lists}x{len}_range{range}");

        group.bench_with_input(BenchmarkId::new("counting", &id), &input, |b, input| {
            b.iter(|| black_box(sorter.sort(input).unwrap()));
        });

        group.bench_with_input(BenchmarkId::new("concat_sort", &id), &input, |b, input| {
            b.iter(|| {
                let mut merged = input.concat();
                merged.sort_unstable();
                black_box(merged)
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_merge);
criterion_main!(benches);
