//! Matcher benchmarks over the embedded catalog.
//!
//! Run with: `cargo bench`

use agx::index::SearchIndex;
use agx::search;
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

fn bench_rank(c: &mut Criterion) {
    let index = SearchIndex::embedded().unwrap();
    let items = index.items();

    let mut group = c.benchmark_group("matcher");

    group.bench_function("broad_query", |b| {
        b.iter(|| search::rank(black_box("agent"), items))
    });

    group.bench_function("narrow_query", |b| {
        b.iter(|| search::rank(black_box("langgraph"), items))
    });

    group.bench_function("no_match", |b| {
        b.iter(|| search::rank(black_box("zzz-no-match"), items))
    });

    group.bench_function("uncapped", |b| {
        b.iter(|| search::rank_with_cap(black_box("a"), items, 0))
    });

    group.finish();
}

criterion_group!(benches, bench_rank);
criterion_main!(benches);
