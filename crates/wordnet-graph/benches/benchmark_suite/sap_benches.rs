//! SAP query benchmarks.

use criterion::{black_box, BenchmarkId, Criterion};

use wordnet_graph::Sap;

use super::config;
use super::generators::{query_pairs, query_sets, taxonomy};

/// Single-vertex queries over random pairs.
pub fn bench_sap_single(c: &mut Criterion) {
    let mut group = c.benchmark_group("sap_single");

    for &n in config::GRAPH_SIZES {
        let mut sap = Sap::new(taxonomy(n, config::MAX_PARENTS, config::SEED));
        let pairs = query_pairs(n, config::QUERY_BATCH, config::SEED + 1);
        group.bench_with_input(BenchmarkId::new("length", n), &n, |b, _| {
            b.iter(|| {
                for &(v, w) in &pairs {
                    black_box(sap.length(black_box(v), black_box(w)).ok());
                }
            })
        });
        group.bench_with_input(BenchmarkId::new("query", n), &n, |b, _| {
            b.iter(|| {
                for &(v, w) in &pairs {
                    black_box(sap.query([v], [w]).ok());
                }
            })
        });
    }

    group.finish();
}

/// Set queries of growing width on the largest taxonomy.
pub fn bench_sap_sets(c: &mut Criterion) {
    let mut group = c.benchmark_group("sap_sets");
    let n = config::GRAPH_SIZES[config::GRAPH_SIZES.len() - 1];
    let mut sap = Sap::new(taxonomy(n, config::MAX_PARENTS, config::SEED));

    for &size in config::SET_SIZES {
        let left = query_sets(n, size, config::QUERY_BATCH, config::SEED + 2);
        let right = query_sets(n, size, config::QUERY_BATCH, config::SEED + 3);
        group.bench_with_input(BenchmarkId::new("length_sets", size), &size, |b, _| {
            b.iter(|| {
                for (vs, ws) in left.iter().zip(&right) {
                    black_box(sap.length_sets(vs.iter().copied(), ws.iter().copied()).ok());
                }
            })
        });
    }

    group.finish();
}

/// One engine reused across queries versus a new engine per query.
pub fn bench_engine_reuse(c: &mut Criterion) {
    let mut group = c.benchmark_group("sap_engine_reuse");
    let n = 10_000;
    let graph = std::sync::Arc::new(taxonomy(n, config::MAX_PARENTS, config::SEED));
    let pairs = query_pairs(n, config::QUERY_BATCH, config::SEED + 4);

    let mut reused = Sap::new(std::sync::Arc::clone(&graph));
    group.bench_function("reused", |b| {
        b.iter(|| {
            for &(v, w) in &pairs {
                black_box(reused.length(v, w).ok());
            }
        })
    });
    group.bench_function("fresh", |b| {
        b.iter(|| {
            for &(v, w) in &pairs {
                let mut sap = Sap::new(std::sync::Arc::clone(&graph));
                black_box(sap.length(v, w).ok());
            }
        })
    });

    group.finish();
}
