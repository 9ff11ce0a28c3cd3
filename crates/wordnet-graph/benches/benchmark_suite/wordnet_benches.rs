//! WordNet construction and noun query benchmarks.

use criterion::{black_box, BenchmarkId, Criterion};

use wordnet_graph::WordNet;

use super::config;
use super::generators::{query_pairs, wordnet_text};

/// Parse, validate, and index a generated WordNet.
pub fn bench_wordnet_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("wordnet_build");

    for &n in config::GRAPH_SIZES {
        let (synsets, hypernyms) = wordnet_text(n, config::MAX_PARENTS, config::SEED);
        group.bench_with_input(BenchmarkId::new("parse", n), &n, |b, _| {
            b.iter(|| black_box(WordNet::parse(black_box(&synsets), black_box(&hypernyms)).ok()))
        });
    }

    group.finish();
}

/// Noun-level distance queries through the registry lock.
pub fn bench_noun_queries(c: &mut Criterion) {
    let mut group = c.benchmark_group("wordnet_distance");
    let n = 10_000;
    let (synsets, hypernyms) = wordnet_text(n, config::MAX_PARENTS, config::SEED);
    let wordnet = match WordNet::parse(&synsets, &hypernyms) {
        Ok(wordnet) => wordnet,
        Err(e) => panic!("generated WordNet rejected: {}", e),
    };
    let nouns: Vec<(String, String)> = query_pairs(n, config::QUERY_BATCH, config::SEED + 5)
        .into_iter()
        .map(|(a, b)| (format!("n{}", a), format!("n{}", b)))
        .collect();

    group.bench_function("distance", |b| {
        b.iter(|| {
            for (a, b) in &nouns {
                black_box(wordnet.distance(a, b).ok());
            }
        })
    });
    group.bench_function("sap", |b| {
        b.iter(|| {
            for (a, b) in &nouns {
                black_box(wordnet.sap(a, b).ok().flatten().map(str::len));
            }
        })
    });

    group.finish();
}
