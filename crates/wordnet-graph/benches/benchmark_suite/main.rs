//! Benchmark suite for the wordnet-graph crate.
//!
//! - SAP single-vertex and set queries on generated taxonomies
//! - Engine reuse versus a fresh engine per query
//! - WordNet construction and noun-level queries
//!
//! # Running Benchmarks
//!
//! ```bash
//! # Run all benchmarks
//! cargo bench --package wordnet-graph
//!
//! # Run specific benchmark
//! cargo bench --package wordnet-graph -- sap_single
//! ```

use criterion::{criterion_group, criterion_main, Criterion};
use std::time::Duration;

mod generators;

mod sap_benches;
mod wordnet_benches;

// ============================================================================
// CRITERION SETUP
// ============================================================================

criterion_group!(
    name = sap_bench_group;
    config = Criterion::default()
        .sample_size(100)
        .measurement_time(Duration::from_secs(5));
    targets = sap_benches::bench_sap_single,
        sap_benches::bench_sap_sets,
        sap_benches::bench_engine_reuse
);

criterion_group!(
    name = wordnet_bench_group;
    config = Criterion::default()
        .sample_size(20)
        .measurement_time(Duration::from_secs(5));
    targets = wordnet_benches::bench_wordnet_build,
        wordnet_benches::bench_noun_queries
);

criterion_main!(sap_bench_group, wordnet_bench_group);
