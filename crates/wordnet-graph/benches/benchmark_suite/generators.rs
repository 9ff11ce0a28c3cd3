//! Deterministic taxonomy generators.

#![allow(dead_code)]

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use wordnet_graph::{Digraph, VertexId};

pub fn rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

/// Hypernym edges of a rooted DAG on `n` vertices: vertex 0 is the root and
/// every other vertex points at 1..=`max_parents` distinct lower ids.
///
/// Parents are biased towards nearby ids so depth grows with `n`.
pub fn taxonomy_edges(n: usize, max_parents: usize, seed: u64) -> Vec<(VertexId, VertexId)> {
    let mut rng = rng(seed);
    let mut edges = Vec::with_capacity(n * max_parents);
    for v in 1..n {
        let parents = rng.gen_range(1..=max_parents.min(v));
        let mut chosen: Vec<VertexId> = Vec::with_capacity(parents);
        while chosen.len() < parents {
            let window = v.min(64);
            let p = v - rng.gen_range(1..=window);
            if !chosen.contains(&p) {
                chosen.push(p);
            }
        }
        edges.extend(chosen.into_iter().map(|p| (v, p)));
    }
    edges
}

pub fn taxonomy(n: usize, max_parents: usize, seed: u64) -> Digraph {
    let edges = taxonomy_edges(n, max_parents, seed);
    match Digraph::from_edges(n, &edges) {
        Ok(graph) => graph,
        Err(e) => panic!("generated edges out of range: {}", e),
    }
}

/// `count` random query pairs over `0..n`.
pub fn query_pairs(n: usize, count: usize, seed: u64) -> Vec<(VertexId, VertexId)> {
    let mut rng = rng(seed);
    (0..count)
        .map(|_| (rng.gen_range(0..n), rng.gen_range(0..n)))
        .collect()
}

/// `count` random vertex sets of `size` vertices each.
pub fn query_sets(n: usize, size: usize, count: usize, seed: u64) -> Vec<Vec<VertexId>> {
    let mut rng = rng(seed);
    (0..count)
        .map(|_| (0..size).map(|_| rng.gen_range(0..n)).collect())
        .collect()
}

/// Synsets and hypernyms text for a generated taxonomy. Synset `i` holds
/// the noun `n{i}`; every third synset also holds `shared{i / 6}`, so most
/// `shared` nouns belong to two synsets.
pub fn wordnet_text(n: usize, max_parents: usize, seed: u64) -> (String, String) {
    let mut synsets = String::new();
    for i in 0..n {
        let shared = if i % 3 == 0 && i > 0 {
            format!(" shared{}", i / 6)
        } else {
            String::new()
        };
        synsets.push_str(&format!("{},n{}{},generated synset {}\n", i, i, shared, i));
    }

    let mut hypernyms = String::new();
    let mut current: Option<VertexId> = None;
    for (v, p) in taxonomy_edges(n, max_parents, seed) {
        if current == Some(v) {
            hypernyms.push_str(&format!(",{}", p));
        } else {
            if current.is_some() {
                hypernyms.push('\n');
            }
            hypernyms.push_str(&format!("{},{}", v, p));
            current = Some(v);
        }
    }
    hypernyms.push('\n');
    (synsets, hypernyms)
}
