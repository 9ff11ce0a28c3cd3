//! Test environment helpers.
//!
//! Every helper writes real files into a [`tempfile::TempDir`]; the files
//! live as long as the returned directory handle.

#![allow(dead_code)]

use std::path::{Path, PathBuf};

use wordnet_graph::{Digraph, WordNet};

use super::fixtures::{HYPERNYMS, SYNSETS};

/// Write `contents` to `dir/name` and return the path.
pub fn write_file(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, contents).expect("Failed to write fixture file");
    path
}

/// Write the fixture synsets and hypernyms files.
pub fn write_wordnet_files(dir: &Path) -> (PathBuf, PathBuf) {
    (
        write_file(dir, "synsets.txt", SYNSETS),
        write_file(dir, "hypernyms.txt", HYPERNYMS),
    )
}

/// Load the fixture WordNet from disk.
pub fn load_fixture_wordnet() -> (WordNet, tempfile::TempDir) {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let (synsets, hypernyms) = write_wordnet_files(dir.path());
    let wordnet = WordNet::from_files(&synsets, &hypernyms).expect("Failed to load fixture WordNet");
    (wordnet, dir)
}

/// Load an edge-list digraph through a file on disk.
pub fn load_digraph(text: &str) -> (Digraph, tempfile::TempDir) {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = write_file(dir.path(), "digraph.txt", text);
    let graph = Digraph::from_path(&path).expect("Failed to load digraph");
    (graph, dir)
}

/// Whitespace-separated words of a file, as an outcast input.
pub fn read_words(path: &Path) -> Vec<String> {
    std::fs::read_to_string(path)
        .expect("Failed to read word list")
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

/// Log a BEFORE/AFTER pair for a state change under test.
pub struct StateLog {
    name: String,
}

impl StateLog {
    pub fn new(name: &str, before: &str) -> Self {
        println!("  BEFORE {}: {}", name, before);
        Self {
            name: name.to_string(),
        }
    }

    pub fn after(&self, after: &str) {
        println!("  AFTER {}: {}", self.name, after);
    }
}
