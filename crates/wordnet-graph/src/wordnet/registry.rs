//! The WordNet concept registry.

use std::collections::BTreeMap;
use std::path::Path;
use std::sync::Arc;

use parking_lot::Mutex;
use tracing::{debug, info};

use crate::config::WordNetConfig;
use crate::digraph::{Digraph, DigraphBuilder, VertexId};
use crate::error::{GraphError, GraphResult};
use crate::sap::{AncestralPath, Sap};

use super::parse::{parse_hypernyms, parse_synsets, RecordFormat, Synset};
use super::validate::validate_rooted_dag;

const SYNSETS_SOURCE: &str = "<synsets>";
const HYPERNYMS_SOURCE: &str = "<hypernyms>";

/// A validated WordNet: synsets, noun index, hypernym graph, and a SAP
/// engine over that graph.
///
/// Construction fails unless the hypernym graph is a rooted DAG, so every
/// query can assume one. The engine sits behind a mutex: `WordNet` is
/// `Send + Sync` and concurrent queries on one instance are serialized.
///
/// # Example
///
/// ```
/// use wordnet_graph::wordnet::WordNet;
///
/// let synsets = "0,entity,that which exists\n1,animal beast,a living organism\n2,dog,a canine\n3,cat,a feline\n";
/// let hypernyms = "1,0\n2,1\n3,1\n";
/// let wordnet = WordNet::parse(synsets, hypernyms).unwrap();
///
/// assert_eq!(wordnet.distance("dog", "cat").unwrap(), Some(2));
/// assert_eq!(wordnet.sap("dog", "cat").unwrap(), Some("animal beast"));
/// ```
#[derive(Debug)]
pub struct WordNet {
    synsets: Vec<Synset>,
    nouns: BTreeMap<String, Vec<VertexId>>,
    graph: Arc<Digraph>,
    root: VertexId,
    sap: Mutex<Sap>,
}

impl WordNet {
    // ========== Construction ==========

    /// Build from in-memory synset and hypernym text with the default
    /// record format.
    ///
    /// # Errors
    /// * `GraphError::Parse` - malformed input, including hypernym ids that
    ///   name no synset
    /// * `GraphError::CycleDetected` / `GraphError::InvalidRootCount` - the
    ///   hypernym graph is not a rooted DAG
    pub fn parse(synsets: &str, hypernyms: &str) -> GraphResult<Self> {
        Self::parse_with_format(synsets, hypernyms, &RecordFormat::default())
    }

    pub fn parse_with_format(
        synsets: &str,
        hypernyms: &str,
        format: &RecordFormat,
    ) -> GraphResult<Self> {
        Self::build(
            synsets,
            SYNSETS_SOURCE,
            hypernyms,
            HYPERNYMS_SOURCE,
            format,
        )
    }

    /// Read and build from a synsets file and a hypernyms file.
    pub fn from_files(synsets: impl AsRef<Path>, hypernyms: impl AsRef<Path>) -> GraphResult<Self> {
        Self::from_files_with_format(synsets, hypernyms, &RecordFormat::default())
    }

    /// Read and build from the paths and separators in `config`.
    pub fn from_config(config: &WordNetConfig) -> GraphResult<Self> {
        config.validate()?;
        Self::from_files_with_format(
            &config.synsets_path,
            &config.hypernyms_path,
            &config.record_format(),
        )
    }

    fn from_files_with_format(
        synsets: impl AsRef<Path>,
        hypernyms: impl AsRef<Path>,
        format: &RecordFormat,
    ) -> GraphResult<Self> {
        let (synsets, hypernyms) = (synsets.as_ref(), hypernyms.as_ref());
        info!(
            "loading WordNet from {} and {}",
            synsets.display(),
            hypernyms.display()
        );
        let synsets_text = std::fs::read_to_string(synsets)?;
        let hypernyms_text = std::fs::read_to_string(hypernyms)?;
        Self::build(
            &synsets_text,
            &synsets.display().to_string(),
            &hypernyms_text,
            &hypernyms.display().to_string(),
            format,
        )
    }

    fn build(
        synsets_text: &str,
        synsets_name: &str,
        hypernyms_text: &str,
        hypernyms_name: &str,
        format: &RecordFormat,
    ) -> GraphResult<Self> {
        let synsets = parse_synsets(synsets_text, synsets_name, format)?;
        let vertex_count = synsets.len();

        let mut nouns: BTreeMap<String, Vec<VertexId>> = BTreeMap::new();
        for synset in &synsets {
            for noun in &synset.nouns {
                let ids = nouns.entry(noun.clone()).or_default();
                if !ids.contains(&synset.id) {
                    ids.push(synset.id);
                }
            }
        }

        let edges = parse_hypernyms(hypernyms_text, hypernyms_name, format, vertex_count)?;
        let mut builder = DigraphBuilder::new(vertex_count);
        for (v, w) in edges {
            builder.add_edge(v, w)?;
        }
        let graph = Arc::new(builder.build());

        let root = validate_rooted_dag(&graph)?;

        debug!(
            "WordNet built: {} synsets, {} nouns, {} hypernym edges, root={}",
            vertex_count,
            nouns.len(),
            graph.edge_count(),
            root
        );

        Ok(Self {
            synsets,
            nouns,
            sap: Mutex::new(Sap::new(Arc::clone(&graph))),
            graph,
            root,
        })
    }

    // ========== Lookup ==========

    /// All nouns, sorted.
    pub fn nouns(&self) -> impl Iterator<Item = &str> + '_ {
        self.nouns.keys().map(String::as_str)
    }

    pub fn noun_count(&self) -> usize {
        self.nouns.len()
    }

    pub fn is_noun(&self, word: &str) -> bool {
        self.nouns.contains_key(word)
    }

    /// Ids of every synset containing `noun`, in id order.
    pub fn synset_ids(&self, noun: &str) -> Option<&[VertexId]> {
        self.nouns.get(noun).map(Vec::as_slice)
    }

    pub fn synset(&self, id: VertexId) -> Option<&Synset> {
        self.synsets.get(id)
    }

    pub fn synset_count(&self) -> usize {
        self.synsets.len()
    }

    /// The single synset with no hypernym.
    pub fn root(&self) -> VertexId {
        self.root
    }

    pub fn graph(&self) -> &Digraph {
        &self.graph
    }

    // ========== Queries ==========

    /// Minimum ancestral path length between any synset of `noun_a` and any
    /// synset of `noun_b`.
    ///
    /// # Errors
    /// * `GraphError::UnknownNoun` - either word is not a noun
    pub fn distance(&self, noun_a: &str, noun_b: &str) -> GraphResult<Option<u32>> {
        let (a, b) = (self.ids(noun_a)?, self.ids(noun_b)?);
        self.sap
            .lock()
            .length_sets(a.iter().copied(), b.iter().copied())
    }

    /// Label of a common ancestor on a shortest ancestral path between
    /// `noun_a` and `noun_b`: the ancestor's noun field as written in the
    /// synsets input.
    ///
    /// # Errors
    /// * `GraphError::UnknownNoun` - either word is not a noun
    pub fn sap(&self, noun_a: &str, noun_b: &str) -> GraphResult<Option<&str>> {
        let (a, b) = (self.ids(noun_a)?, self.ids(noun_b)?);
        let ancestor = self
            .sap
            .lock()
            .ancestor_sets(a.iter().copied(), b.iter().copied())?;
        Ok(ancestor.and_then(|id| self.synset(id)).map(|s| s.label.as_str()))
    }

    /// Synset-level shortest ancestral path between two nouns.
    pub fn ancestral_path(&self, noun_a: &str, noun_b: &str) -> GraphResult<Option<AncestralPath>> {
        let (a, b) = (self.ids(noun_a)?, self.ids(noun_b)?);
        self.sap.lock().path_to(a.iter().copied(), b.iter().copied())
    }

    fn ids(&self, noun: &str) -> GraphResult<&[VertexId]> {
        self.synset_ids(noun)
            .ok_or_else(|| GraphError::UnknownNoun(noun.to_string()))
    }
}

static_assertions::assert_impl_all!(WordNet: Send, Sync);
