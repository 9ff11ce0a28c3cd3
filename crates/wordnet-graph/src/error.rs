//! Error types for WordNet graph operations.
//!
//! Every fallible operation in this crate returns [`GraphResult`]. Errors fall
//! into four groups:
//!
//! - **Input errors** (`MissingInput`, `VertexOutOfRange`, `UnknownNoun`):
//!   raised at the call boundary before any engine state is touched.
//! - **Structural errors** (`CycleDetected`, `InvalidRootCount`): raised once,
//!   while a [`WordNet`](crate::wordnet::WordNet) is being built.
//! - **Load errors** (`Parse`, `InvalidConfig`, `Io`): raised while reading
//!   definition files or configuration.
//! - `PathNotFound`: a caller required a path that the graph does not have.
//!
//! A query that finds no common ancestor is *not* an error; it returns `None`.

use thiserror::Error;

use crate::digraph::VertexId;

/// Result type alias for graph operations.
pub type GraphResult<T> = Result<T, GraphError>;

/// Error type for all graph, engine, and registry operations.
#[derive(Error, Debug)]
pub enum GraphError {
    // ========== Input Errors ==========
    /// A required argument was absent (empty vertex set, empty noun list).
    #[error("Missing input: {0}")]
    MissingInput(String),

    /// A vertex id lies outside `[0, vertex_count)`.
    #[error("Vertex {vertex} out of range: graph has {vertex_count} vertices")]
    VertexOutOfRange { vertex: usize, vertex_count: usize },

    /// Word is not a noun of the registry.
    #[error("Unknown noun: {0:?}")]
    UnknownNoun(String),

    // ========== Graph Structure Errors ==========
    /// The hypernym graph contains a directed cycle.
    #[error("Cycle detected: {0}")]
    CycleDetected(String),

    /// The hypernym graph does not have exactly one root. `roots` lists at
    /// most the first sixteen sinks.
    #[error("Expected exactly one root, found {count}: {roots:?}")]
    InvalidRootCount { count: usize, roots: Vec<VertexId> },

    // ========== Traversal Errors ==========
    /// Path not found between two nouns or vertices.
    #[error("No path found from {0} to {1}")]
    PathNotFound(String, String),

    // ========== Load Errors ==========
    /// Malformed line in a definition or edge-list file.
    #[error("Parse error in {source_name} line {line}: {reason}")]
    Parse {
        source_name: String,
        line: usize,
        reason: String,
    },

    /// Invalid configuration parameter.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl GraphError {
    /// Whether this error reports a graph that is not a rooted DAG.
    pub fn is_structural(&self) -> bool {
        matches!(
            self,
            GraphError::CycleDetected(_) | GraphError::InvalidRootCount { .. }
        )
    }

    pub(crate) fn parse(source_name: &str, line: usize, reason: impl Into<String>) -> Self {
        GraphError::Parse {
            source_name: source_name.to_string(),
            line,
            reason: reason.into(),
        }
    }
}

impl From<config::ConfigError> for GraphError {
    fn from(err: config::ConfigError) -> Self {
        GraphError::InvalidConfig(err.to_string())
    }
}

impl From<toml::de::Error> for GraphError {
    fn from(err: toml::de::Error) -> Self {
        GraphError::InvalidConfig(err.to_string())
    }
}

static_assertions::assert_impl_all!(GraphError: Send, Sync, std::error::Error);
