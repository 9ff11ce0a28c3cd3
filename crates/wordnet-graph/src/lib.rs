//! WordNet hypernym graph with shortest-ancestral-path queries.
//!
//! This crate loads a WordNet-style taxonomy (synsets plus hypernym edges),
//! checks that it forms a rooted DAG, and answers semantic-relatedness
//! queries between nouns: the length of the shortest ancestral path and the
//! common ancestor on it.
//!
//! # Architecture
//!
//! - **error**: `GraphError` / `GraphResult` shared by every module
//! - **digraph**: immutable adjacency-list digraph, edge-list loading, cycle detection
//! - **sap**: shortest ancestral path engine over vertex sets
//! - **wordnet**: synset/hypernym parsing, rooted-DAG validation, noun queries
//! - **outcast**: the noun least related to the others in a list
//! - **config**: input paths and record separators
//!
//! # Example
//!
//! ```
//! use wordnet_graph::error::GraphResult;
//! use wordnet_graph::{Outcast, WordNet};
//!
//! fn example() -> GraphResult<()> {
//!     let synsets = "0,entity,x\n1,animal,x\n2,dog,x\n3,cat,x\n4,stone rock,x\n";
//!     let hypernyms = "1,0\n2,1\n3,1\n4,0\n";
//!     let wordnet = WordNet::parse(synsets, hypernyms)?;
//!
//!     assert_eq!(wordnet.distance("dog", "cat")?, Some(2));
//!     assert_eq!(wordnet.sap("dog", "rock")?, Some("entity"));
//!     assert_eq!(Outcast::new(&wordnet).outcast(&["dog", "cat", "rock"])?, Some("rock"));
//!     Ok(())
//! }
//! # example().unwrap();
//! ```

pub mod config;
pub mod digraph;
pub mod error;
pub mod outcast;
pub mod sap;
pub mod wordnet;

// Re-exports for convenience
pub use config::WordNetConfig;
pub use digraph::{find_cycle, Digraph, DigraphBuilder, DirectedCycle, VertexId};
pub use error::{GraphError, GraphResult};
pub use outcast::Outcast;
pub use sap::{AncestralPath, QueryStats, Sap, SapResult};
pub use wordnet::{validate_rooted_dag, RecordFormat, Synset, WordNet};
