//! Shortest ancestral path (SAP) queries.
//!
//! An *ancestral path* between `v` and `w` is a pair of directed paths
//! `v -> ... -> a` and `w -> ... -> a` meeting at a common ancestor `a`.
//! [`Sap`] finds the shortest such path between two vertex sets with a
//! dual-labelled multi-source BFS, and reuses its scratch arrays across
//! queries.
//!
//! # Example
//!
//! ```
//! use wordnet_graph::digraph::Digraph;
//! use wordnet_graph::sap::Sap;
//!
//! // 0 -> 1 -> 2 -> 3
//! let graph = Digraph::from_edges(4, &[(0, 1), (1, 2), (2, 3)]).unwrap();
//! let mut sap = Sap::new(graph);
//!
//! assert_eq!(sap.length(0, 3).unwrap(), Some(3));
//! assert_eq!(sap.length_sets([0, 1], [2]).unwrap(), Some(1));
//! assert_eq!(sap.ancestor_sets([0, 1], [2]).unwrap(), Some(2));
//! ```

mod engine;
mod state;
mod types;

#[cfg(test)]
mod tests;

pub use engine::Sap;
pub use state::{QueryScope, QueryState};
pub use types::{AncestralPath, Mark, QueryStats, SapResult, Side};
