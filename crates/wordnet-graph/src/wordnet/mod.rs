//! WordNet concept registry.
//!
//! Parses synset and hypernym records into a hypernym [`Digraph`], indexes
//! nouns to the synsets that contain them, rejects any graph that is not a
//! rooted DAG, and answers noun-level distance and ancestor queries through
//! a [`Sap`] engine.
//!
//! [`Digraph`]: crate::digraph::Digraph
//! [`Sap`]: crate::sap::Sap

mod parse;
mod registry;
mod validate;

#[cfg(test)]
pub(crate) mod tests;

pub use parse::{RecordFormat, Synset};
pub use registry::WordNet;
pub use validate::validate_rooted_dag;
