//! Integration tests for the wordnet-graph crate.
//!
//! Every test loads real files from a temp directory and goes through the
//! public API only.

pub mod sap_tests;
