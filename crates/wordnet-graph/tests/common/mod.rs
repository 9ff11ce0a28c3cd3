//! Common test utilities for integration tests.
//!
//! - `fixtures`: fixed WordNet and digraph text with known answers
//! - `helpers`: temp-dir setup and loading helpers

pub mod helpers;
