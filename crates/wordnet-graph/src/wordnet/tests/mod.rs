//! Tests for the WordNet registry.
