//! Tests for the digraph module.
