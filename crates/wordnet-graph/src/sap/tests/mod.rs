//! Tests for the SAP engine.
