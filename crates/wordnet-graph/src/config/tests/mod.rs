//! Tests for WordNetConfig.
