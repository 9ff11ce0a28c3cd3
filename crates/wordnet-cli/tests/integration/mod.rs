//! CLI integration tests.
//!
//! - `helpers`: fixture files and binary invocation
//! - `command_tests`: output and exit code of every subcommand

pub mod helpers;
