//! CLI command handlers
//!
//! # Modules
//!
//! - `sap`: vertex-pair queries over an edge-list digraph
//! - `query`: noun-pair distance and ancestor queries
//! - `outcast`: outcast detection over word-list files
//! - `nouns`: noun listing
//!
//! Every handler returns a process exit code. The `run_*` functions behind
//! them take their input and output streams explicitly so tests can drive
//! them with in-memory buffers.

pub mod nouns;
pub mod outcast;
pub mod query;
pub mod sap;

mod input;
mod source;

pub use source::SourceArgs;
