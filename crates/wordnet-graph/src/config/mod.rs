//! Configuration for loading a WordNet.
//!
//! Settings are read from, in order of increasing precedence:
//! 1. built-in defaults
//! 2. `config/wordnet.toml` (optional) or an explicit TOML file
//! 3. environment variables with the `WORDNET__` prefix, e.g.
//!    `WORDNET__SYNSETS_PATH=/data/synsets.txt`

mod wordnet;

pub use self::wordnet::WordNetConfig;

#[cfg(test)]
mod tests;
