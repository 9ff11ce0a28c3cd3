//! WordNet input paths and record separators.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{GraphError, GraphResult};
use crate::wordnet::RecordFormat;

/// Default configuration file, looked up relative to the working directory.
const DEFAULT_CONFIG_FILE: &str = "config/wordnet";

const ENV_PREFIX: &str = "WORDNET";

/// Where to find the synsets and hypernyms files, and how their records
/// are separated.
///
/// # Example
/// ```
/// use wordnet_graph::config::WordNetConfig;
///
/// let config = WordNetConfig::default();
/// assert!(config.validate().is_ok());
/// assert_eq!(config.record_format().field_separator, ',');
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WordNetConfig {
    /// Synsets file. Default: `synsets.txt`
    pub synsets_path: PathBuf,

    /// Hypernyms file. Default: `hypernyms.txt`
    pub hypernyms_path: PathBuf,

    /// Separates the fields of both record kinds. Default: `,`
    pub field_separator: String,

    /// Separates the nouns of one synset. Default: a single space
    pub synonym_separator: String,

    /// Separates parent ids in a hypernym record. Default: `,`
    pub parent_separator: String,
}

impl Default for WordNetConfig {
    fn default() -> Self {
        Self {
            synsets_path: PathBuf::from("synsets.txt"),
            hypernyms_path: PathBuf::from("hypernyms.txt"),
            field_separator: ",".to_string(),
            synonym_separator: " ".to_string(),
            parent_separator: ",".to_string(),
        }
    }
}

impl WordNetConfig {
    /// Layer `config/wordnet.toml` (if present) and `WORDNET__*` variables
    /// over the defaults.
    pub fn load() -> GraphResult<Self> {
        Self::load_from(None)
    }

    /// Like [`load`](Self::load), but with an explicit file that must exist.
    /// The file is read as TOML whatever its extension.
    pub fn load_from(path: Option<&Path>) -> GraphResult<Self> {
        let file = match path {
            Some(path) => config::File::from(path)
                .format(config::FileFormat::Toml)
                .required(true),
            None => config::File::with_name(DEFAULT_CONFIG_FILE).required(false),
        };

        let builder = config::Config::builder()
            .add_source(file)
            .add_source(config::Environment::with_prefix(ENV_PREFIX).separator("__"));

        let config: WordNetConfig = builder.build()?.try_deserialize()?;
        config.validate()?;
        debug!(
            "config loaded: synsets={}, hypernyms={}",
            config.synsets_path.display(),
            config.hypernyms_path.display()
        );
        Ok(config)
    }

    /// Read a TOML file. Missing keys keep their defaults.
    pub fn from_file(path: impl AsRef<Path>) -> GraphResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            GraphError::InvalidConfig(format!(
                "Failed to read config file {}: {}",
                path.display(),
                e
            ))
        })?;

        let config: WordNetConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate paths and separators.
    ///
    /// # Errors
    /// * `GraphError::InvalidConfig` - an empty path, a separator that is not
    ///   exactly one character, or equal field and synonym separators
    pub fn validate(&self) -> GraphResult<()> {
        if self.synsets_path.as_os_str().is_empty() {
            return Err(GraphError::InvalidConfig(
                "synsets_path must not be empty".to_string(),
            ));
        }
        if self.hypernyms_path.as_os_str().is_empty() {
            return Err(GraphError::InvalidConfig(
                "hypernyms_path must not be empty".to_string(),
            ));
        }

        let field = single_char("field_separator", &self.field_separator)?;
        let synonym = single_char("synonym_separator", &self.synonym_separator)?;
        single_char("parent_separator", &self.parent_separator)?;

        if field == synonym {
            return Err(GraphError::InvalidConfig(format!(
                "field_separator and synonym_separator must differ (both {:?})",
                field
            )));
        }
        Ok(())
    }

    /// Separators as a [`RecordFormat`]. Call [`validate`](Self::validate)
    /// first; a malformed separator falls back to its default.
    pub fn record_format(&self) -> RecordFormat {
        let defaults = RecordFormat::default();
        RecordFormat {
            field_separator: first_char(&self.field_separator, defaults.field_separator),
            synonym_separator: first_char(&self.synonym_separator, defaults.synonym_separator),
            parent_separator: first_char(&self.parent_separator, defaults.parent_separator),
        }
    }
}

fn single_char(name: &str, value: &str) -> GraphResult<char> {
    let mut chars = value.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(GraphError::InvalidConfig(format!(
            "{} must be a single character (got {:?})",
            name, value
        ))),
    }
}

fn first_char(value: &str, fallback: char) -> char {
    value.chars().next().unwrap_or(fallback)
}
