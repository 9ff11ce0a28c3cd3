//! Where the WordNet comes from: a config file, explicit paths, or both.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use tracing::info;
use wordnet_graph::{WordNet, WordNetConfig};

/// Global options locating the synsets and hypernyms files.
///
/// Settings are layered: defaults, then `config/wordnet.toml` (or the file
/// given with `--config`), then `WORDNET__*` environment variables, then
/// `--synsets` / `--hypernyms`.
#[derive(Args, Debug, Default, Clone)]
pub struct SourceArgs {
    /// TOML configuration file
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Synsets file (overrides the configuration)
    #[arg(long, global = true, value_name = "FILE")]
    pub synsets: Option<PathBuf>,

    /// Hypernyms file (overrides the configuration)
    #[arg(long, global = true, value_name = "FILE")]
    pub hypernyms: Option<PathBuf>,
}

impl SourceArgs {
    /// Resolve the effective configuration.
    pub fn resolve(&self) -> Result<WordNetConfig> {
        let mut config = WordNetConfig::load_from(self.config.as_deref())
            .context("failed to load configuration")?;
        if let Some(path) = &self.synsets {
            config.synsets_path = path.clone();
        }
        if let Some(path) = &self.hypernyms {
            config.hypernyms_path = path.clone();
        }
        Ok(config)
    }

    pub fn load(&self) -> Result<WordNet> {
        let config = self.resolve()?;
        info!(
            "using synsets={} hypernyms={}",
            config.synsets_path.display(),
            config.hypernyms_path.display()
        );
        WordNet::from_config(&config).with_context(|| {
            format!(
                "failed to load WordNet from {} and {}",
                config.synsets_path.display(),
                config.hypernyms_path.display()
            )
        })
    }
}
