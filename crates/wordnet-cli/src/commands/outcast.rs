//! `outcast` command: the outcast of each word-list file.

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use wordnet_graph::{Outcast, WordNet};

use super::SourceArgs;
use crate::error::report;

/// Printed when every word of a list is at distance zero from the others.
const NO_OUTCAST: &str = "(none)";

/// Arguments for the outcast command.
#[derive(Args, Debug)]
pub struct OutcastArgs {
    /// Files of whitespace-separated nouns
    #[arg(required = true)]
    pub files: Vec<PathBuf>,
}

pub fn handle_outcast(args: OutcastArgs, source: &SourceArgs) -> i32 {
    let stdout = std::io::stdout();
    report(
        source
            .load()
            .and_then(|wordnet| run_outcast(&args, &wordnet, &mut stdout.lock())),
    )
}

pub(crate) fn run_outcast<W: Write>(args: &OutcastArgs, wordnet: &WordNet, out: &mut W) -> Result<()> {
    let outcast = Outcast::new(wordnet);
    for file in &args.files {
        let text = std::fs::read_to_string(file)
            .with_context(|| format!("failed to read {}", file.display()))?;
        let nouns: Vec<&str> = text.split_whitespace().collect();
        let found = outcast
            .outcast(&nouns)
            .with_context(|| format!("outcast of {} failed", file.display()))?;
        writeln!(out, "{}: {}", file.display(), found.unwrap_or(NO_OUTCAST))?;
    }
    Ok(())
}
