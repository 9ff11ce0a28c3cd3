//! `nouns` command.

use std::io::Write;

use anyhow::Result;
use clap::Args;
use wordnet_graph::WordNet;

use super::SourceArgs;
use crate::error::report;

/// Arguments for the nouns command.
#[derive(Args, Debug)]
pub struct NounsArgs {
    /// Print only the number of nouns
    #[arg(long)]
    pub count: bool,
}

pub fn handle_nouns(args: NounsArgs, source: &SourceArgs) -> i32 {
    let stdout = std::io::stdout();
    report(
        source
            .load()
            .and_then(|wordnet| run_nouns(&args, &wordnet, &mut stdout.lock())),
    )
}

pub(crate) fn run_nouns<W: Write>(args: &NounsArgs, wordnet: &WordNet, out: &mut W) -> Result<()> {
    if args.count {
        writeln!(out, "{}", wordnet.noun_count())?;
        return Ok(());
    }
    for noun in wordnet.nouns() {
        writeln!(out, "{}", noun)?;
    }
    Ok(())
}
