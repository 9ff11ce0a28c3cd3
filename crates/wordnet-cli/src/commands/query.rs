//! `distance` and `ancestor` commands: noun-pair queries.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use clap::Args;
use wordnet_graph::WordNet;

use super::input::{into_pairs, read_tokens};
use super::SourceArgs;
use crate::error::report;

/// Arguments for the distance and ancestor commands.
#[derive(Args, Debug)]
pub struct PairArgs {
    /// Noun pairs `a b ...`; read from stdin when omitted
    pub nouns: Vec<String>,
}

/// What to print per noun pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryKind {
    /// `<distance>`
    Distance,
    /// `sap: <ancestor synset> (<distance>)`
    Ancestor,
}

pub fn handle_query(kind: QueryKind, args: PairArgs, source: &SourceArgs) -> i32 {
    let stdout = std::io::stdout();
    let stdin = std::io::stdin();
    report(source.load().and_then(|wordnet| {
        run_query(kind, &args, &wordnet, &mut stdout.lock(), stdin.lock())
    }))
}

pub(crate) fn run_query<W: Write, R: BufRead>(
    kind: QueryKind,
    args: &PairArgs,
    wordnet: &WordNet,
    out: &mut W,
    input: R,
) -> Result<()> {
    let nouns = if args.nouns.is_empty() {
        read_tokens(input)?
    } else {
        args.nouns.clone()
    };

    for (a, b) in into_pairs(nouns)? {
        let distance = wordnet
            .distance(&a, &b)
            .with_context(|| format!("distance({}, {}) failed", a, b))?
            .map_or(-1, i64::from);
        match kind {
            QueryKind::Distance => writeln!(out, "{}", distance)?,
            QueryKind::Ancestor => {
                let label = wordnet
                    .sap(&a, &b)
                    .with_context(|| format!("sap({}, {}) failed", a, b))?
                    .unwrap_or("-");
                writeln!(out, "sap: {} ({})", label, distance)?
            }
        }
    }
    Ok(())
}
