//! `sap` command: vertex-pair queries over an edge-list digraph.

use std::io::{BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use tracing::debug;
use wordnet_graph::{Digraph, Sap};

use super::input::{into_pairs, read_tokens};
use crate::error::report;

/// Arguments for the sap command.
#[derive(Args, Debug)]
pub struct SapArgs {
    /// Digraph in edge-list format: V, E, then E pairs `v w`
    pub digraph: PathBuf,

    /// Vertex pairs `v w ...`; read from stdin when omitted
    pub pairs: Vec<usize>,
}

pub fn handle_sap(args: SapArgs) -> i32 {
    let stdout = std::io::stdout();
    let stdin = std::io::stdin();
    report(run_sap(&args, &mut stdout.lock(), stdin.lock()))
}

pub(crate) fn run_sap<W: Write, R: BufRead>(args: &SapArgs, out: &mut W, input: R) -> Result<()> {
    let graph = Digraph::from_path(&args.digraph)
        .with_context(|| format!("failed to load digraph {}", args.digraph.display()))?;
    let mut sap = Sap::new(graph);

    let vertices = if args.pairs.is_empty() {
        read_tokens(input)?
            .iter()
            .map(|tok| {
                tok.parse::<usize>()
                    .with_context(|| format!("invalid vertex {:?}", tok))
            })
            .collect::<Result<Vec<_>>>()?
    } else {
        args.pairs.clone()
    };

    for (v, w) in into_pairs(vertices)? {
        let result = sap
            .query([v], [w])
            .with_context(|| format!("query ({}, {}) failed", v, w))?;
        debug!("({}, {}) -> {:?} {:?}", v, w, result, sap.last_stats());
        writeln!(
            out,
            "length = {}, ancestor = {}",
            result.length_or_sentinel(),
            result.ancestor_or_sentinel()
        )?;
    }
    Ok(())
}
