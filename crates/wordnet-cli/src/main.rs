//! WordNet CLI
//!
//! Command-line front end for shortest-ancestral-path queries over a
//! digraph file and over a WordNet.
//!
//! # Commands
//!
//! - `sap`: length and ancestor for vertex pairs of an edge-list digraph
//! - `distance`: noun-pair distance
//! - `ancestor`: noun-pair common ancestor and distance
//! - `outcast`: the outcast of each word-list file
//! - `nouns`: list every noun
//!
//! Exit codes: 0 on success, 1 on error, 2 when the hypernym graph is not a
//! rooted DAG.

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

mod commands;
mod error;

/// WordNet CLI - semantic relatedness over a hypernym taxonomy
#[derive(Parser)]
#[command(name = "wordnet")]
#[command(version)]
#[command(about = "Shortest ancestral path, distance and outcast queries over WordNet")]
#[command(propagate_version = true)]
struct Cli {
    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(flatten)]
    source: commands::SourceArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Shortest ancestral path between vertex pairs of a digraph file
    ///
    /// Pairs are read from the command line, or from stdin when none are
    /// given. Prints `length = L, ancestor = A` per pair, -1 when the pair
    /// has no common ancestor.
    Sap(commands::sap::SapArgs),
    /// Distance between noun pairs
    Distance(commands::query::PairArgs),
    /// Common ancestor of noun pairs, printed as `sap: <synset> (<distance>)`
    Ancestor(commands::query::PairArgs),
    /// Find the outcast of each word-list file
    Outcast(commands::outcast::OutcastArgs),
    /// List every noun in sorted order
    Nouns(commands::nouns::NounsArgs),
}

fn main() {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    let filter = match cli.verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_level(true)
        .with_writer(std::io::stderr)
        .init();

    // Dispatch to command handlers
    let exit_code = match cli.command {
        Commands::Sap(args) => commands::sap::handle_sap(args),
        Commands::Distance(args) => {
            commands::query::handle_query(commands::query::QueryKind::Distance, args, &cli.source)
        }
        Commands::Ancestor(args) => {
            commands::query::handle_query(commands::query::QueryKind::Ancestor, args, &cli.source)
        }
        Commands::Outcast(args) => commands::outcast::handle_outcast(args, &cli.source),
        Commands::Nouns(args) => commands::nouns::handle_nouns(args, &cli.source),
    };

    std::process::exit(exit_code);
}
