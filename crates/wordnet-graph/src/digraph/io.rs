//! Edge-list text format.
//!
//! ```text
//! 13          <- vertex count
//! 11          <- edge count
//! 7 3         <- one "v w" pair per edge
//! 8 3
//! ...
//! ```
//!
//! Tokens are whitespace separated, so pairs may also share lines.

use std::path::Path;

use tracing::debug;

use super::{Digraph, DigraphBuilder};
use crate::error::{GraphError, GraphResult};

impl Digraph {
    /// Parse a graph in edge-list format.
    ///
    /// # Errors
    /// * `GraphError::Parse` - missing or non-numeric token, a vertex count
    ///   too large to allocate, or the number of pairs does not match the
    ///   declared edge count
    /// * `GraphError::VertexOutOfRange` - an edge endpoint is `>= V`
    pub fn parse_edge_list(text: &str) -> GraphResult<Self> {
        Self::parse_edge_list_named(text, "<edge list>")
    }

    /// Read and parse an edge-list file.
    pub fn from_path(path: impl AsRef<Path>) -> GraphResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        Self::parse_edge_list_named(&text, &path.display().to_string())
    }

    fn parse_edge_list_named(text: &str, source_name: &str) -> GraphResult<Self> {
        let mut tokens = text
            .lines()
            .enumerate()
            .flat_map(|(i, line)| line.split_whitespace().map(move |tok| (i + 1, tok)));

        let (header_line, vertex_count) = next_number(&mut tokens, source_name, "vertex count")?;
        let (_, declared_edges) = next_number(&mut tokens, source_name, "edge count")?;

        let mut builder = DigraphBuilder::try_new(vertex_count).map_err(|e| {
            GraphError::parse(
                source_name,
                header_line,
                format!("vertex count too large: {} ({})", vertex_count, e),
            )
        })?;
        let mut seen = 0usize;
        while let Some((line, tok)) = tokens.next() {
            let v = parse_number(tok, source_name, line)?;
            let (_, w) = next_number(&mut tokens, source_name, "edge head")?;
            builder.add_edge(v, w)?;
            seen += 1;
        }

        if seen != declared_edges {
            return Err(GraphError::parse(
                source_name,
                text.lines().count(),
                format!("declared {} edges, found {}", declared_edges, seen),
            ));
        }

        let graph = builder.build();
        debug!(
            "parsed {}: {} vertices, {} edges",
            source_name,
            graph.vertex_count(),
            graph.edge_count()
        );
        Ok(graph)
    }
}

fn next_number<'a>(
    tokens: &mut impl Iterator<Item = (usize, &'a str)>,
    source_name: &str,
    what: &str,
) -> GraphResult<(usize, usize)> {
    match tokens.next() {
        Some((line, tok)) => Ok((line, parse_number(tok, source_name, line)?)),
        None => Err(GraphError::parse(
            source_name,
            0,
            format!("unexpected end of input, expected {}", what),
        )),
    }
}

fn parse_number(tok: &str, source_name: &str, line: usize) -> GraphResult<usize> {
    tok.parse::<usize>().map_err(|e| {
        GraphError::parse(source_name, line, format!("invalid number {:?}: {}", tok, e))
    })
}
