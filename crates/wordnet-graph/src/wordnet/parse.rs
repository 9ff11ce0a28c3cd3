//! Synset and hypernym record parsing.
//!
//! Synset records: `id,noun noun ...,gloss text` (the gloss may itself
//! contain the field separator). Hypernym records: `id,parent,parent,...`.
//! Blank lines are skipped in both files.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::digraph::VertexId;
use crate::error::{GraphError, GraphResult};

/// Separators used by the two record formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordFormat {
    /// Between the fields of a record. Default `,`.
    pub field_separator: char,
    /// Between the nouns of a synset. Default ` `.
    pub synonym_separator: char,
    /// Between the parent ids of a hypernym record. Default `,`.
    pub parent_separator: char,
}

impl Default for RecordFormat {
    fn default() -> Self {
        Self {
            field_separator: ',',
            synonym_separator: ' ',
            parent_separator: ',',
        }
    }
}

/// One concept: a set of synonymous nouns and a gloss.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Synset {
    pub id: VertexId,
    /// The noun field exactly as written, e.g. `"AND_circuit AND_gate"`.
    pub label: String,
    pub nouns: Vec<String>,
    pub gloss: String,
}

/// Parse a synsets file into records ordered by id.
///
/// # Errors
/// * `GraphError::Parse` - bad id, empty noun field, duplicate id, or ids
///   that do not form the dense range `0..n`
pub(crate) fn parse_synsets(
    text: &str,
    source_name: &str,
    format: &RecordFormat,
) -> GraphResult<Vec<Synset>> {
    let mut synsets: Vec<(usize, Synset)> = Vec::new();

    for (i, raw) in text.lines().enumerate() {
        let line_no = i + 1;
        let line = raw.trim_end_matches('\r');
        if line.trim().is_empty() {
            continue;
        }

        let mut fields = line.splitn(3, format.field_separator);
        let id = parse_id(fields.next().unwrap_or(""), source_name, line_no)?;
        let label = fields
            .next()
            .ok_or_else(|| GraphError::parse(source_name, line_no, "missing noun field"))?
            .trim()
            .to_string();
        let gloss = fields.next().unwrap_or("").trim().to_string();

        let nouns: Vec<String> = label
            .split(format.synonym_separator)
            .filter(|n| !n.is_empty())
            .map(str::to_string)
            .collect();
        if nouns.is_empty() {
            return Err(GraphError::parse(source_name, line_no, "empty noun field"));
        }

        synsets.push((
            line_no,
            Synset {
                id,
                label,
                nouns,
                gloss,
            },
        ));
    }

    // Stable sort: a duplicate is reported at its later line.
    synsets.sort_by_key(|(_, s)| s.id);
    for (expected, (line_no, synset)) in synsets.iter().enumerate() {
        if synset.id != expected {
            let reason = if synset.id < expected {
                format!("duplicate synset id {}", synset.id)
            } else {
                format!("synset ids are not dense: missing id {}", expected)
            };
            return Err(GraphError::parse(source_name, *line_no, reason));
        }
    }

    Ok(synsets.into_iter().map(|(_, synset)| synset).collect())
}

/// Parse a hypernyms file into `(hyponym, hypernym)` edges.
///
/// # Errors
/// * `GraphError::Parse` - an id is not a non-negative integer or not a
///   known synset
pub(crate) fn parse_hypernyms(
    text: &str,
    source_name: &str,
    format: &RecordFormat,
    vertex_count: usize,
) -> GraphResult<Vec<(VertexId, VertexId)>> {
    let mut edges = Vec::new();

    for (i, raw) in text.lines().enumerate() {
        let line_no = i + 1;
        let line = raw.trim_end_matches('\r');
        if line.trim().is_empty() {
            continue;
        }

        let (head, rest) = match line.split_once(format.field_separator) {
            Some((head, rest)) => (head, rest),
            None => (line, ""),
        };
        let v = parse_id(head, source_name, line_no)?;
        check_known(v, vertex_count, source_name, line_no)?;

        let mut parents = 0usize;
        for tok in rest.split(format.parent_separator) {
            if tok.trim().is_empty() {
                continue;
            }
            let w = parse_id(tok, source_name, line_no)?;
            check_known(w, vertex_count, source_name, line_no)?;
            edges.push((v, w));
            parents += 1;
        }
        if parents == 0 && !rest.is_empty() {
            warn!("{} line {}: record has separators but no parents", source_name, line_no);
        }
    }

    Ok(edges)
}

fn parse_id(tok: &str, source_name: &str, line: usize) -> GraphResult<VertexId> {
    let tok = tok.trim();
    tok.parse::<VertexId>().map_err(|e| {
        GraphError::parse(source_name, line, format!("invalid synset id {:?}: {}", tok, e))
    })
}

fn check_known(
    v: VertexId,
    vertex_count: usize,
    source_name: &str,
    line: usize,
) -> GraphResult<()> {
    if v < vertex_count {
        Ok(())
    } else {
        Err(GraphError::parse(
            source_name,
            line,
            format!("synset id {} out of range: {} synsets", v, vertex_count),
        ))
    }
}
