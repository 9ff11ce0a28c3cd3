//! Rooted-DAG validation, run once at construction.

use tracing::debug;

use crate::digraph::{find_cycle, Digraph, VertexId};
use crate::error::{GraphError, GraphResult};

/// Sinks listed in an `InvalidRootCount` error.
const MAX_REPORTED_ROOTS: usize = 16;

/// Check that `graph` is acyclic with exactly one vertex of out-degree 0.
///
/// Returns the root.
///
/// # Errors
/// * `GraphError::CycleDetected` - carries the cycle, e.g. `"4 -> 7 -> 4"`
/// * `GraphError::InvalidRootCount` - zero or several sinks
pub fn validate_rooted_dag(graph: &Digraph) -> GraphResult<VertexId> {
    if let Some(cycle) = find_cycle(graph) {
        let rendered = cycle
            .iter()
            .map(|v| v.to_string())
            .collect::<Vec<_>>()
            .join(" -> ");
        return Err(GraphError::CycleDetected(rendered));
    }

    let mut roots = graph.sinks();
    if let [root] = roots.as_slice() {
        debug!("rooted DAG validated: root={}", root);
        return Ok(*root);
    }

    let count = roots.len();
    roots.truncate(MAX_REPORTED_ROOTS);
    Err(GraphError::InvalidRootCount { count, roots })
}
