//! Shortest ancestral path engine.
//!
//! One breadth-first search runs both input families at once over a merged
//! FIFO frontier. Every vertex carries an independent mark per family; when
//! a family reaches a vertex the other family has already reached, the sum
//! of the two distances is a candidate ancestral path length.
//!
//! # Early exit
//!
//! Both families are seeded at distance 0 before anything is expanded, so
//! the frontier pops entries in non-decreasing distance order. An entry at
//! distance `d` can only produce candidates of length `>= d + 1`, so once
//! `d + 1 >= best` no shorter path exists and the search stops. The graph is
//! never assumed acyclic here: cycles only add revisits that the per-family
//! marks already filter out.

use std::sync::Arc;

use tracing::trace;

use crate::digraph::{Digraph, VertexId};
use crate::error::{GraphError, GraphResult};

use super::state::{QueryScope, QueryState};
use super::types::{AncestralPath, QueryStats, SapResult, Side};

/// Best meeting point found so far.
#[derive(Debug, Clone, Copy)]
struct Meeting {
    length: u32,
    ancestor: VertexId,
}

/// Query engine bound to one graph.
///
/// Holds reusable scratch state, so queries take `&mut self`. To query from
/// several threads, either wrap the engine in a lock or build one engine per
/// worker over a shared `Arc<Digraph>`.
///
/// # Example
///
/// ```
/// use wordnet_graph::digraph::Digraph;
/// use wordnet_graph::sap::Sap;
///
/// // 0 -> 2 <- 1
/// let graph = Digraph::from_edges(3, &[(0, 2), (1, 2)]).unwrap();
/// let mut sap = Sap::new(graph);
/// assert_eq!(sap.length(0, 1).unwrap(), Some(2));
/// assert_eq!(sap.ancestor(0, 1).unwrap(), Some(2));
/// ```
#[derive(Debug, Clone)]
pub struct Sap {
    graph: Arc<Digraph>,
    state: QueryState,
    last_stats: QueryStats,
}

impl Sap {
    /// Build an engine over `graph`. Accepts a `Digraph` or a shared
    /// `Arc<Digraph>`.
    pub fn new(graph: impl Into<Arc<Digraph>>) -> Self {
        let graph = graph.into();
        let state = QueryState::new(graph.vertex_count());
        Self {
            graph,
            state,
            last_stats: QueryStats::default(),
        }
    }

    pub fn graph(&self) -> &Digraph {
        &self.graph
    }

    /// Shared handle to the graph, for building sibling engines.
    pub fn shared_graph(&self) -> Arc<Digraph> {
        Arc::clone(&self.graph)
    }

    /// Counters recorded by the most recent successful query.
    pub fn last_stats(&self) -> QueryStats {
        self.last_stats
    }

    #[cfg(test)]
    pub(crate) fn is_idle(&self) -> bool {
        self.state.is_clean()
    }

    // ========== Single-vertex queries ==========

    /// Length of the shortest ancestral path between `v` and `w`.
    ///
    /// # Errors
    /// * `GraphError::VertexOutOfRange` - `v` or `w` is not a vertex
    pub fn length(&mut self, v: VertexId, w: VertexId) -> GraphResult<Option<u32>> {
        Ok(self.query([v], [w])?.length)
    }

    /// A common ancestor of `v` and `w` on a shortest ancestral path.
    ///
    /// # Errors
    /// * `GraphError::VertexOutOfRange` - `v` or `w` is not a vertex
    pub fn ancestor(&mut self, v: VertexId, w: VertexId) -> GraphResult<Option<VertexId>> {
        Ok(self.query([v], [w])?.ancestor)
    }

    // ========== Set queries ==========

    /// Length of the shortest ancestral path between any vertex of `vs` and
    /// any vertex of `ws`.
    ///
    /// # Errors
    /// * `GraphError::MissingInput` - either set is empty
    /// * `GraphError::VertexOutOfRange` - a vertex is out of range
    pub fn length_sets<I, J>(&mut self, vs: I, ws: J) -> GraphResult<Option<u32>>
    where
        I: IntoIterator<Item = VertexId>,
        J: IntoIterator<Item = VertexId>,
    {
        Ok(self.query(vs, ws)?.length)
    }

    /// A common ancestor on a shortest ancestral path between `vs` and `ws`.
    ///
    /// # Errors
    /// * `GraphError::MissingInput` - either set is empty
    /// * `GraphError::VertexOutOfRange` - a vertex is out of range
    pub fn ancestor_sets<I, J>(&mut self, vs: I, ws: J) -> GraphResult<Option<VertexId>>
    where
        I: IntoIterator<Item = VertexId>,
        J: IntoIterator<Item = VertexId>,
    {
        Ok(self.query(vs, ws)?.ancestor)
    }

    /// Length and ancestor from a single search.
    pub fn query<I, J>(&mut self, vs: I, ws: J) -> GraphResult<SapResult>
    where
        I: IntoIterator<Item = VertexId>,
        J: IntoIterator<Item = VertexId>,
    {
        let (left, right) = self.validate(vs, ws)?;
        let (result, _) = self.search(&left, &right, false);
        Ok(result)
    }

    /// The shortest ancestral path itself, split at its ancestor.
    ///
    /// Returns `Ok(None)` when there is no common ancestor.
    pub fn path_to<I, J>(&mut self, vs: I, ws: J) -> GraphResult<Option<AncestralPath>>
    where
        I: IntoIterator<Item = VertexId>,
        J: IntoIterator<Item = VertexId>,
    {
        let (left, right) = self.validate(vs, ws)?;
        let (_, path) = self.search(&left, &right, true);
        Ok(path)
    }

    /// Collect and range-check both inputs before any state is touched.
    fn validate<I, J>(&self, vs: I, ws: J) -> GraphResult<(Vec<VertexId>, Vec<VertexId>)>
    where
        I: IntoIterator<Item = VertexId>,
        J: IntoIterator<Item = VertexId>,
    {
        let left: Vec<VertexId> = vs.into_iter().collect();
        let right: Vec<VertexId> = ws.into_iter().collect();

        if left.is_empty() {
            return Err(GraphError::MissingInput("first vertex set is empty".into()));
        }
        if right.is_empty() {
            return Err(GraphError::MissingInput("second vertex set is empty".into()));
        }
        for &v in left.iter().chain(right.iter()) {
            self.graph.check_vertex(v)?;
        }
        Ok((left, right))
    }

    fn search(
        &mut self,
        left: &[VertexId],
        right: &[VertexId],
        want_path: bool,
    ) -> (SapResult, Option<AncestralPath>) {
        let graph = &self.graph;
        let mut scope = self.state.scope();
        let mut stats = QueryStats::default();

        let best = match seed(&mut scope, left, right) {
            Some(shared) => {
                stats.early_exit = true;
                Some(Meeting {
                    length: 0,
                    ancestor: shared,
                })
            }
            None => expand(graph, &mut scope, &mut stats),
        };

        stats.touched = scope.touched_count();
        let path = match (want_path, best) {
            (true, Some(m)) => Some(AncestralPath {
                ancestor: m.ancestor,
                length: m.length,
                left: scope.unwind(m.ancestor, Side::Left),
                right: scope.unwind(m.ancestor, Side::Right),
            }),
            _ => None,
        };
        drop(scope);

        let result = best.map_or(SapResult::NONE, |m| SapResult::found(m.length, m.ancestor));
        trace!(
            "SAP {:?} x {:?}: {:?} (expanded={}, touched={}, early_exit={})",
            left,
            right,
            result,
            stats.expanded,
            stats.touched,
            stats.early_exit
        );
        self.last_stats = stats;
        (result, path)
    }
}

/// Seed both families at distance 0. Returns a vertex present in both sets.
fn seed(scope: &mut QueryScope<'_>, left: &[VertexId], right: &[VertexId]) -> Option<VertexId> {
    for &v in left {
        scope.reach(v, Side::Left, 0, None);
    }
    for &w in right {
        if scope.mark(w, Side::Left).is_reached() {
            return Some(w);
        }
        scope.reach(w, Side::Right, 0, None);
    }
    None
}

/// Drain the merged frontier, tracking the shortest meeting point.
fn expand(graph: &Digraph, scope: &mut QueryScope<'_>, stats: &mut QueryStats) -> Option<Meeting> {
    let mut best: Option<Meeting> = None;

    while let Some(entry) = scope.pop() {
        if let Some(b) = best {
            if entry.distance + 1 >= b.length {
                stats.early_exit = true;
                break;
            }
        }
        stats.expanded += 1;

        let next = entry.distance + 1;
        for &adj in graph.adj(entry.vertex) {
            if !scope.reach(adj, entry.side, next, Some(entry.vertex)) {
                continue;
            }
            if let Some(other) = scope.mark(adj, entry.side.opposite()).distance() {
                let candidate = next + other;
                if best.map_or(true, |b| candidate < b.length) {
                    best = Some(Meeting {
                        length: candidate,
                        ancestor: adj,
                    });
                }
            }
        }
    }

    best
}
