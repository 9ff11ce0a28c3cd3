//! Reusable per-query scratch state.
//!
//! Marks are stored in two vertex-indexed arrays sized once from the graph.
//! A touch log records every vertex that left the `Unset` state so a reset
//! costs O(touched) instead of O(V).
//!
//! Searches never use a [`QueryState`] directly: they go through
//! [`QueryState::scope`], whose guard resets the state when dropped, on
//! every exit path.

use std::collections::VecDeque;
use std::ops::{Deref, DerefMut};

use crate::digraph::VertexId;

use super::types::{FrontierEntry, Mark, Side};

/// BFS marks, frontier, and touch log for one engine.
#[derive(Debug, Clone)]
pub struct QueryState {
    left: Vec<Mark>,
    right: Vec<Mark>,
    frontier: VecDeque<FrontierEntry>,
    touched: Vec<VertexId>,
    // Distance of the last entry popped; FIFO order keeps it non-decreasing.
    radius: u32,
}

impl QueryState {
    pub fn new(vertex_count: usize) -> Self {
        Self {
            left: vec![Mark::Unset; vertex_count],
            right: vec![Mark::Unset; vertex_count],
            frontier: VecDeque::new(),
            touched: Vec::new(),
            radius: 0,
        }
    }

    /// Borrow the state for one search; it is reset when the guard drops.
    pub fn scope(&mut self) -> QueryScope<'_> {
        debug_assert!(
            self.touched.is_empty() && self.frontier.is_empty(),
            "query state not reset"
        );
        QueryScope { state: self }
    }

    #[inline]
    pub fn mark(&self, v: VertexId, side: Side) -> Mark {
        match side {
            Side::Left => self.left[v],
            Side::Right => self.right[v],
        }
    }

    /// Mark `v` as reached from `side` and queue it for expansion.
    ///
    /// Returns `false`, changing nothing, if `side` already reached `v`.
    pub(crate) fn reach(
        &mut self,
        v: VertexId,
        side: Side,
        distance: u32,
        via: Option<VertexId>,
    ) -> bool {
        if self.mark(v, side).is_reached() {
            return false;
        }
        if !self.mark(v, side.opposite()).is_reached() {
            self.touched.push(v);
        }
        let slot = match side {
            Side::Left => &mut self.left[v],
            Side::Right => &mut self.right[v],
        };
        *slot = Mark::Reached { distance, via };
        self.frontier.push_back(FrontierEntry {
            vertex: v,
            side,
            distance,
        });
        true
    }

    /// Next frontier entry in FIFO order.
    pub(crate) fn pop(&mut self) -> Option<FrontierEntry> {
        let entry = self.frontier.pop_front()?;
        debug_assert!(
            entry.distance >= self.radius,
            "frontier distance went backwards: {} after {}",
            entry.distance,
            self.radius
        );
        self.radius = entry.distance;
        Some(entry)
    }

    /// Follow `side`'s predecessor links from `from` back to its seed.
    ///
    /// The returned path starts at the seed and ends at `from`.
    pub(crate) fn unwind(&self, from: VertexId, side: Side) -> Vec<VertexId> {
        let mut path = vec![from];
        let mut current = from;
        while let Mark::Reached { via: Some(prev), .. } = self.mark(current, side) {
            path.push(prev);
            current = prev;
        }
        path.reverse();
        path
    }

    /// Number of distinct vertices marked since the last reset.
    #[inline]
    pub fn touched_count(&self) -> usize {
        self.touched.len()
    }

    /// Clear every touched mark, the frontier, and the log.
    pub fn reset(&mut self) {
        for v in self.touched.drain(..) {
            self.left[v] = Mark::Unset;
            self.right[v] = Mark::Unset;
        }
        self.frontier.clear();
        self.radius = 0;
    }

    /// Full O(V) check that no residue of a previous query remains.
    pub fn is_clean(&self) -> bool {
        self.touched.is_empty()
            && self.frontier.is_empty()
            && self.radius == 0
            && self.left.iter().all(|m| !m.is_reached())
            && self.right.iter().all(|m| !m.is_reached())
    }
}

/// Exclusive borrow of a [`QueryState`] for the duration of one search.
pub struct QueryScope<'a> {
    state: &'a mut QueryState,
}

impl Deref for QueryScope<'_> {
    type Target = QueryState;

    fn deref(&self) -> &QueryState {
        self.state
    }
}

impl DerefMut for QueryScope<'_> {
    fn deref_mut(&mut self) -> &mut QueryState {
        self.state
    }
}

impl Drop for QueryScope<'_> {
    fn drop(&mut self) {
        self.state.reset();
    }
}
