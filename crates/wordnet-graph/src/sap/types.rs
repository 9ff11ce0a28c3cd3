//! SAP value types.
//!
//! Contains the per-vertex mark, the frontier entry, and the result types
//! returned by [`Sap`](super::Sap) queries.

use crate::digraph::VertexId;

/// Which input family reached a vertex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    /// Reached from a vertex of the first (`V`) set.
    Left,
    /// Reached from a vertex of the second (`W`) set.
    Right,
}

impl Side {
    #[inline]
    pub fn opposite(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

/// Per-side BFS mark for one vertex.
///
/// `Unset` replaces the `-1` sentinel, so a distance can only be read after
/// matching on `Reached`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Mark {
    #[default]
    Unset,
    Reached {
        /// Hops from the nearest seed of this side.
        distance: u32,
        /// Predecessor in this side's BFS tree; `None` for a seed.
        via: Option<VertexId>,
    },
}

impl Mark {
    #[inline]
    pub fn is_reached(self) -> bool {
        matches!(self, Mark::Reached { .. })
    }

    #[inline]
    pub fn distance(self) -> Option<u32> {
        match self {
            Mark::Reached { distance, .. } => Some(distance),
            Mark::Unset => None,
        }
    }
}

/// One pending expansion in the merged frontier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FrontierEntry {
    pub vertex: VertexId,
    pub side: Side,
    pub distance: u32,
}

/// Result of a shortest-ancestral-path query.
///
/// Both fields are `None` when the two sets share no common ancestor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SapResult {
    pub length: Option<u32>,
    pub ancestor: Option<VertexId>,
}

impl SapResult {
    /// No common ancestor.
    pub const NONE: SapResult = SapResult {
        length: None,
        ancestor: None,
    };

    #[inline]
    pub fn found(length: u32, ancestor: VertexId) -> Self {
        Self {
            length: Some(length),
            ancestor: Some(ancestor),
        }
    }

    #[inline]
    pub fn is_found(&self) -> bool {
        self.length.is_some()
    }

    /// Length with `-1` for "no path".
    pub fn length_or_sentinel(&self) -> i64 {
        self.length.map_or(-1, i64::from)
    }

    /// Ancestor with `-1` for "no path".
    pub fn ancestor_or_sentinel(&self) -> i64 {
        self.ancestor.map_or(-1, |a| a as i64)
    }
}

/// A shortest ancestral path, split at its common ancestor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AncestralPath {
    pub ancestor: VertexId,
    pub length: u32,
    /// From a vertex of the first set up to `ancestor`, inclusive.
    pub left: Vec<VertexId>,
    /// From a vertex of the second set up to `ancestor`, inclusive.
    pub right: Vec<VertexId>,
}

impl AncestralPath {
    /// The seed in the first set this path starts from.
    pub fn left_source(&self) -> VertexId {
        self.left.first().copied().unwrap_or(self.ancestor)
    }

    /// The seed in the second set this path starts from.
    pub fn right_source(&self) -> VertexId {
        self.right.first().copied().unwrap_or(self.ancestor)
    }

    /// Full vertex sequence `v -> ... -> ancestor <- ... <- w`.
    pub fn vertices(&self) -> Vec<VertexId> {
        let mut out = self.left.clone();
        out.extend(self.right.iter().rev().skip(1));
        out
    }
}

/// Counters for the most recent query on an engine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct QueryStats {
    /// Frontier entries expanded.
    pub expanded: usize,
    /// Distinct vertices marked by either side.
    pub touched: usize,
    /// Search stopped before the frontier drained.
    pub early_exit: bool,
}
