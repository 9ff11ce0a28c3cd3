//! Immutable adjacency-list digraph.
//!
//! Vertices are dense integers `0..V`. Edges are directed and unweighted;
//! parallel edges and self-loops are allowed. A [`Digraph`] is built once
//! through a [`DigraphBuilder`] and never mutated afterwards, so it can be
//! shared between threads and between several SAP engines.
//!
//! # Components
//!
//! - [`Digraph`] / [`DigraphBuilder`]: the graph and its construction API
//! - [`find_cycle`] / [`DirectedCycle`]: iterative cycle detection
//! - [`Digraph::parse_edge_list`]: the `V / E / v w` text format

mod cycle;
mod io;

#[cfg(test)]
mod tests;

pub use cycle::{find_cycle, DirectedCycle};

use std::collections::TryReserveError;

use crate::error::{GraphError, GraphResult};

/// Vertex id: a dense index in `0..vertex_count`.
pub type VertexId = usize;

/// Immutable directed graph stored as forward adjacency lists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Digraph {
    adj: Vec<Vec<VertexId>>,
    in_degree: Vec<usize>,
    edge_count: usize,
}

impl Digraph {
    /// Create a graph with `vertex_count` vertices and no edges.
    pub fn new(vertex_count: usize) -> Self {
        DigraphBuilder::new(vertex_count).build()
    }

    /// Build a graph from an edge slice.
    ///
    /// # Errors
    /// * `GraphError::VertexOutOfRange` - an endpoint is `>= vertex_count`
    pub fn from_edges(vertex_count: usize, edges: &[(VertexId, VertexId)]) -> GraphResult<Self> {
        let mut builder = DigraphBuilder::new(vertex_count);
        for &(v, w) in edges {
            builder.add_edge(v, w)?;
        }
        Ok(builder.build())
    }

    /// Number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.adj.len()
    }

    /// Number of edges, counting parallel edges separately.
    #[inline]
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Vertices adjacent from `v` (the heads of edges leaving `v`).
    ///
    /// # Panics
    /// Panics if `v` is out of range. Use [`Digraph::check_vertex`] first when
    /// the id comes from outside the crate.
    #[inline]
    pub fn adj(&self, v: VertexId) -> &[VertexId] {
        &self.adj[v]
    }

    #[inline]
    pub fn out_degree(&self, v: VertexId) -> usize {
        self.adj[v].len()
    }

    #[inline]
    pub fn in_degree(&self, v: VertexId) -> usize {
        self.in_degree[v]
    }

    /// Vertices with out-degree zero, in ascending order.
    pub fn sinks(&self) -> Vec<VertexId> {
        (0..self.vertex_count())
            .filter(|&v| self.adj[v].is_empty())
            .collect()
    }

    /// Graph with every edge reversed.
    pub fn reverse(&self) -> Digraph {
        let mut builder = DigraphBuilder::new(self.vertex_count());
        for (v, heads) in self.adj.iter().enumerate() {
            for &w in heads {
                builder.push_edge(w, v);
            }
        }
        builder.build()
    }

    /// Fail with `VertexOutOfRange` unless `v` is a vertex of this graph.
    #[inline]
    pub fn check_vertex(&self, v: VertexId) -> GraphResult<()> {
        check_range(v, self.vertex_count())
    }
}

/// Incremental constructor for [`Digraph`].
#[derive(Debug, Clone)]
pub struct DigraphBuilder {
    adj: Vec<Vec<VertexId>>,
    in_degree: Vec<usize>,
    edge_count: usize,
}

impl DigraphBuilder {
    pub fn new(vertex_count: usize) -> Self {
        Self {
            adj: vec![Vec::new(); vertex_count],
            in_degree: vec![0; vertex_count],
            edge_count: 0,
        }
    }

    /// Like [`DigraphBuilder::new`], but reports a vertex count too large to
    /// allocate instead of aborting.
    pub fn try_new(vertex_count: usize) -> Result<Self, TryReserveError> {
        let mut adj = Vec::new();
        adj.try_reserve_exact(vertex_count)?;
        adj.resize_with(vertex_count, Vec::new);

        let mut in_degree = Vec::new();
        in_degree.try_reserve_exact(vertex_count)?;
        in_degree.resize(vertex_count, 0);

        Ok(Self {
            adj,
            in_degree,
            edge_count: 0,
        })
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.adj.len()
    }

    /// Add the edge `v -> w`.
    ///
    /// # Errors
    /// * `GraphError::VertexOutOfRange` - either endpoint is out of range
    pub fn add_edge(&mut self, v: VertexId, w: VertexId) -> GraphResult<&mut Self> {
        check_range(v, self.vertex_count())?;
        check_range(w, self.vertex_count())?;
        self.push_edge(v, w);
        Ok(self)
    }

    fn push_edge(&mut self, v: VertexId, w: VertexId) {
        self.adj[v].push(w);
        self.in_degree[w] += 1;
        self.edge_count += 1;
    }

    pub fn build(self) -> Digraph {
        Digraph {
            adj: self.adj,
            in_degree: self.in_degree,
            edge_count: self.edge_count,
        }
    }
}

#[inline]
fn check_range(v: VertexId, vertex_count: usize) -> GraphResult<()> {
    if v < vertex_count {
        Ok(())
    } else {
        Err(GraphError::VertexOutOfRange {
            vertex: v,
            vertex_count,
        })
    }
}

static_assertions::assert_impl_all!(Digraph: Send, Sync, Clone);
