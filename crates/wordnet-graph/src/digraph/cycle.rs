//! Directed cycle detection.
//!
//! ITERATIVE depth-first search with an explicit stack, so deep taxonomies
//! cannot overflow the call stack. Vertices are coloured
//! unvisited / on-stack / done; reaching an on-stack vertex closes a cycle,
//! which is recovered from the parent links.

use tracing::trace;

use super::{Digraph, VertexId};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Colour {
    Unvisited,
    OnStack,
    Done,
}

/// Outcome of a cycle search over a whole graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectedCycle {
    cycle: Option<Vec<VertexId>>,
}

impl DirectedCycle {
    /// Search `graph` for a directed cycle.
    pub fn new(graph: &Digraph) -> Self {
        Self {
            cycle: find_cycle(graph),
        }
    }

    pub fn has_cycle(&self) -> bool {
        self.cycle.is_some()
    }

    /// The cycle found, first vertex repeated at the end.
    pub fn cycle(&self) -> Option<&[VertexId]> {
        self.cycle.as_deref()
    }
}

/// Find one directed cycle in `graph`.
///
/// Returns `None` for an acyclic graph. Otherwise returns the cycle as a
/// vertex sequence following edge direction whose first and last entries
/// are the same vertex, e.g. `[2, 3, 4, 2]`. A self-loop yields `[v, v]`.
pub fn find_cycle(graph: &Digraph) -> Option<Vec<VertexId>> {
    let n = graph.vertex_count();
    let mut colour = vec![Colour::Unvisited; n];
    let mut parent: Vec<Option<VertexId>> = vec![None; n];
    // (vertex, index of the next adjacent vertex to look at)
    let mut stack: Vec<(VertexId, usize)> = Vec::new();

    for start in 0..n {
        if colour[start] != Colour::Unvisited {
            continue;
        }
        colour[start] = Colour::OnStack;
        stack.push((start, 0));

        while let Some(top) = stack.last_mut() {
            let (v, next) = *top;
            let heads = graph.adj(v);

            if next == heads.len() {
                colour[v] = Colour::Done;
                stack.pop();
                continue;
            }
            top.1 += 1;

            let w = heads[next];
            match colour[w] {
                Colour::Unvisited => {
                    parent[w] = Some(v);
                    colour[w] = Colour::OnStack;
                    stack.push((w, 0));
                }
                Colour::OnStack => {
                    let cycle = unwind_cycle(&parent, v, w);
                    trace!("cycle found through {} -> {}: {:?}", v, w, cycle);
                    return Some(cycle);
                }
                Colour::Done => {}
            }
        }
    }

    None
}

/// Rebuild the cycle closed by the back edge `v -> w`.
fn unwind_cycle(parent: &[Option<VertexId>], v: VertexId, w: VertexId) -> Vec<VertexId> {
    let mut path = vec![v];
    let mut current = v;
    while current != w {
        match parent[current] {
            Some(p) => {
                path.push(p);
                current = p;
            }
            // w is on the stack, so it is an ancestor of v in the DFS tree
            None => break,
        }
    }
    path.reverse();
    path.push(w);
    path
}
