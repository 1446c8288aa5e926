//! Face tracing over an [`Arrangement`].
//!
//! Each trace follows the tightest right-hand turn at every vertex: from the
//! reversed arrival direction, the outgoing half-edge with the smallest
//! strictly positive counterclockwise offset. Because every node's outgoing
//! list is sorted by tangent angle and the reversed arrival direction is
//! exactly the twin's tangent, that choice is the twin's cyclic successor in
//! the list, which also fixes the tie-break for equal angles (lower index
//! first). A vertex whose only outgoing half-edge is the twin offers no
//! positive turn, so a walk that reaches it is abandoned.

use serde::Serialize;

use crate::algorithms::arrangement::Arrangement;
use crate::geometry::tolerance::Tolerances;

/// Closed walk of half-edge indices bounding one face.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Loop {
    pub half_edges: Vec<u32>,
}

impl Loop {
    pub fn len(&self) -> usize { self.half_edges.len() }
    pub fn is_empty(&self) -> bool { self.half_edges.is_empty() }

    /// Last half-edge ends where the first begins.
    pub fn is_closed(&self, arr: &Arrangement) -> bool {
        match (self.half_edges.first(), self.half_edges.last()) {
            (Some(&f), Some(&l)) => arr.half_edge(l).to == arr.half_edge(f).from,
            _ => false,
        }
    }
}

/// Position of every half-edge inside its origin node's sorted `out` list.
fn out_slots(arr: &Arrangement) -> Vec<usize> {
    let mut slot = vec![0usize; arr.half_edges.len()];
    for node in &arr.nodes {
        for (pos, &h) in node.out.iter().enumerate() {
            slot[h as usize] = pos;
        }
    }
    slot
}

/// Half-edge taken after arriving along `h`, or `None` at a dead end.
pub fn next_half_edge(arr: &Arrangement, h: u32) -> Option<u32> {
    let he = arr.half_edge(h);
    let out = &arr.nodes[he.to as usize].out;
    if out.len() < 2 {
        // only the twin leaves here: no strictly positive turn exists
        return None;
    }
    let pos = out.iter().position(|&x| x == he.twin)?;
    Some(out[(pos + 1) % out.len()])
}

pub fn trace_loops(arr: &Arrangement) -> Vec<Loop> {
    trace_loops_with(arr, &Tolerances::default())
}

pub fn trace_loops_with(arr: &Arrangement, tol: &Tolerances) -> Vec<Loop> {
    let m = arr.half_edges.len();
    let slot = out_slots(arr);
    let mut visited = vec![false; m];
    let mut loops = Vec::new();
    let mut abandoned = 0usize;

    for start in 0..m {
        if visited[start] {
            continue;
        }
        let start = start as u32;
        let mut cur = start;
        let mut walk: Vec<u32> = Vec::new();
        let mut steps = 0usize;
        let closed = loop {
            visited[cur as usize] = true;
            walk.push(cur);
            steps += 1;
            if steps > tol.max_trace_steps {
                tracing::warn!(start, steps, "trace exceeded step guard");
                break false;
            }
            let he = arr.half_edge(cur);
            let out = &arr.nodes[he.to as usize].out;
            if out.len() < 2 {
                tracing::trace!(start, vertex = he.to, "dead end");
                break false;
            }
            let next = out[(slot[he.twin as usize] + 1) % out.len()];
            if next == start {
                break true;
            }
            if visited[next as usize] {
                tracing::trace!(start, half_edge = next, "reached visited half-edge");
                break false;
            }
            cur = next;
        };
        if closed {
            loops.push(Loop { half_edges: walk });
        } else {
            abandoned += 1;
        }
    }

    tracing::debug!(half_edges = m, loops = loops.len(), abandoned, "faces traced");
    loops
}
