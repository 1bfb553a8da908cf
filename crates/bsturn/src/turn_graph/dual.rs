//! Dual edges under the cyclic symmetry of the turn graph.

use std::collections::BTreeSet;

use super::types::{Edge, TurnGraph};

/// `(i, j) ↦ (j+1, i−1)` modulo `nv`; an involution on edges.
#[inline]
pub fn dual_edge(e: Edge, nv: usize) -> Edge {
    let (i, j) = e;
    ((j + 1) % nv, (i + nv - 1) % nv)
}

/// One representative per dual pair, scanning edges in sorted order and
/// keeping the first edge met of each pair. Self-dual edges are kept.
pub fn dual_edge_basis(graph: &TurnGraph) -> Vec<Edge> {
    let nv = graph.order();
    let mut dropped: BTreeSet<Edge> = BTreeSet::new();
    let mut basis = Vec::new();
    for &e in &graph.edges {
        if dropped.contains(&e) {
            continue;
        }
        basis.push(e);
        let d = dual_edge(e, nv);
        if d != e {
            dropped.insert(d);
        }
    }
    basis
}
