//! Turn graph construction from a word.

use crate::word::{Letter, Word};

use super::types::{Edge, TurnGraph, TurnType};

/// Build the turn graph of `g` (a cyclically alternating word).
///
/// Turn `i` is the a-subword just before the `i`-th t-letter; turn 0 also
/// absorbs the a-subword after the last t-letter (cyclic wraparound). Edge
/// `j → i` exists iff the t-letter closing turn `i` is the inverse of the
/// t-letter opening turn `j`.
pub fn turn_graph(g: &Word) -> TurnGraph {
    let pieces = g.split_on_t();
    let nv = pieces.len() - 1;
    if nv == 0 {
        return TurnGraph::default();
    }
    let prev = |i: usize| (i + nv - 1) % nv;

    let wrapped: Vec<Letter> = pieces[0].iter().chain(pieces[nv]).copied().collect();
    let turn_degree: Vec<i64> = (0..nv)
        .map(|i| {
            let turn: &[Letter] = if i == 0 { &wrapped } else { pieces[i] };
            match turn.first() {
                None => 0,
                Some(&x) => x.sign() * turn.len() as i64,
            }
        })
        .collect();

    let shape = g.t_shape();
    let turn_type: Vec<TurnType> = (0..nv)
        .map(|i| {
            let before = shape[prev(i)];
            if before == shape[i] {
                TurnType::Mixed
            } else if before == Letter::T {
                TurnType::TypeM
            } else {
                TurnType::TypeL
            }
        })
        .collect();

    let mut edges: Vec<Edge> = Vec::new();
    for i in 0..nv {
        for j in 0..nv {
            if shape[i].inverse() == shape[prev(j)] {
                edges.push((j, i));
            }
        }
    }
    TurnGraph::new(turn_degree, turn_type, edges)
}
