//! Weighted cycle sums per strongly connected component.

use tracing::debug;

use crate::group::GroupParams;
use crate::numth::{gcd, integer_vectors};
use crate::turn_graph::{Cycle, EdgeSupport, TurnGraph, TurnType};

use super::types::{EdgeDict, SearchCfg};

/// Sum of turn degrees along `c` (terminal vertex not repeated).
pub fn cycle_degree(c: &Cycle, turn_degree: &[i64]) -> i64 {
    c.turns().iter().map(|&v| turn_degree[v]).sum()
}

/// Common type of the turns on `c`, or `Mixed` if they differ.
pub fn cycle_type(c: &Cycle, turn_type: &[TurnType]) -> TurnType {
    let first = turn_type[c.vertices[0]];
    if c.vertices[1..].iter().all(|&v| turn_type[v] == first) {
        first
    } else {
        TurnType::Mixed
    }
}

/// Weighted degree Σ w_i · d_i.
pub fn cycle_sum_degree(w: &[u32], degrees: &[i64]) -> i64 {
    w.iter().zip(degrees).map(|(&wi, &d)| i64::from(wi) * d).sum()
}

/// Combined type of the cycles with nonzero weight: their common type, `Mixed`
/// on any disagreement, `None` when every weight is zero.
pub fn cycle_sum_type(w: &[u32], types: &[TurnType]) -> Option<TurnType> {
    let mut acc: Option<TurnType> = None;
    for (&wi, &ty) in w.iter().zip(types) {
        if wi == 0 {
            continue;
        }
        match acc {
            None => acc = Some(ty),
            Some(prev) if prev != ty => return Some(TurnType::Mixed),
            Some(_) => {}
        }
    }
    acc
}

/// Modulus the weighted degree must be divisible by: gcd(m,l) for mixed sums,
/// m for type-m, l for type-l.
pub fn mod_value(ty: TurnType, p: GroupParams) -> i64 {
    match ty {
        TurnType::Mixed => gcd(p.m(), p.l()),
        TurnType::TypeM => p.m(),
        TurnType::TypeL => p.l(),
    }
}

/// Largest total weight tried: `max(|m|, |l|)`, lowered to `cfg.max_weight`
/// when set. Saturates at `u32::MAX`.
pub fn weight_bound(p: GroupParams, cfg: SearchCfg) -> u32 {
    let top = match cfg.max_weight {
        Some(cap) => u64::try_from(cap).unwrap_or(u64::MAX).min(p.max_abs()),
        None => p.max_abs(),
    };
    u32::try_from(top).unwrap_or(u32::MAX)
}

/// All accepted cycle sums of `graph` (see module docs).
pub fn x_variable_list(graph: &TurnGraph, p: GroupParams, cfg: SearchCfg) -> Vec<EdgeDict> {
    let top = weight_bound(p, cfg);
    let mut out = Vec::new();
    for (k, comp) in graph.components().iter().enumerate() {
        let cycles = comp.simple_cycles(graph);
        let nc = cycles.len();
        if nc == 0 {
            continue;
        }
        let degrees: Vec<i64> = cycles
            .iter()
            .map(|c| cycle_degree(c, &graph.turn_degree))
            .collect();
        let types: Vec<TurnType> = cycles
            .iter()
            .map(|c| cycle_type(c, &graph.turn_type))
            .collect();
        // counts[i][e]: traversals of comp.edges[e] by cycle i.
        let counts: Vec<Vec<i64>> = cycles
            .iter()
            .map(|c| comp.edges.iter().map(|&e| c.count(e) as i64).collect())
            .collect();

        let before = out.len();
        for n in 1..=top {
            for w in integer_vectors(n, nc) {
                let Some(ty) = cycle_sum_type(&w, &types) else {
                    continue;
                };
                if cycle_sum_degree(&w, &degrees) % mod_value(ty, p) != 0 {
                    continue;
                }
                let dict: EdgeDict = comp
                    .edges
                    .iter()
                    .enumerate()
                    .filter_map(|(ei, &e)| {
                        let ne: i64 = w
                            .iter()
                            .zip(&counts)
                            .map(|(&wi, row)| i64::from(wi) * row[ei])
                            .sum();
                        (ne != 0).then_some((e, ne))
                    })
                    .collect();
                let support = EdgeSupport::from_edges(dict.keys().copied().collect());
                if support.is_connected() {
                    out.push(dict);
                }
            }
        }
        debug!(
            component = k,
            order = comp.order(),
            cycles = nc,
            accepted = out.len() - before,
            "cycle-sum search"
        );
    }
    out
}
