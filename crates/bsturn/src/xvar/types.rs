//! Search configuration and edge dictionaries.

use std::collections::BTreeMap;

use crate::turn_graph::Edge;

/// Edge ↦ number of traversals by a weighted cycle sum. Only nonzero entries.
pub type EdgeDict = BTreeMap<Edge, i64>;

/// How many times an edge dictionary passes through `v` (sum over edges leaving `v`).
pub fn dict_nv(dict: &EdgeDict, v: usize) -> i64 {
    dict.iter()
        .filter(|(&(i, _), _)| i == v)
        .map(|(_, &ne)| ne)
        .sum()
}

/// Search configuration.
#[derive(Clone, Copy, Debug, Default)]
pub struct SearchCfg {
    /// Cap on the total cycle weight `n`. `None` searches up to max(|m|,|l|).
    pub max_weight: Option<usize>,
}
