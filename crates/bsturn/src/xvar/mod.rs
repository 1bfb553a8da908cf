//! Cycle-sum search ("X variables") on turn graphs.
//!
//! Purpose
//! - For each strongly connected component, combine its embedded cycles with
//!   non-negative integer weights of total `n = 1..=M`, `M = max(|m|,|l|)`,
//!   keep the sums whose weighted degree is divisible by the modulus of their
//!   combined type, and accept those whose edge support is connected.
//! - Each accepted sum is reported as an edge dictionary (edge ↦ multiplicity,
//!   zero entries omitted): a candidate boundary of an immersed disk.
//!
//! Notes
//! - The number of weight vectors per component is Σ_n C(n+nc−1, nc−1);
//!   `SearchCfg::max_weight` caps `n` when that gets out of hand; see
//!   `weight_bound`.
//! - Components and weight totals are independent of each other; results are
//!   concatenated in component order, then by `n`, then by weight vector in
//!   reverse lexicographic order.

mod search;
mod types;

pub use search::{
    cycle_degree, cycle_sum_degree, cycle_sum_type, cycle_type, mod_value, weight_bound,
    x_variable_list,
};
pub use types::{dict_nv, EdgeDict, SearchCfg};
