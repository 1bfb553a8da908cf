//! Curated internal API (UNSTABLE).
//!
//! Important
//! - Not a public API. A convenience surface for the CLI, benches and
//!   experiments; breaking changes are allowed.

// Words
pub use crate::word::rand::{draw_alternating, draw_word, ReplayToken, WordCfg};
pub use crate::word::{inverse, t_exp, t_len, tighten, Letter, Word};
// BS(m,l) rewriting
pub use crate::group::{cyclic_normal, has_extremal_surface, is_alternating, normal_form, GroupParams};
// Turn graphs
pub use crate::turn_graph::{
    dual_edge, dual_edge_basis, edges_path, path_ne, turn_graph, Component, Cycle, Edge,
    EdgeSupport, TurnGraph, TurnType,
};
// Cycle-sum search
pub use crate::xvar::{
    cycle_degree, cycle_sum_degree, cycle_sum_type, cycle_type, dict_nv, mod_value,
    weight_bound, x_variable_list, EdgeDict, SearchCfg,
};
// Collaborators and pipeline
pub use crate::analysis::{analyze, analyze_word, Analysis};
pub use crate::error::{BsError, BsResult};
pub use crate::numth::{gcd, integer_vectors};
