//! Invariants of elements of Baumslag–Solitar groups BS(m,l) and turn-graph
//! searches for disks bounding a curve.
//!
//! Pipeline
//! - `word`: words over `{a, A, t, T}`, free reduction.
//! - `group`: normal and cyclic normal forms, alternation, extremal surfaces.
//! - `turn_graph`: turns of a cyclically alternating word and their digraph.
//! - `xvar`: weighted sums of embedded cycles (X variables).
//! - `analysis`: the whole chain for one word.
//!
//! API Policy
//! - This crate is project-internal. There is no stable public API; prefer
//!   `api` or `prelude` re-exports in callers.

pub mod analysis;
pub mod api;
pub mod error;
pub mod group;
pub mod numth;
pub mod turn_graph;
pub mod word;
pub mod xvar;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use error::{BsError, BsResult};
pub use group::GroupParams;
pub use word::{Letter, Word};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::analysis::{analyze, analyze_word, Analysis};
    pub use crate::error::{BsError, BsResult};
    pub use crate::group::{
        cyclic_normal, has_extremal_surface, is_alternating, normal_form, GroupParams,
    };
    pub use crate::turn_graph::{turn_graph, TurnGraph, TurnType};
    pub use crate::word::{inverse, t_exp, t_len, tighten, Letter, Word};
    pub use crate::xvar::{x_variable_list, EdgeDict, SearchCfg};
}
