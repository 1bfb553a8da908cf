//! Turn graphs of cyclically alternating words.
//!
//! Purpose
//! - Model each maximal a-block between consecutive t-letters (a "turn") as a
//!   vertex, with its signed length as degree and a type tag read from the two
//!   t-letters around it.
//! - Connect turns that can follow one another in a reduced path around the
//!   word; the strongly connected pieces of this digraph carry the embedded
//!   cycles the cycle-sum search combines.
//!
//! Graph collaborator
//! - `TurnGraph` stores vertices, a sorted edge list and adjacency. Strongly
//!   connected components come from `petgraph::algo::tarjan_scc`; weak
//!   connectivity of an edge support uses `petgraph::unionfind::UnionFind`.
//! - Subgraphs are fresh values (`Component`, `EdgeSupport`); the base graph
//!   is never mutated after construction.

mod build;
mod cycles;
mod dual;
mod types;

pub use build::turn_graph;
pub use cycles::{edges_path, path_ne, Cycle};
pub use dual::{dual_edge, dual_edge_basis};
pub use types::{Component, Edge, EdgeSupport, TurnGraph, TurnType};
