//! Word algebra over the two-generator alphabet `{a, A, t, T}`.
//!
//! Purpose
//! - Hold words of BS(m,l) as immutable letter sequences, with uppercase the
//!   inverse of the matching lowercase letter.
//! - Provide free reduction (`tighten`), inversion, t-exponent/t-length and
//!   the letter-class partitions used by the normal form and turn graph code.
//!
//! Conventions
//! - Parsing is the only fallible step; every other function is total.
//! - Letter classes are decided by direct matching on `Letter`; case matters
//!   for sign, never for class.

pub mod rand;
mod ops;
mod types;

pub use ops::{inverse, t_exp, t_len, tighten};
pub use types::{Letter, Word};
