//! BS(m,l) rewriting: normal forms, cyclic normal forms, alternation.
//!
//! Purpose
//! - Rewrite words into the normal form
//!   `a^{i0} t^{e1} a^{i1} ... t^{ek} a^{ik}` of BS(m,l) = ⟨a,t | t a^m t^{-1} = a^l⟩,
//!   with every a-block bounded by the modulus of the t-letter that follows it.
//! - Reduce further under cyclic rotation to a conjugacy-class representative.
//! - Provide the structural predicates (alternation, extremal surface) that the
//!   turn graph analysis relies on.
//!
//! Why this design
//! - One relator step at a time over immutable `Word` values, driven by a loop
//!   instead of self-recursion, so long inputs cannot exhaust the stack.
//! - Letter classes are matched directly on `Letter`, so the trailing block in
//!   the cyclic reduction is always one t-letter followed by a single-case
//!   a-run.

mod alternating;
mod cyclic;
mod normal;
mod types;

pub use alternating::{has_extremal_surface, is_alternating};
pub use cyclic::cyclic_normal;
pub use normal::normal_form;
pub use types::GroupParams;

#[cfg(test)]
mod tests;
