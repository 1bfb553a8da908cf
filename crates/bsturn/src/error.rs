//! Error type for input validation.
//!
//! Only two things can go wrong: a word with a letter outside `{a, A, t, T}`
//! and a zero group parameter. Both are rejected when the value is built, so
//! every algorithm downstream is total over validated inputs.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BsError {
    /// The word contains a character outside the alphabet `{a, A, t, T}`.
    #[error("invalid letter {ch:?} at position {pos} (expected one of a, A, t, T)")]
    InvalidLetter { ch: char, pos: usize },

    /// BS(m,l) needs nonzero m and l; zero would make every block modulus vanish.
    #[error("group parameters must be nonzero (got m={m}, l={l})")]
    ZeroParameter { m: i64, l: i64 },
}

pub type BsResult<T> = Result<T, BsError>;
