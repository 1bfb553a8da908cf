//! `Letter` and `Word` value types.

use std::fmt;
use std::str::FromStr;

use crate::error::BsError;

/// One letter of the alphabet. `AInv`/`TInv` print as `A`/`T`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Letter {
    A,
    AInv,
    T,
    TInv,
}

impl Letter {
    #[inline]
    pub fn from_char(ch: char) -> Option<Self> {
        match ch {
            'a' => Some(Letter::A),
            'A' => Some(Letter::AInv),
            't' => Some(Letter::T),
            'T' => Some(Letter::TInv),
            _ => None,
        }
    }

    #[inline]
    pub fn to_char(self) -> char {
        match self {
            Letter::A => 'a',
            Letter::AInv => 'A',
            Letter::T => 't',
            Letter::TInv => 'T',
        }
    }

    /// Case swap: the inverse generator.
    #[inline]
    pub fn inverse(self) -> Self {
        match self {
            Letter::A => Letter::AInv,
            Letter::AInv => Letter::A,
            Letter::T => Letter::TInv,
            Letter::TInv => Letter::T,
        }
    }

    #[inline]
    pub fn is_a(self) -> bool {
        matches!(self, Letter::A | Letter::AInv)
    }

    #[inline]
    pub fn is_t(self) -> bool {
        matches!(self, Letter::T | Letter::TInv)
    }

    /// +1 for lowercase, -1 for uppercase.
    #[inline]
    pub fn sign(self) -> i64 {
        match self {
            Letter::A | Letter::T => 1,
            Letter::AInv | Letter::TInv => -1,
        }
    }
}

/// Finite word over `{a, A, t, T}`.
///
/// Invariants:
/// - Values are never mutated in place by the algorithms; every rewrite
///   builds a fresh `Word`.
/// - A word is not required to be tight; `tighten` produces the free reduction.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Word(Vec<Letter>);

impl Word {
    #[inline]
    pub fn empty() -> Self {
        Self(Vec::new())
    }

    #[inline]
    pub fn from_letters(letters: Vec<Letter>) -> Self {
        Self(letters)
    }

    /// `letter^n` as a word.
    pub fn power(letter: Letter, n: usize) -> Self {
        Self(vec![letter; n])
    }

    #[inline]
    pub fn letters(&self) -> &[Letter] {
        &self.0
    }

    #[inline]
    pub fn into_letters(self) -> Vec<Letter> {
        self.0
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[inline]
    pub fn first(&self) -> Option<Letter> {
        self.0.first().copied()
    }

    #[inline]
    pub fn last(&self) -> Option<Letter> {
        self.0.last().copied()
    }

    /// Concatenation `self · other` (no reduction).
    pub fn concat(&self, other: &Word) -> Word {
        let mut out = Vec::with_capacity(self.len() + other.len());
        out.extend_from_slice(&self.0);
        out.extend_from_slice(&other.0);
        Word(out)
    }

    /// The a-subwords between t-letters: always `t_len + 1` pieces, some
    /// possibly empty. Piece `k` sits between the `k-1`-th and `k`-th t-letter.
    pub fn split_on_t(&self) -> Vec<&[Letter]> {
        self.0.split(|x| x.is_t()).collect()
    }

    /// Maximal runs of consecutive t-letters, in order.
    pub fn t_runs(&self) -> Vec<&[Letter]> {
        self.0
            .split(|x| x.is_a())
            .filter(|run| !run.is_empty())
            .collect()
    }

    /// The t-letters only, in their original order ("shape" of the word).
    pub fn t_shape(&self) -> Vec<Letter> {
        self.0.iter().copied().filter(|x| x.is_t()).collect()
    }
}

impl FromStr for Word {
    type Err = BsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.chars()
            .enumerate()
            .map(|(pos, ch)| Letter::from_char(ch).ok_or(BsError::InvalidLetter { ch, pos }))
            .collect::<Result<Vec<_>, _>>()
            .map(Word)
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for x in &self.0 {
            write!(f, "{}", x.to_char())?;
        }
        Ok(())
    }
}

impl From<Vec<Letter>> for Word {
    fn from(letters: Vec<Letter>) -> Self {
        Word(letters)
    }
}
