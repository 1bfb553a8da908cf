//! Free-group operations on words.

use super::types::{Letter, Word};

/// Free reduction in one left-to-right pass.
///
/// The output acts as a stack: a letter that is the inverse of the current
/// top pops it, so cascading cancellations resolve within the same pass.
pub fn tighten(word: &Word) -> Word {
    let mut out: Vec<Letter> = Vec::with_capacity(word.len());
    for &x in word.letters() {
        match out.last() {
            Some(&top) if top == x.inverse() => {
                out.pop();
            }
            _ => out.push(x),
        }
    }
    Word::from_letters(out)
}

/// Inverse in the free group: reverse and swap case.
pub fn inverse(word: &Word) -> Word {
    Word::from_letters(word.letters().iter().rev().map(|x| x.inverse()).collect())
}

/// Signed t-exponent sum: #t − #T.
pub fn t_exp(word: &Word) -> i64 {
    word.letters()
        .iter()
        .map(|&x| match x {
            Letter::T => 1,
            Letter::TInv => -1,
            _ => 0,
        })
        .sum()
}

/// Number of t-letters (either case).
pub fn t_len(word: &Word) -> usize {
    word.letters().iter().filter(|x| x.is_t()).count()
}
