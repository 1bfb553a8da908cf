//! Alternation and extremal-surface predicates.
//!
//! Both read the word exactly as given. Callers pass a cyclic normal form;
//! on any other expression of the same element the answers may differ.

use crate::word::{t_exp, t_len, Letter, Word};

use super::types::GroupParams;

/// True if the t-letters of `g` occur singly and alternate in sign.
///
/// Words with nonzero t-exponent never alternate; words without t-letters
/// always do.
pub fn is_alternating(g: &Word) -> bool {
    if t_exp(g) != 0 {
        return false;
    }
    let n = t_len(g);
    if n == 0 {
        return true;
    }
    let runs = g.t_runs();
    if runs.len() != n {
        return false;
    }
    runs.windows(2).all(|w| w[0] != w[1])
}

/// Whether an alternating cyclic normal form `g` admits an extremal surface.
///
/// Pre: `g` is alternating and in cyclic normal form.
/// Post: with `i_sum` (resp. `j_sum`) the signed lengths of the a-subwords at
/// odd (resp. even, nonzero) positions between t-letters, returns
/// `r·i_sum == −s·j_sum` where `(r, s) = (l, m)` if `g` starts with `t` and
/// `(m, l)` otherwise. Empty subwords count as zero.
pub fn has_extremal_surface(g: &Word, p: GroupParams) -> bool {
    let n = t_len(g);
    if n == 0 {
        return false;
    }
    debug_assert!(is_alternating(g), "has_extremal_surface needs an alternating word: {g}");
    let pieces = g.split_on_t();
    let signed_len = |piece: &[Letter]| -> i64 {
        match piece.first() {
            Some(Letter::A) => piece.len() as i64,
            Some(_) => -(piece.len() as i64),
            None => 0,
        }
    };
    let (mut i_sum, mut j_sum) = (0i64, 0i64);
    let mut k = 1;
    while k < n {
        i_sum += signed_len(pieces[k]);
        j_sum += signed_len(pieces[k + 1]);
        k += 2;
    }
    let (r, s) = if g.first() == Some(Letter::T) {
        (p.l(), p.m())
    } else {
        (p.m(), p.l())
    };
    r * i_sum == -s * j_sum
}
