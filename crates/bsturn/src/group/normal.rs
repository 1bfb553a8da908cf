//! Normal form by repeated application of the defining relator.

use tracing::trace;

use crate::word::{tighten, Letter, Word};

use super::types::GroupParams;

/// Normal form of `g` in BS(m,l).
///
/// Loop: tighten, find the leftmost a-block whose length reaches the modulus
/// `r` of the t-letter after it, write its length as `q·r + c`, keep `a^c`
/// before the t-letter and move `q·s` letters of the same base (case flipped
/// when m·l < 0) past it. Stops when no block violates its bound.
///
/// Only the first letter of a run like `tt` bounds the block before it; the
/// blocks between consecutive t-letters are empty and never violate.
pub fn normal_form(g: &Word, p: GroupParams) -> Word {
    let mut cur = tighten(g);
    let mut steps = 0usize;
    while let Some(next) = rewrite_first_violation(&cur, p) {
        cur = tighten(&next);
        steps += 1;
    }
    trace!(steps, len = cur.len(), "normal_form");
    cur
}

/// One relator step at the leftmost violating block, or `None` if `g` is
/// already in normal form. `g` must be tight (a-blocks single-case).
fn rewrite_first_violation(g: &Word, p: GroupParams) -> Option<Word> {
    let xs = g.letters();
    let mut run_start = 0;
    for (i, &x) in xs.iter().enumerate() {
        if x.is_a() {
            continue;
        }
        let start = run_start;
        let run = &xs[start..i];
        run_start = i + 1;
        let (r, s) = p.moduli(x);
        if run.len() < r {
            continue;
        }
        let base = run[0];
        let (q, c) = (run.len() / r, run.len() % r);
        let mut out: Vec<Letter> = Vec::with_capacity(xs.len() + q * s);
        out.extend_from_slice(&xs[..start]);
        out.extend(std::iter::repeat(base).take(c));
        out.push(x);
        out.extend(std::iter::repeat(p.moved(base)).take(q * s));
        out.extend_from_slice(&xs[i + 1..]);
        return Some(Word::from_letters(out));
    }
    None
}
