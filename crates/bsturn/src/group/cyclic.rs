//! Cyclic normal form: a normal form reduced under rotation.

use crate::word::{tighten, Letter, Word};

use super::normal::normal_form;
use super::types::GroupParams;

/// Cyclically reduced normal form representing the conjugacy class of `g`.
///
/// After free cyclic reduction the loop rotates leading a-letters to the end,
/// tightens, and looks at the trailing term `t^{±1} a^k` (last t-letter plus
/// the single-case a-run after it). If the word starts with the same t-letter
/// it is done. Otherwise, when `k` is a multiple of `r`, the leading t-letter
/// and the trailing term are removed and `a^{(k/r)·s}` (case flipped when
/// m·l < 0) is appended; when it is not, no further move exists.
///
/// The result is tight. When the last move strips the final t-letters the
/// appended a-letters are cancelled against what remains.
pub fn cyclic_normal(g: &Word, p: GroupParams) -> Word {
    let nf = normal_form(g, p);
    let xs = nf.letters();
    let (mut lo, mut hi) = (0, xs.len());
    while hi - lo >= 2 && xs[lo] == xs[hi - 1].inverse() {
        lo += 1;
        hi -= 1;
    }
    let mut cur: Vec<Letter> = xs[lo..hi].to_vec();

    while cur.iter().any(|x| x.is_t()) {
        for x in [Letter::A, Letter::AInv] {
            let lead = cur.iter().take_while(|&&y| y == x).count();
            cur.rotate_left(lead);
        }
        cur = tighten(&Word::from_letters(cur)).into_letters();
        let Some(last_t) = cur.iter().rposition(|x| x.is_t()) else {
            break;
        };
        let term = &cur[last_t..];
        if cur[0] == term[0] {
            break;
        }
        let (r, s) = p.moduli(cur[0]);
        let a_len = term.len() - 1;
        if a_len % r != 0 {
            break;
        }
        let moved = term
            .get(1)
            .map(|&x| vec![p.moved(x); (a_len / r) * s])
            .unwrap_or_default();
        let mut next = cur[1..last_t].to_vec();
        next.extend(moved);
        cur = next;
    }
    tighten(&Word::from_letters(cur))
}
