//! Group parameters and the block moduli derived from them.

use crate::error::{BsError, BsResult};
use crate::word::Letter;

/// Validated parameters `(m, l)` of BS(m,l); both nonzero.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct GroupParams {
    m: i64,
    l: i64,
}

impl GroupParams {
    pub fn new(m: i64, l: i64) -> BsResult<Self> {
        if m == 0 || l == 0 {
            return Err(BsError::ZeroParameter { m, l });
        }
        Ok(Self { m, l })
    }

    #[inline]
    pub fn m(&self) -> i64 {
        self.m
    }

    #[inline]
    pub fn l(&self) -> i64 {
        self.l
    }

    /// True iff m·l < 0: a-letters moved past a t-letter flip case.
    #[inline]
    pub fn swap_sign(&self) -> bool {
        (self.m < 0) != (self.l < 0)
    }

    /// Block moduli `(r, s)` for the t-letter `t`: `(|l|, |m|)` for `t`,
    /// `(|m|, |l|)` otherwise. An a-block of length ≥ r before `t` is
    /// rewritten by trading r letters on the left for s on the right.
    #[inline]
    pub fn moduli(&self, t: Letter) -> (usize, usize) {
        let (m, l) = (self.m.unsigned_abs() as usize, self.l.unsigned_abs() as usize);
        if t == Letter::T {
            (l, m)
        } else {
            (m, l)
        }
    }

    /// The letter an a-letter `x` becomes once moved past a t-letter.
    #[inline]
    pub fn moved(&self, x: Letter) -> Letter {
        if self.swap_sign() {
            x.inverse()
        } else {
            x
        }
    }

    /// M = max(|m|, |l|), the largest total weight the cycle-sum search tries.
    #[inline]
    pub fn max_abs(&self) -> u64 {
        self.m.unsigned_abs().max(self.l.unsigned_abs())
    }
}
