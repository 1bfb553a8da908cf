//! Reproducible random words for experiments, benches and property tests.
//!
//! Model
//! - `draw_word`: a tight word with `t_letters` t-letters of random sign,
//!   separated by a-runs of length `0..=max_a_run` with random sign.
//! - `draw_alternating`: t and T strictly alternate, so the result has
//!   t-exponent zero and is alternating as written.
//! - Determinism uses a replay token `(seed, index)` mixed into one RNG.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::ops::tighten;
use super::types::{Letter, Word};

/// Sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct WordCfg {
    /// Number of t-letters drawn (before free reduction).
    pub t_letters: usize,
    /// Upper bound on each a-run length.
    pub max_a_run: usize,
}

impl Default for WordCfg {
    fn default() -> Self {
        Self {
            t_letters: 4,
            max_a_run: 3,
        }
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    pub fn new(seed: u64, index: u64) -> Self {
        Self { seed, index }
    }

    #[inline]
    fn to_std_rng(self) -> StdRng {
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        StdRng::seed_from_u64(mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15))))
    }
}

fn push_a_run<R: Rng>(rng: &mut R, max_a_run: usize, out: &mut Vec<Letter>) {
    let len = rng.gen_range(0..=max_a_run);
    let x = if rng.gen::<bool>() { Letter::A } else { Letter::AInv };
    out.extend(std::iter::repeat(x).take(len));
}

/// Draw a random tight word.
pub fn draw_word(cfg: WordCfg, tok: ReplayToken) -> Word {
    let mut rng = tok.to_std_rng();
    let mut letters = Vec::new();
    push_a_run(&mut rng, cfg.max_a_run, &mut letters);
    for _ in 0..cfg.t_letters {
        letters.push(if rng.gen::<bool>() { Letter::T } else { Letter::TInv });
        push_a_run(&mut rng, cfg.max_a_run, &mut letters);
    }
    tighten(&Word::from_letters(letters))
}

/// Draw a word whose t-letters alternate `t, T, t, T, ...` (or starting with `T`).
///
/// `t_letters` is rounded up to the next even number. Every a-run between
/// t-letters is nonempty, so no free cancellation can merge two t-letters.
pub fn draw_alternating(cfg: WordCfg, tok: ReplayToken) -> Word {
    let mut rng = tok.to_std_rng();
    let pairs = cfg.t_letters.div_ceil(2).max(1);
    let max_run = cfg.max_a_run.max(1);
    let mut t = if rng.gen::<bool>() { Letter::T } else { Letter::TInv };
    let mut letters = Vec::new();
    for _ in 0..2 * pairs {
        letters.push(t);
        let len = rng.gen_range(1..=max_run);
        let x = if rng.gen::<bool>() { Letter::A } else { Letter::AInv };
        letters.extend(std::iter::repeat(x).take(len));
        t = t.inverse();
    }
    Word::from_letters(letters)
}
