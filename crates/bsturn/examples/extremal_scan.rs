//! Scan random alternating words and report how many admit extremal surfaces.
//!
//! Purpose
//! - Quick, reproducible count of how often cyclically normalized alternating
//!   words carry an extremal surface and how many X variables they produce.
//!
//! Usage
//!   cargo run -p bsturn --example extremal_scan -- 2 3 200

use std::time::Instant;

use bsturn::api::*;

fn main() {
    let args: Vec<i64> = std::env::args()
        .skip(1)
        .map(|s| s.parse().expect("integer argument"))
        .collect();
    let (m, l, count) = match args.as_slice() {
        [m, l, n] => (*m, *l, *n as u64),
        [m, l] => (*m, *l, 100),
        _ => (2, 3, 100),
    };
    let p = GroupParams::new(m, l).expect("nonzero m and l");
    let cfg = WordCfg {
        t_letters: 4,
        max_a_run: 4,
    };

    let start = Instant::now();
    let (mut alternating, mut extremal, mut candidates) = (0usize, 0usize, 0usize);
    for index in 0..count {
        let g = draw_alternating(cfg, ReplayToken::new(2013, index));
        let a = analyze_word(&g, p, SearchCfg::default());
        alternating += usize::from(a.alternating);
        extremal += usize::from(a.extremal);
        candidates += a.x_variables.len();
    }
    let elapsed = start.elapsed().as_secs_f64() * 1e3;

    println!("group=BS({m},{l}) words={count}");
    println!("alternating={alternating} extremal={extremal} x_variables={candidates}");
    println!("time_ms={elapsed:.3}");
}
