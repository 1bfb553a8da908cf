//! Criterion benchmarks for turn graph construction and the cycle-sum search
//! on random alternating words (group "xvar").

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use bsturn::api::*;

fn bench_xvar(c: &mut Criterion) {
    let mut group = c.benchmark_group("xvar");
    group.sample_size(20);
    for &(m, l) in &[(2i64, 3i64), (3, 4)] {
        let p = GroupParams::new(m, l).expect("nonzero parameters");
        let words: Vec<Word> = (0..8)
            .map(|index| {
                draw_alternating(
                    WordCfg {
                        t_letters: 6,
                        max_a_run: 3,
                    },
                    ReplayToken::new(7, index),
                )
            })
            .collect();
        group.bench_with_input(
            BenchmarkId::new("turn_graph", format!("{m},{l}")),
            &words,
            |b, words| b.iter(|| words.iter().map(turn_graph).count()),
        );
        group.bench_with_input(
            BenchmarkId::new("x_variable_list", format!("{m},{l}")),
            &words,
            |b, words| {
                b.iter(|| {
                    words
                        .iter()
                        .map(|g| x_variable_list(&turn_graph(g), p, SearchCfg::default()).len())
                        .sum::<usize>()
                })
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_xvar);
criterion_main!(benches);
