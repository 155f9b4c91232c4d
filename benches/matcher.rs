//! Matcher benchmarks.
//!
//! The matcher runs for every token of every analyzed command line, so its
//! per-call cost bounds the whole pipeline.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use shellmend::{best_match, correct_sentence, REGISTRY};

fn bench_best_match(c: &mut Criterion) {
    let roots = REGISTRY.roots();

    c.bench_function("best_match/root_typo", |b| {
        b.iter(|| best_match(black_box("dokcer"), roots.iter().copied()));
    });

    c.bench_function("best_match/exact_member", |b| {
        b.iter(|| best_match(black_box("git"), roots.iter().copied()));
    });

    c.bench_function("best_match/no_match", |b| {
        b.iter(|| best_match(black_box("zzqqxx"), roots.iter().copied()));
    });
}

fn bench_sentence(c: &mut Criterion) {
    c.bench_function("correct_sentence/two_typos", |b| {
        b.iter(|| correct_sentence(black_box("gti sttaus")));
    });

    c.bench_function("correct_sentence/clean_command", |b| {
        b.iter(|| correct_sentence(black_box("git status")));
    });
}

criterion_group!(benches, bench_best_match, bench_sentence);
criterion_main!(benches);
