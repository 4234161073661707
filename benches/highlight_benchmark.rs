//! Highlighter benchmark: colouring the typed prefix on every frame.
//!
//! The card re-classifies each visible line per frame, so the cost that
//! matters is a full payload pass.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use typewriter::payload::hero_script;
use typewriter::{Highlighter, ScriptLine};

fn classify_payload(c: &mut Criterion) {
    let script = hero_script();
    let highlighter = Highlighter::default();

    c.bench_function("classify_hero_payload", |b| {
        b.iter(|| {
            script
                .iter()
                .map(|line| highlighter.classify_prefix(black_box(line), line.len()).len())
                .sum::<usize>()
        });
    });
}

fn classify_by_line_length(c: &mut Criterion) {
    let mut group = c.benchmark_group("classify_by_line_length");
    let highlighter = Highlighter::default();

    for len in [16usize, 64, 256] {
        let body = "x".repeat(len.saturating_sub(20));
        let line = ScriptLine::new(format!("  name: \"{body}\", role,"));
        group.bench_with_input(BenchmarkId::from_parameter(len), &line, |b, line| {
            b.iter(|| highlighter.classify_prefix(black_box(line), line.len()));
        });
    }

    group.finish();
}

fn classify_many_keywords(c: &mut Criterion) {
    let script = hero_script();
    let secondary: Vec<String> = (0..64)
        .map(|i| format!("field{i}"))
        .chain(["name".to_string()])
        .collect();
    let highlighter = Highlighter::with_keywords(["const", "let", "var"], secondary);

    c.bench_function("classify_hero_payload_65_keywords", |b| {
        b.iter(|| {
            script
                .iter()
                .map(|line| highlighter.classify_prefix(black_box(line), line.len()).len())
                .sum::<usize>()
        });
    });
}

criterion_group!(benches, classify_payload, classify_by_line_length, classify_many_keywords);
criterion_main!(benches);
