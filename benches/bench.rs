//! Criterion benchmarks for the shortword tokenizer.
//!
//! Covers the full analyzer on realistic short phrases as well as the
//! individual parsing stages:
//! - Phrase analysis, single and batched
//! - Bracket matching and grouping
//! - Special-token extraction

use std::hint::black_box;

use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use shortword::analysis::analyzer::{Analyzer, ShortWordAnalyzer};
use shortword::analysis::token_filter::StopFilter;
use shortword::analysis::tokenizer::special::SpecialTokenExtractor;
use shortword::analysis::tokenizer::{GraphOptions, graph_parentheticals, match_parenthetical};

/// Generate test phrases for benchmarking.
fn generate_test_phrases(count: usize) -> Vec<String> {
    let templates = [
        "Unit {} - The Old Mill",
        "AB-{} (Rear) & Lot 7",
        "Project {} w/ J.R.R. Tolkien",
        "Invoice {}: $1,250.00 due 3/14/2024",
        "Warehouse {} 2,000 sf, 40 x 60 bay",
        "Smith & Sons {} [Phase II] {Annex}",
        "{} Main St; Suite 4B",
        "AT&T Tower {} (Level (3))",
    ];

    (0..count)
        .map(|i| templates[i % templates.len()].replace("{}", &(i * 7 % 1000).to_string()))
        .collect()
}

/// Benchmark full phrase analysis.
fn bench_phrase_analysis(c: &mut Criterion) {
    let mut group = c.benchmark_group("phrase_analysis");

    let analyzer = ShortWordAnalyzer::new();
    let stop_analyzer = ShortWordAnalyzer::with_stop_filter(Some(StopFilter::new()));
    let phrases = generate_test_phrases(1000);

    group.bench_function("analyze_single_phrase", |b| {
        b.iter(|| {
            let result = analyzer.analyze(black_box(&phrases[0]));
            black_box(result)
        })
    });

    group.throughput(Throughput::Elements(100));
    group.bench_function("analyze_batch_phrases", |b| {
        b.iter(|| {
            for phrase in phrases.iter().take(100) {
                let result = analyzer.analyze(black_box(phrase));
                let _ = black_box(result);
            }
        })
    });

    group.bench_function("analyze_batch_with_stop_words", |b| {
        b.iter(|| {
            for phrase in phrases.iter().take(100) {
                let result = stop_analyzer.analyze(black_box(phrase));
                let _ = black_box(result);
            }
        })
    });

    group.finish();
}

/// Benchmark the bracket stages.
fn bench_brackets(c: &mut Criterion) {
    let mut group = c.benchmark_group("brackets");

    let nested = "abc{def[ghi(jkl)lmn]opq}rst (uvw) [xyz";
    let deep = format!("{}core{}", "(".repeat(40), ")".repeat(40));

    group.bench_function("match_parenthetical", |b| {
        b.iter(|| black_box(match_parenthetical(black_box(nested))))
    });

    group.bench_function("graph_parentheticals", |b| {
        b.iter(|| black_box(graph_parentheticals(black_box(nested), GraphOptions::default())))
    });

    group.bench_function("graph_parentheticals_deep", |b| {
        b.iter(|| black_box(graph_parentheticals(black_box(deep.as_str()), GraphOptions::default())))
    });

    group.finish();
}

/// Benchmark special-token extraction.
fn bench_special_tokens(c: &mut Criterion) {
    let mut group = c.benchmark_group("special_tokens");

    let extractor = SpecialTokenExtractor::new();
    let text = "paid $1,250.00 on 3/14/2024 for 2,000 sf at 40 x 60 per j.r.r. 3.5 units";

    group.bench_function("segments", |b| {
        b.iter(|| black_box(extractor.segments(black_box(text))))
    });

    group.finish();
}

criterion_group!(benches, bench_phrase_analysis, bench_brackets, bench_special_tokens);
criterion_main!(benches);
