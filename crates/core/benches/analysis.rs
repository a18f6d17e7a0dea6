use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use wikilens_core::text::letter_tokens;
use wikilens_core::{Analyzer, KeywordConfig, Lexicon, TextMetrics, extract_keywords};

fn bench_analyze(c: &mut Criterion) {
    let small = std::fs::read_to_string("../../tests/fixtures/gato.txt").unwrap();
    let medium = std::fs::read_to_string("../../tests/fixtures/rust_en.txt").unwrap();
    let large = vec![medium.as_str(); 40].join("\n\n");
    let analyzer = Analyzer::new();

    let mut group = c.benchmark_group("analyze");

    group.bench_with_input(BenchmarkId::new("small", "11 words"), &small, |b, body| {
        b.iter(|| analyzer.analyze("Gato", black_box(body)))
    });

    group.bench_with_input(BenchmarkId::new("medium", "130 words"), &medium, |b, body| {
        b.iter(|| analyzer.analyze("Rust", black_box(body)))
    });

    group.bench_with_input(BenchmarkId::new("large", "5k words"), &large, |b, body| {
        b.iter(|| analyzer.analyze("Rust", black_box(body)))
    });

    group.finish();
}

fn bench_metrics(c: &mut Criterion) {
    let body = std::fs::read_to_string("../../tests/fixtures/rust_en.txt").unwrap();

    c.bench_function("metrics", |b| b.iter(|| TextMetrics::from_text(black_box(&body), 200)));
}

fn bench_tokenize(c: &mut Criterion) {
    let body = std::fs::read_to_string("../../tests/fixtures/rust_en.txt").unwrap();

    c.bench_function("letter_tokens", |b| b.iter(|| letter_tokens(black_box(&body))));
}

fn bench_keywords(c: &mut Criterion) {
    let body = std::fs::read_to_string("../../tests/fixtures/rust_en.txt").unwrap();
    let lexicon = Lexicon::builtin();
    let config = KeywordConfig::default();

    c.bench_function("keywords", |b| {
        b.iter(|| extract_keywords(black_box(&body), &lexicon.stopwords, black_box(&config)))
    });
}

criterion_group!(benches, bench_analyze, bench_metrics, bench_tokenize, bench_keywords);
criterion_main!(benches);
