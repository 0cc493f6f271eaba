//! Lexer benchmarks.
//!
//! Run with: `cargo bench --package esp-lex`

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use esp_lex::{KeywordTable, Lexer};

fn lexer_token_count(source: &str, keywords: &KeywordTable) -> usize {
    Lexer::new(source, keywords).filter(|t| t.is_ok()).count()
}

fn bench_lexer_simple(c: &mut Criterion) {
    let keywords = KeywordTable::new();
    let mut group = c.benchmark_group("lexer");

    let source = "var x = 42; function main() { var y = x + 1; return y; }";
    group.throughput(Throughput::Bytes(source.len() as u64));

    group.bench_function("simple_var", |b| {
        b.iter(|| lexer_token_count(black_box("var x = 42;"), &keywords))
    });

    group.bench_function("function_with_body", |b| {
        b.iter(|| lexer_token_count(black_box(source), &keywords))
    });

    group.finish();
}

fn bench_lexer_literals(c: &mut Criterion) {
    let keywords = KeywordTable::new();
    let mut group = c.benchmark_group("lexer_literals");

    let source = r#"
        var s = "hello\nworld!", t = 'single \x41 quoted';
        var n = [0x1F, 017, 3.14159, 6.02e23, .5];
        // a line comment
        /* a block
           comment */
        var o = { get: 1, "key": n[0] >>> 2 };
    "#
    .repeat(50);
    group.throughput(Throughput::Bytes(source.len() as u64));

    group.bench_function("mixed_literals", |b| {
        b.iter(|| lexer_token_count(black_box(&source), &keywords))
    });

    group.finish();
}

fn bench_keyword_table(c: &mut Criterion) {
    c.bench_function("keyword_table_build", |b| b.iter(KeywordTable::new));
}

criterion_group!(benches, bench_lexer_simple, bench_lexer_literals, bench_keyword_table);
criterion_main!(benches);
