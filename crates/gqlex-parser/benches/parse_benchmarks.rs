mod fixtures;

use criterion::Criterion;
use criterion::black_box;
use criterion::criterion_group;
use criterion::criterion_main;
use gqlex_parser::Lexer;
use gqlex_parser::parse;

fn lex_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("lex");

    group.bench_function("simple_query", |b| {
        b.iter(|| black_box(Lexer::new(fixtures::SIMPLE_QUERY).tokenize()))
    });

    group.bench_function("complex_query", |b| {
        b.iter(|| black_box(Lexer::new(fixtures::COMPLEX_QUERY).tokenize()))
    });

    group.finish();
}

fn parse_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");

    group.bench_function("simple_query", |b| {
        b.iter(|| black_box(parse(fixtures::SIMPLE_QUERY)))
    });

    group.bench_function("complex_query", |b| {
        b.iter(|| black_box(parse(fixtures::COMPLEX_QUERY)))
    });

    let nested = fixtures::deeply_nested_query(48);
    group.bench_function("deeply_nested", |b| {
        b.iter(|| black_box(parse(&nested)))
    });

    let many = fixtures::many_operations(128);
    group.bench_function("many_operations", |b| {
        b.iter(|| black_box(parse(&many)))
    });

    group.finish();
}

criterion_group!(benches, lex_benchmarks, parse_benchmarks);
criterion_main!(benches);
