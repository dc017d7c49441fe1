use climb_lexer::{strip_whitespace, Lexer};
use climb_parser::{evaluate, evaluate_tokens};
use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use std::time::Duration;

const REFERENCE: &str = "-5 + 3 * -(2 ^ 4) / (7 % 3) - -(-8 * 2) + 10 / -2";

fn long_chain(terms: usize) -> String {
    let ops = ['+', '-', '*', '^', '%'];
    let mut expr = String::from("1");
    for i in 0..terms {
        expr.push(ops[i % ops.len()]);
        expr.push_str(&((i % 97) + 1).to_string());
    }
    expr
}

fn bench_evaluate(c: &mut Criterion) {
    let mut group = c.benchmark_group("evaluate");
    group.measurement_time(Duration::from_secs(5));
    group.warm_up_time(Duration::from_secs(1));

    group.bench_function("reference_expression", |b| {
        b.iter(|| evaluate(black_box(REFERENCE)))
    });

    let chain = long_chain(1_000);
    group.bench_function("long_chain", |b| b.iter(|| evaluate(black_box(&chain))));

    let nested = format!("{}7{}", "(".repeat(200), ")".repeat(200));
    group.bench_function("nested_parens", |b| {
        b.iter(|| evaluate(black_box(&nested)))
    });

    group.finish();
}

fn bench_stages(c: &mut Criterion) {
    let chain = long_chain(1_000);
    let mut group = c.benchmark_group("stages");

    group.bench_function("tokenize", |b| {
        b.iter_batched(
            || strip_whitespace(&chain),
            |stripped| Lexer::new(&stripped).tokenize(),
            BatchSize::SmallInput,
        )
    });

    let stripped = strip_whitespace(&chain);
    let tokens = Lexer::new(&stripped).tokenize().unwrap_or_default();
    group.bench_function("climb", |b| {
        b.iter(|| evaluate_tokens(black_box(&tokens)))
    });

    group.finish();
}

criterion_group!(benches, bench_evaluate, bench_stages);
criterion_main!(benches);
