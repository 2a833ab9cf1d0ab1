use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use fibonacci::{fibonacci, sequence, MAX_N};

fn fibonacci_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("fibonacci");
    for n in [1i64, 10, 23, MAX_N as i64] {
        group.bench_with_input(BenchmarkId::new("iterative", n), &n, |b, &n| {
            b.iter(|| fibonacci(black_box(n)).expect("index in range"))
        });
    }
    group.finish();
}

fn sequence_benchmark(c: &mut Criterion) {
    c.bench_function("sequence_full_range", |b| {
        b.iter(|| sequence(black_box(MAX_N)).expect("index in range"))
    });
}

criterion_group!(benches, fibonacci_benchmark, sequence_benchmark);
criterion_main!(benches);
