// Iterative vs naive recursive Fibonacci benchmark.
// The parallel cross-check fans the whole index range out over rayon.

use std::time::Instant;

use clap::Parser;
use fibonacci::{fibonacci_unchecked, sequence, MAX_N};
use rayon::prelude::*;

#[derive(Parser, Debug)]
#[command(author, version, about = "Fibonacci algorithm benchmark", long_about = None)]
struct Args {
    /// Largest index handed to the naive recursive algorithm
    #[arg(long, default_value_t = 32, value_parser = clap::value_parser!(u32).range(0..=MAX_N as i64))]
    max_recursive: u32,

    /// Timed iterations per row
    #[arg(short, long, default_value_t = 10)]
    iterations: u32,
}

fn fib_recursive(n: u32) -> i32 {
    if n <= 1 {
        return n as i32;
    }
    fib_recursive(n - 1) + fib_recursive(n - 2)
}

/// Indices that get a table row: the fixed samples under the recursive cap,
/// the cap itself and `MAX_N`, each once and in ascending order.
fn row_indices(max_recursive: u32) -> Vec<u32> {
    let mut indices: Vec<u32> = [10, 20, max_recursive, MAX_N]
        .into_iter()
        .filter(|&n| n <= max_recursive || n == MAX_N)
        .collect();
    indices.sort_unstable();
    indices.dedup();
    indices
}

fn benchmark(name: &str, n: u32, iterations: u32, f: impl Fn(u32) -> i32) {
    // Warmup
    let result = f(std::hint::black_box(n));

    let start = Instant::now();
    for _ in 0..iterations {
        std::hint::black_box(f(std::hint::black_box(n)));
    }
    let elapsed = start.elapsed();

    let total_ms = elapsed.as_secs_f64() * 1000.0;
    let avg_us = (elapsed.as_secs_f64() / iterations.max(1) as f64) * 1_000_000.0;

    println!(
        "{:<12} {:<6} {:<12} {:<12.3} {:<12.3}",
        name, n, result, avg_us, total_ms
    );
}

fn main() {
    let args = Args::parse();

    println!("{}", "=".repeat(60));
    println!("Fibonacci Benchmark ({} iterations per row)", args.iterations);
    println!("{}", "=".repeat(60));
    println!(
        "{:<12} {:<6} {:<12} {:<12} {:<12}",
        "Algorithm", "n", "Result", "Avg (µs)", "Total (ms)"
    );
    println!("{}", "-".repeat(60));

    for n in row_indices(args.max_recursive) {
        benchmark("iterative", n, args.iterations, fibonacci_unchecked);
        if n <= args.max_recursive {
            benchmark("recursive", n, args.iterations, fib_recursive);
        }
    }

    println!("{}", "-".repeat(60));

    // Fan-out/Fan-in: every index up to the recursive cap checked in parallel
    let start = Instant::now();
    let expected = match sequence(args.max_recursive) {
        Ok(values) => values,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };
    let mismatches: usize = (0..=args.max_recursive)
        .into_par_iter()
        .filter(|&n| fib_recursive(n) != expected[n as usize])
        .count();
    let elapsed = start.elapsed();

    println!("Cross-checked indices: 0..={}", args.max_recursive);
    println!("Mismatches: {}", mismatches);
    println!("Time: {:.2}ms", elapsed.as_secs_f64() * 1000.0);
    println!("{}", "=".repeat(60));

    if mismatches != 0 {
        std::process::exit(1);
    }
}
