use std::io::{self, Write};

use anyhow::{Error, Result};
use clap::Parser;
use fibonacci::{fibonacci, read_index, MAX_N};
use serde::Serialize;
use tracing::{debug, info, Level};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Reads an index from standard input and prints that Fibonacci number",
    long_about = None
)]
struct Args {
    /// Print the result as a JSON object instead of a sentence
    #[arg(long)]
    json: bool,

    /// Enable verbose output on stderr
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Serialize)]
struct Output {
    n: u32,
    value: i32,
}

fn main() -> Result<(), Error> {
    let args = Args::parse();
    if args.verbose {
        tracing_subscriber::fmt()
            .with_max_level(Level::DEBUG)
            .with_writer(io::stderr)
            .init();
    }

    let mut stdout = io::stdout().lock();
    if !args.json {
        write!(stdout, "Enter the Fibonacci index to compute (0-{MAX_N}): ")?;
        stdout.flush()?;
    }

    let n = read_index(io::stdin().lock())?;
    debug!(n, "validated index");

    let value = fibonacci(i64::from(n))?;
    info!(n, value, "computed Fibonacci number");

    if args.json {
        writeln!(stdout, "{}", serde_json::to_string(&Output { n, value })?)?;
    } else {
        writeln!(stdout, "Fibonacci number {n} is: {value}")?;
    }

    Ok(())
}
