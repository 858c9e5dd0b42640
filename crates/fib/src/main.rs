//! fib CLI
//!
//! Prints `fib(42) is <value>`. Takes no arguments beyond `--help` and
//! `--version`; diagnostics go to stderr under `RUST_LOG`.

use clap::Parser as ClapParser;
use std::process;
use std::time::Instant;
use tracing::debug;
use tracing_subscriber::filter::LevelFilter;

#[derive(ClapParser)]
#[command(name = "fib")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Compute fib(42) by naive recursion", long_about = None)]
struct Cli {}

fn main() {
    let _cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::builder()
                .with_default_directive(LevelFilter::WARN.into())
                .from_env_lossy(),
        )
        .with_writer(std::io::stderr)
        .init();

    debug!(n = fib::N, "evaluating");
    let start = Instant::now();

    match fib::fib(fib::N) {
        Ok(value) => {
            debug!(value, elapsed_ms = start.elapsed().as_millis() as u64, "done");
            println!("{}", fib::render(fib::N, value));
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}
