//! Benchmark binary.
//!
//! Streams random bytes through the three matcher strategies and prints one
//! result line per strategy.

use std::process::ExitCode;

use clap::Parser;

use bitscan_bench::{run, BenchOptions, OsEntropy, DEFAULT_BATCH_SIZE, DEFAULT_TOTAL_BYTES};

#[derive(Parser, Debug)]
#[command(name = "bitscan-bench", version, about = "Benchmark bit-pattern matching strategies")]
struct Args {
    /// Total stream length processed, in bytes
    #[arg(long, default_value_t = DEFAULT_TOTAL_BYTES)]
    total_bytes: usize,

    /// Bytes per timed inner loop
    #[arg(long, default_value_t = DEFAULT_BATCH_SIZE)]
    batch_size: usize,
}

fn main() -> ExitCode {
    env_logger::init();

    let args = Args::parse();
    let options = BenchOptions::new()
        .with_total_bytes(args.total_bytes)
        .with_batch_size(args.batch_size);

    let mut source = OsEntropy::new();
    match run(&options, &mut source) {
        Ok(reports) => {
            for report in &reports {
                println!("{}", report);
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("benchmark failed: {}", e);
            ExitCode::FAILURE
        }
    }
}
