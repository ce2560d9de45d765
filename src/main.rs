//! MT940 tag decoder CLI
//!
//! Command-line interface for decoding MT940 tag segments from CSV files.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- segments.csv > tags.csv
//! cargo run -- --mode strict segments.csv > tags.csv
//! cargo run -- --kinds 60,61,62 segments.csv > tags.csv
//! RUST_LOG=debug cargo run -- segments.csv > tags.csv
//! ```
//!
//! The program reads `tag,sub_id,value` rows from the input CSV file, decodes
//! each one through the tag factory, and writes the decoded fields to stdout.
//! Diagnostics go to stderr; the level is taken from `RUST_LOG` and defaults
//! to `warn`.
//!
//! # Decode Modes
//!
//! - **lenient**: Bad segments are logged and skipped (default)
//! - **strict**: The first bad segment aborts the run and nothing is written
//!
//! # Exit Codes
//!
//! - 0: Success
//! - 1: Error (file not found, file not readable, strict-mode decode failure, etc.)

use mt940_tags::cli;
use mt940_tags::strategy;
use std::process;
use tracing_subscriber::EnvFilter;

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let args = cli::parse_args();

    let strategy = strategy::create_strategy(args.mode, args.to_processing_config());

    let mut output = std::io::stdout();
    if let Err(e) = strategy.process(&args.input_file, &mut output) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
