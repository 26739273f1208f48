//! Nomentia transform CLI
//!
//! # Usage
//!
//! ```bash
//! cargo run -- bank-statement statement.xml --values values.csv --conversions conversions.csv > lines.json
//! cargo run -- ar-transactions export.xml > matching.xml
//! cargo run -- ar-transactions --envelope request.json > response.json
//! ```
//!
//! Value tables may also be given through `NOMENTIA_VALUES_FILE` and
//! `NOMENTIA_CONVERSIONS_FILE`. Logs go to stderr and are filtered with
//! `RUST_LOG` (default `info`).
//!
//! # Exit Codes
//!
//! - 0: Success
//! - 1: Error (unreadable input, invalid document, missing setting, etc.)
//! - 2: The input was valid but produced no records

use nomentia_transform::cli;
use nomentia_transform::io::load_value_tables;
use nomentia_transform::strategy;
use nomentia_transform::types::TransformOutcome;
use std::io::Write;
use std::process;
use std::sync::Arc;
use tracing::error;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const EXIT_ERROR: i32 = 1;
const EXIT_NO_RECORDS: i32 = 2;

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(true)
                .with_writer(std::io::stderr),
        )
        .init();
}

fn main() {
    init_tracing();
    let args = cli::parse_args();

    let values = match load_value_tables(
        args.values_file.as_deref(),
        args.conversions_file.as_deref(),
    ) {
        Ok(values) => Arc::new(values),
        Err(e) => {
            error!("Failed to load value tables: {}", e);
            process::exit(EXIT_ERROR);
        }
    };

    let input = match std::fs::read(&args.input_file) {
        Ok(input) => input,
        Err(e) => {
            error!("Failed to read '{}': {}", args.input_file.display(), e);
            process::exit(EXIT_ERROR);
        }
    };

    let strategy = strategy::create_strategy(args.kind, values, args.envelope);

    let mut output = std::io::stdout().lock();
    let result = strategy.process(&input, &mut output);
    if let Err(e) = output.flush() {
        error!("Failed to flush output: {}", e);
        process::exit(EXIT_ERROR);
    }

    match result {
        Ok(TransformOutcome::Completed(_)) => {}
        Ok(TransformOutcome::NoRecords) => process::exit(EXIT_NO_RECORDS),
        Err(e) => {
            error!("Error: {}", e);
            process::exit(EXIT_ERROR);
        }
    }
}
