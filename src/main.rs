//! # Extrinsic Call Data Formatter
//!
//! Converts a proof JSON file (ordered `proof` and `inputs` numeral
//! arrays) into one hex blob ready for submission as extrinsic call
//! data, printed in fixed-width lines.
//!
//! ## Usage
//!
//! ```bash
//! # Print the blob in 64-character lines
//! extrinsic-calldata proof.json
//!
//! # Wider output columns
//! LINE_WIDTH=128 extrinsic-calldata proof.json
//!
//! # Structured logs on stderr
//! JSON_LOGS=true LOG_LEVEL=debug extrinsic-calldata proof.json
//! ```
//!
//! On success the blob is the only stdout output; diagnostics and logs
//! go to stderr.

use std::io::Write;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::debug;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use extrinsic_calldata::config::Config;
use extrinsic_calldata::encoder;

/// Format a proof JSON file as extrinsic call data
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// Path to the proof JSON file ({"proof": [...], "inputs": [...]})
    proof_json: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = Config::from_env();
    init_logging(&config);

    debug!(
        path = %cli.proof_json.display(),
        line_width = config.line_width,
        "Converting proof document"
    );

    let blob = match encoder::convert_file(&cli.proof_json) {
        Ok(blob) => blob,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    };

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    encoder::emit(&blob, config.line_width, &mut out).context("writing call data to stdout")?;
    out.flush().context("flushing stdout")?;

    Ok(())
}

/// Initialize logging based on configuration
fn init_logging(config: &Config) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    if config.json_logs {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_level(true)
                    .with_writer(std::io::stderr),
            )
            .init();
    }
}
