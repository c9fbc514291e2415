//! kiln-simplify: Flatten the att/val encoding of lexical resource documents
//!
//! Usage:
//!   # Simplify data/*.json into simplified/ and write known_values.json
//!   kiln-simplify data
//!
//!   # Choose the output locations
//!   kiln-simplify data --output-dir out --known-values out/known_values.json
//!
//!   # Don't audit extra free-text keys
//!   kiln-simplify data --exempt note,comment
//!
//! Exits with status 2 when key collisions were found; the collisions are
//! logged, written to the conflicts report and the affected att/val pairs are
//! kept as they were.

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

use anyhow::Result;
use clap::Parser;
use kiln::simplify::{write_conflicts, write_known_values, SimplifyConfig};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "kiln-simplify")]
#[command(about = "Flatten att/val encoded lexical resource JSON", long_about = None)]
struct Args {
    /// Directory containing the raw *.json documents
    #[arg(value_name = "INPUT_DIR")]
    input_dir: PathBuf,

    /// Directory for the simplified documents
    #[arg(long, short = 'o', default_value = "simplified")]
    output_dir: PathBuf,

    /// Where to write the observed values per key
    #[arg(long, default_value = "known_values.json")]
    known_values: PathBuf,

    /// Where to write the att/val collisions found, if any
    #[arg(long, default_value = "conflicts.json")]
    conflicts: PathBuf,

    /// Maximum container nesting accepted in a document (default: 128)
    #[arg(long)]
    max_depth: Option<usize>,

    /// Comma-separated extra keys whose values are not recorded
    #[arg(long)]
    exempt: Option<String>,
}

fn main() -> Result<ExitCode> {
    init_tracing();
    let args = Args::parse();

    let mut config = SimplifyConfig::default();
    if let Some(depth) = args.max_depth {
        config.max_depth = depth;
    }
    if let Some(keys) = args.exempt {
        config = config.with_exempt_keys(
            keys.split(',')
                .map(str::trim)
                .filter(|key| !key.is_empty()),
        );
    }

    let session = kiln::simplify_dir(&args.input_dir, &args.output_dir, config)?;
    write_known_values(&args.known_values, &session.known_values)?;

    if session.any_error() {
        write_conflicts(&args.conflicts, &session.conflicts)?;
        tracing::warn!(
            documents = session.documents,
            conflicts = session.conflicts.len(),
            "simplification finished with key collisions, review the log"
        );
        return Ok(ExitCode::from(2));
    }

    tracing::info!(documents = session.documents, "All JSON files simplified successfully.");
    Ok(ExitCode::SUCCESS)
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env("KILN_LOG").unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
