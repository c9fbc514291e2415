//! kiln-load: Load simplified lexical resource documents into SQLite
//!
//! Usage:
//!   # Rebuild lexicon.db from simplified/*.json
//!   kiln-load simplified
//!
//!   # Keep going past entries with unknown vocabulary codes
//!   kiln-load simplified --db lexicon.db --skip-unknown

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

use anyhow::{Context, Result};
use clap::Parser;
use kiln::load::{LoadConfig, Loader, StaticVocabulary, UnknownCodePolicy};
use rusqlite::Connection;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "kiln-load")]
#[command(about = "Load simplified lexical resource JSON into SQLite", long_about = None)]
struct Args {
    /// Directory containing the simplified *.json documents
    #[arg(value_name = "INPUT_DIR")]
    input_dir: PathBuf,

    /// SQLite database file
    #[arg(long, default_value = "lexicon.db")]
    db: PathBuf,

    /// Skip entries with unknown vocabulary codes instead of failing
    #[arg(long)]
    skip_unknown: bool,

    /// Keep existing tables and rows instead of recreating them
    #[arg(long)]
    keep_existing: bool,
}

fn main() -> Result<()> {
    init_tracing();
    let args = Args::parse();

    let config = LoadConfig {
        on_unknown: if args.skip_unknown {
            UnknownCodePolicy::Skip
        } else {
            UnknownCodePolicy::Fail
        },
        reset_schema: !args.keep_existing,
    };

    let mut conn = Connection::open(&args.db)
        .with_context(|| format!("Failed to open database: {}", args.db.display()))?;
    let loader = Loader::new(StaticVocabulary, config);
    loader.prepare(&conn).context("Failed to create tables")?;

    let stats = kiln::load_dir(&args.input_dir, &mut conn, &loader)?;

    tracing::info!(
        entries = stats.entries,
        phrases = stats.phrases,
        senses = stats.senses,
        examples = stats.examples,
        skipped = stats.skipped,
        "load finished"
    );
    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env("KILN_LOG").unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
