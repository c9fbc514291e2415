//! # Kiln - Lexical Resource Toolkit
//!
//! Turns the nested JSON export of a Korean learner's dictionary into a
//! relational SQLite database.
//!
//! ## Modules
//!
//! - **simplify**: Flatten the att/val and feature-list encodings of each document
//! - **load**: Insert simplified documents into SQLite with vocabulary translation
//! - **input**: Find and parse the JSON documents of a directory
//!
//! ## Quick Start
//!
//! ### Simplification
//!
//! ```rust
//! use kiln::simplify::{Simplifier, SimplifyConfig, SimplifySession};
//! use serde_json::json;
//!
//! let simplifier = Simplifier::new(SimplifyConfig::default());
//! let mut session = SimplifySession::new();
//!
//! let simplified = simplifier.simplify(
//!     json!({"att": "partOfSpeech", "val": "명사", "feat": [{"a": 1}, {"b": 2}]}),
//!     &mut session,
//! );
//!
//! assert_eq!(simplified, json!({"partOfSpeech": "명사", "a": 1, "b": 2}));
//! assert!(!session.any_error());
//! ```
//!
//! ### Loading
//!
//! ```rust
//! use kiln::load::{LoadConfig, Loader, StaticVocabulary};
//! use serde_json::json;
//!
//! # fn main() -> anyhow::Result<()> {
//! let loader = Loader::new(StaticVocabulary, LoadConfig::default());
//! let mut conn = rusqlite::Connection::open_in_memory()?;
//! loader.prepare(&conn)?;
//!
//! let document = json!({"LexicalResource": {"Lexicon": {"LexicalEntry": [
//!     {"id": "1", "Lemma": {"writtenForm": "나무"}, "partOfSpeech": "명사"}
//! ]}}});
//! let stats = loader.load_document(&mut conn, &document)?;
//! assert_eq!(stats.entries, 1);
//! # Ok(())
//! # }
//! ```

use anyhow::{Context, Result};
use rusqlite::Connection;
use std::path::Path;

pub mod input;
pub mod load;
pub mod simplify;

// Re-export commonly used types for convenience
pub use load::{LoadConfig, LoadError, LoadStats, Loader, StaticVocabulary, Vocabulary};
pub use simplify::{KnownValues, Simplifier, SimplifyConfig, SimplifySession};

/// Simplify every `*.json` document of `input_dir` into `output_dir`.
///
/// The returned session holds the known values and any conflicts of the run.
pub fn simplify_dir<P: AsRef<Path>, Q: AsRef<Path>>(
    input_dir: P,
    output_dir: Q,
    config: SimplifyConfig,
) -> Result<SimplifySession> {
    let max_depth = config.max_depth;
    let simplifier = Simplifier::new(config);
    let mut writer = simplify::DocumentWriter::new(output_dir)?;
    let mut session = SimplifySession::new();

    for path in input::discover_documents(input_dir)? {
        let name = input::document_name(&path)?;
        let document = input::read_document(&path, max_depth)?;

        let conflicts_before = session.conflicts.len();
        let simplified = simplifier.simplify(document, &mut session);
        writer.write_document(&name, &simplified)?;

        tracing::debug!(
            document = %name,
            conflicts = session.conflicts.len() - conflicts_before,
            "simplified document"
        );
    }

    Ok(session)
}

/// Load every `*.json` document of `input_dir` into `conn`
pub fn load_dir<P: AsRef<Path>, V: Vocabulary>(
    input_dir: P,
    conn: &mut Connection,
    loader: &Loader<V>,
) -> Result<LoadStats> {
    let mut stats = LoadStats::default();

    for path in input::discover_documents(input_dir)? {
        let name = input::document_name(&path)?;
        let document = input::read_document(&path, simplify::DEFAULT_MAX_DEPTH)?;

        tracing::info!(document = %name, "loading document");
        let document_stats = loader
            .load_document(conn, &document)
            .with_context(|| format!("Failed to load document: {}", name))?;
        stats.merge(document_stats);
    }

    Ok(stats)
}
