//! Loading simplified documents into SQLite
//!
//! Walks the lexical entries of a simplified document and inserts them into
//! relational tables, translating vocabulary codes through a [`Vocabulary`].
//! Unknown codes fail the whole document unless the skip policy is chosen.

pub mod vocabulary;
pub mod schema;
pub mod loader;

pub use vocabulary::{Category, StaticVocabulary, UnknownCode, Vocabulary};
pub use loader::{split_semantic_category, LoadConfig, LoadError, LoadStats, Loader, UnknownCodePolicy};
