//! JSON simplification - flatten the att/val encoding of a lexical resource
//!
//! Collapses `{"att": name, "val": v}` pairs into direct keys, merges lists of
//! single-feature mappings under `feat`/`Lemma`, and inlines nested `feat`
//! mappings into their parent. Every pass also records the distinct string
//! values seen per key so the vocabulary in the data can be audited.

pub mod types;
pub mod simplifier;
pub mod known_values;
pub mod writer;

pub use types::{Conflict, ConflictKind, SimplifyConfig, SimplifySession, DEFAULT_EXEMPT_KEYS, DEFAULT_MAX_DEPTH};
pub use simplifier::{merge_feature_list, Simplifier};
pub use known_values::KnownValues;
pub use writer::{write_conflicts, write_known_values, write_pretty, DocumentWriter};
