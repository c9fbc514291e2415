use crate::simplify::known_values::KnownValues;
use serde::Serialize;
use std::collections::HashSet;
use std::fmt;

/// Keys whose string values are never recorded in the known-values table.
///
/// These carry free text (forms, definitions, examples, urls) rather than
/// vocabulary codes.
pub const DEFAULT_EXEMPT_KEYS: &[&str] = &[
    "sound",
    "label",
    "id",
    "url",
    "writtenForm",
    "variant",
    "lemma",
    "definition",
    "example",
    "syntacticPattern",
    "pronunciation",
    "origin",
    "annotation",
];

/// Deepest container nesting accepted in a document
pub const DEFAULT_MAX_DEPTH: usize = 128;

/// Configuration for the simplification pass
#[derive(Debug, Clone)]
pub struct SimplifyConfig {
    /// Keys excluded from value observation
    pub exempt_keys: HashSet<String>,

    /// Keys whose list values are merged into a single mapping when possible
    pub merge_keys: HashSet<String>,

    /// Key of the nested feature mapping that gets inlined into its parent
    pub feature_key: String,

    /// Name of the root node in diagnostic paths
    pub root_path: String,

    /// Maximum container nesting to simplify (deeper subtrees are left as they are)
    pub max_depth: usize,
}

impl SimplifyConfig {
    /// Add extra exempt keys on top of the current set
    pub fn with_exempt_keys<I, S>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.exempt_keys.extend(keys.into_iter().map(Into::into));
        self
    }

    pub fn is_exempt(&self, key: &str) -> bool {
        self.exempt_keys.contains(key)
    }

    pub fn is_merge_key(&self, key: &str) -> bool {
        self.merge_keys.contains(key)
    }
}

impl Default for SimplifyConfig {
    fn default() -> Self {
        SimplifyConfig {
            exempt_keys: DEFAULT_EXEMPT_KEYS.iter().map(|k| k.to_string()).collect(),
            merge_keys: ["feat", "Lemma"].iter().map(|k| k.to_string()).collect(),
            feature_key: String::from("feat"),
            root_path: String::from("root"),
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

/// Why an att/val pair was left in place
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ConflictKind {
    /// The mapping already has a field named by `att`
    KeyCollision { key: String },
    /// `att` is not a string, so it cannot name a field
    NonStringAtt,
}

/// A recoverable structure conflict found while simplifying
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Conflict {
    pub path: String,
    #[serde(flatten)]
    pub kind: ConflictKind,
}

impl fmt::Display for Conflict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ConflictKind::KeyCollision { key } => {
                write!(f, "key collision at {}: key '{}' already exists", self.path, key)
            }
            ConflictKind::NonStringAtt => {
                write!(f, "non-string att at {}", self.path)
            }
        }
    }
}

/// State accumulated across the documents of one simplification run.
///
/// Each worker owns its own session; sessions are combined with
/// [`SimplifySession::merge`] once the workers are done.
#[derive(Debug, Clone, Default)]
pub struct SimplifySession {
    pub known_values: KnownValues,
    pub conflicts: Vec<Conflict>,
    pub documents: usize,
}

impl SimplifySession {
    pub fn new() -> Self {
        Self::default()
    }

    /// True if any conflict was recorded during the run
    pub fn any_error(&self) -> bool {
        !self.conflicts.is_empty()
    }

    pub fn record_conflict(&mut self, conflict: Conflict) {
        self.conflicts.push(conflict);
    }

    /// Fold another session into this one
    pub fn merge(&mut self, other: SimplifySession) {
        self.known_values.merge(other.known_values);
        self.conflicts.extend(other.conflicts);
        self.documents += other.documents;
    }
}
