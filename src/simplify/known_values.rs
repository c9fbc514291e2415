//! Observation table of the distinct string values seen per key.
//!
//! Filled while simplifying and written once at the end of a run, so the
//! vocabulary actually present in the data can be audited against the
//! loader's translation tables.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KnownValues {
    values: BTreeMap<String, BTreeSet<String>>,
}

impl KnownValues {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one string value seen under `key`
    pub fn observe(&mut self, key: &str, value: &str) {
        if let Some(seen) = self.values.get_mut(key) {
            if !seen.contains(value) {
                seen.insert(value.to_string());
            }
            return;
        }
        self.values
            .insert(key.to_string(), BTreeSet::from([value.to_string()]));
    }

    pub fn get(&self, key: &str) -> Option<&BTreeSet<String>> {
        self.values.get(key)
    }

    pub fn contains(&self, key: &str, value: &str) -> bool {
        self.values
            .get(key)
            .map(|seen| seen.contains(value))
            .unwrap_or(false)
    }

    pub fn merge(&mut self, other: KnownValues) {
        for (key, seen) in other.values {
            self.values.entry(key).or_default().extend(seen);
        }
    }

    /// Number of keys with at least one observed value
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &BTreeSet<String>)> {
        self.values.iter()
    }
}
