use crate::simplify::types::{Conflict, ConflictKind, SimplifyConfig, SimplifySession};
use serde_json::map::Entry;
use serde_json::{Map, Value};
use std::collections::HashSet;

const ATT: &str = "att";
const VAL: &str = "val";

/// Flattens the att/val and feature-list encodings of a lexical resource
pub struct Simplifier {
    config: SimplifyConfig,
}

impl Simplifier {
    pub fn new(config: SimplifyConfig) -> Self {
        Simplifier { config }
    }

    pub fn config(&self) -> &SimplifyConfig {
        &self.config
    }

    /// Simplify one document, recording conflicts and observed values in `session`
    pub fn simplify(&self, value: Value, session: &mut SimplifySession) -> Value {
        session.documents += 1;
        let root = self.config.root_path.clone();
        self.simplify_value(value, &root, 0, session)
    }

    fn simplify_value(&self, value: Value, path: &str, depth: usize, session: &mut SimplifySession) -> Value {
        if depth > self.config.max_depth {
            tracing::warn!(path = %path, max_depth = self.config.max_depth, "subtree too deep, left as is");
            return value;
        }

        match value {
            Value::Array(items) => Value::Array(
                items
                    .into_iter()
                    .enumerate()
                    .map(|(idx, item)| {
                        self.simplify_value(item, &format!("{}[{}]", path, idx), depth + 1, session)
                    })
                    .collect(),
            ),
            Value::Object(obj) => Value::Object(self.simplify_object(obj, path, depth, session)),
            scalar => scalar,
        }
    }

    fn simplify_object(
        &self,
        obj: Map<String, Value>,
        path: &str,
        depth: usize,
        session: &mut SimplifySession,
    ) -> Map<String, Value> {
        let mut simplified = Map::new();
        let has_pair = obj.contains_key(ATT) && obj.contains_key(VAL);

        if has_pair {
            self.collapse_att_val(&obj, path, &mut simplified, session);
        }

        for (key, value) in obj.into_iter() {
            if has_pair && (key == ATT || key == VAL) {
                continue;
            }

            let mut value = self.simplify_value(value, &format!("{}.{}", path, key), depth + 1, session);
            if self.config.is_merge_key(&key) {
                if let Value::Array(items) = value {
                    value = merge_feature_list(items);
                }
            }
            simplified.insert(key, value);
        }

        let simplified = self.inline_features(simplified);
        self.observe_values(&simplified, session);
        simplified
    }

    /// Turn `{"att": name, "val": v}` into `{name: v}` unless `name` is already taken
    fn collapse_att_val(
        &self,
        obj: &Map<String, Value>,
        path: &str,
        simplified: &mut Map<String, Value>,
        session: &mut SimplifySession,
    ) {
        let (att, val) = match (obj.get(ATT), obj.get(VAL)) {
            (Some(att), Some(val)) => (att, val),
            _ => return,
        };

        let kind = match att {
            Value::String(name) if !obj.contains_key(name) => {
                simplified.insert(name.clone(), val.clone());
                return;
            }
            Value::String(name) => ConflictKind::KeyCollision { key: name.clone() },
            _ => ConflictKind::NonStringAtt,
        };

        let conflict = Conflict { path: path.to_string(), kind };
        tracing::error!(path = %conflict.path, "{}", conflict);
        session.record_conflict(conflict);

        // Keep the original pair
        simplified.insert(ATT.to_string(), att.clone());
        simplified.insert(VAL.to_string(), val.clone());
    }

    /// Hoist the nested feature mapping into its parent when no key collides
    fn inline_features(&self, obj: Map<String, Value>) -> Map<String, Value> {
        let feature_key = self.config.feature_key.as_str();
        let collides = match obj.get(feature_key) {
            Some(Value::Object(features)) => features.keys().any(|k| obj.contains_key(k)),
            _ => return obj,
        };
        if collides {
            return obj;
        }

        let mut inlined = Map::new();
        let mut features = Map::new();
        for (key, value) in obj.into_iter() {
            match value {
                Value::Object(f) if key == feature_key => features = f,
                value => {
                    inlined.insert(key, value);
                }
            }
        }
        inlined.extend(features);
        inlined
    }

    fn observe_values(&self, obj: &Map<String, Value>, session: &mut SimplifySession) {
        for (key, value) in obj.iter() {
            if let Value::String(s) = value {
                if !self.config.is_exempt(key) {
                    session.known_values.observe(key, s);
                }
            }
        }
    }
}

/// Merge a list of single-feature mappings into one mapping.
///
/// The list is returned untouched when some key appears in every mapping
/// element. Repeated keys accumulate into a list in encounter order.
pub fn merge_feature_list(items: Vec<Value>) -> Value {
    if has_shared_key(&items) {
        return Value::Array(items);
    }

    let mut merged = Map::new();
    for item in items.into_iter() {
        let Value::Object(fields) = item else {
            continue;
        };
        for (key, value) in fields.into_iter() {
            match merged.entry(key) {
                Entry::Vacant(entry) => {
                    entry.insert(value);
                }
                Entry::Occupied(mut entry) => match entry.get_mut() {
                    Value::Array(existing) => existing.push(value),
                    existing => {
                        let first = existing.take();
                        *existing = Value::Array(vec![first, value]);
                    }
                },
            }
        }
    }
    Value::Object(merged)
}

/// True if at least one key is present in every mapping element
fn has_shared_key(items: &[Value]) -> bool {
    let mut shared: Option<HashSet<&str>> = None;

    for fields in items.iter().filter_map(Value::as_object) {
        let keys: HashSet<&str> = fields.keys().map(String::as_str).collect();
        shared = match shared {
            None => Some(keys),
            Some(acc) => Some(acc.intersection(&keys).copied().collect()),
        };
    }

    shared.map(|keys| !keys.is_empty()).unwrap_or(false)
}
