use crate::load::schema;
use crate::load::vocabulary::{Category, UnknownCode, Vocabulary};
use once_cell::sync::Lazy;
use regex::Regex;
use rusqlite::{params, Connection};
use serde_json::Value;
use thiserror::Error;

/// `base > detail`, split at the first separator
static SEMANTIC_CATEGORY_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)^\s*([^>]*?)\s*>\s*(.*?)\s*$").unwrap()
});

const DIALOGUE: &str = "대화";

#[derive(Debug, Error)]
pub enum LoadError {
    #[error(transparent)]
    UnknownCode(#[from] UnknownCode),

    #[error("invalid semantic category format: {0:?}")]
    MalformedCategory(String),

    #[error("lexical entry has no {0}")]
    MissingField(&'static str),

    #[error("field {field} has non-integer value {value}")]
    InvalidField { field: &'static str, value: String },

    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),
}

impl LoadError {
    /// Errors caused by one malformed record rather than by the store
    pub fn is_record_error(&self) -> bool {
        !matches!(self, LoadError::Database(_))
    }
}

/// What to do with an entry whose vocabulary or structure is invalid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnknownCodePolicy {
    /// Abort and roll back the whole document
    #[default]
    Fail,
    /// Roll back only the offending entry and keep going
    Skip,
}

/// Configuration for loading simplified documents
#[derive(Debug, Clone)]
pub struct LoadConfig {
    pub on_unknown: UnknownCodePolicy,

    /// Drop and recreate all tables before loading
    pub reset_schema: bool,
}

impl Default for LoadConfig {
    fn default() -> Self {
        LoadConfig {
            on_unknown: UnknownCodePolicy::Fail,
            reset_schema: true,
        }
    }
}

/// Row counts for one or more loaded documents
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadStats {
    pub entries: usize,
    pub phrases: usize,
    pub senses: usize,
    pub examples: usize,
    pub skipped: usize,
}

impl LoadStats {
    pub fn merge(&mut self, other: LoadStats) {
        self.entries += other.entries;
        self.phrases += other.phrases;
        self.senses += other.senses;
        self.examples += other.examples;
        self.skipped += other.skipped;
    }
}

/// Inserts the entries of simplified documents into the relational store
pub struct Loader<V: Vocabulary> {
    vocabulary: V,
    config: LoadConfig,
}

impl<V: Vocabulary> Loader<V> {
    pub fn new(vocabulary: V, config: LoadConfig) -> Self {
        Loader { vocabulary, config }
    }

    /// Create the tables, dropping existing ones when configured to
    pub fn prepare(&self, conn: &Connection) -> Result<(), LoadError> {
        if self.config.reset_schema {
            schema::reset(conn)?;
        } else {
            schema::create(conn)?;
        }
        Ok(())
    }

    /// Load every lexical entry of one document in a single transaction
    pub fn load_document(&self, conn: &mut Connection, document: &Value) -> Result<LoadStats, LoadError> {
        let mut stats = LoadStats::default();
        let mut tx = conn.transaction()?;

        for (idx, entry) in lexical_entries(document).into_iter().enumerate() {
            let savepoint = tx.savepoint()?;
            let mut entry_stats = LoadStats::default();

            match self.insert_entry(&savepoint, entry, &mut entry_stats) {
                Ok(()) => {
                    savepoint.commit()?;
                    stats.merge(entry_stats);
                }
                Err(err) if err.is_record_error() && self.config.on_unknown == UnknownCodePolicy::Skip => {
                    tracing::warn!(entry = idx, error = %err, "skipping lexical entry");
                    stats.skipped += 1;
                }
                Err(err) => return Err(err),
            }
        }

        tx.commit()?;
        Ok(stats)
    }

    fn insert_entry(&self, conn: &Connection, entry: &Value, stats: &mut LoadStats) -> Result<(), LoadError> {
        let lemma = entry
            .get("Lemma")
            .filter(|lemma| lemma.is_object())
            .ok_or(LoadError::MissingField("Lemma"))?;
        let written_form = str_field(lemma, "writtenForm").unwrap_or("");
        let lexical_unit = str_field(entry, "lexicalUnit").unwrap_or("");
        let id = integer_field(entry, "id")?;

        let entry_id = match str_field(entry, "partOfSpeech").unwrap_or("") {
            "" => {
                conn.execute(
                    "INSERT INTO phrase_proverbs (id, written_form, lexical_unit) VALUES (?1, ?2, ?3)",
                    params![id, written_form, lexical_unit],
                )?;
                stats.phrases += 1;
                id.unwrap_or_else(|| conn.last_insert_rowid())
            }
            code => {
                let part_of_speech = self.vocabulary.lookup(Category::PartOfSpeech, code)?;
                let vocabulary_level = match str_field(entry, "vocabularyLevel") {
                    Some(level) if !level.is_empty() => {
                        Some(self.vocabulary.lookup(Category::VocabularyLevel, level)?)
                    }
                    _ => None,
                };
                let homonym_number = match integer_field(entry, "homonym_number")? {
                    Some(n) => n,
                    None => integer_field(entry, "homonymNumber")?.unwrap_or(0),
                };

                conn.execute(
                    "INSERT INTO lexical_entries
                        (id, part_of_speech, written_form, homonym_number, lexical_unit, vocabulary_level)
                     VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
                    params![id, part_of_speech, written_form, homonym_number, lexical_unit, vocabulary_level],
                )?;
                stats.entries += 1;
                conn.last_insert_rowid()
            }
        };

        let variants = strings(lemma.get("variant"))
            .into_iter()
            .flat_map(|list| list.split(','))
            .map(str::trim)
            .filter(|variant| !variant.is_empty());
        for variant in std::iter::once(written_form).chain(variants) {
            conn.execute(
                "INSERT INTO variants (lexical_entry_id, variant) VALUES (?1, ?2)",
                params![entry_id, variant],
            )?;
        }

        for category in strings(entry.get("semanticCategory")) {
            self.insert_semantic_category(conn, entry_id, category)?;
        }

        for form in records(entry, "WordForm") {
            self.insert_word_form(conn, entry_id, form)?;
        }

        for sense in records(entry, "Sense") {
            self.insert_sense(conn, entry_id, sense, stats)?;
        }

        Ok(())
    }

    fn insert_semantic_category(&self, conn: &Connection, entry_id: i64, category: &str) -> Result<(), LoadError> {
        let (base, detail) = split_semantic_category(category)?;
        let base = self.vocabulary.lookup(Category::SemanticCategory, base)?;

        conn.execute(
            "INSERT INTO semantic_categories (lexical_entry_id, base, detail) VALUES (?1, ?2, ?3)",
            params![entry_id, base, detail],
        )?;
        Ok(())
    }

    fn insert_word_form(&self, conn: &Connection, entry_id: i64, form: &Value) -> Result<(), LoadError> {
        let type_of_form = str_field(form, "type").unwrap_or("");
        let written_form = str_field(form, "writtenForm");

        let mut word_form_id = None;
        for (pronunciation, sound) in pronunciations(form) {
            conn.execute(
                "INSERT INTO word_forms (lexical_entry_id, pronunciation, sound, type_of_form, written_form)
                 VALUES (?1, ?2, ?3, ?4, ?5)",
                params![entry_id, pronunciation, sound, type_of_form, written_form],
            )?;
            word_form_id = Some(conn.last_insert_rowid());
        }
        let Some(word_form_id) = word_form_id else {
            return Ok(());
        };

        for representation in records(form, "FormRepresentation") {
            let type_of_form = str_field(representation, "type").unwrap_or("");
            let written_form = str_field(representation, "writtenForm").unwrap_or("");

            for (pronunciation, sound) in pronunciations(representation) {
                conn.execute(
                    "INSERT INTO form_representations
                        (word_form_id, pronunciation, sound, type_of_form, written_form)
                     VALUES (?1, ?2, ?3, ?4, ?5)",
                    params![word_form_id, pronunciation, sound, type_of_form, written_form],
                )?;
            }
        }
        Ok(())
    }

    fn insert_sense(
        &self,
        conn: &Connection,
        entry_id: i64,
        sense: &Value,
        stats: &mut LoadStats,
    ) -> Result<(), LoadError> {
        conn.execute(
            "INSERT INTO senses (lexical_entry_id, definition, annotation, syntactic_annotation)
             VALUES (?1, ?2, ?3, ?4)",
            params![
                entry_id,
                str_field(sense, "definition").unwrap_or(""),
                str_field(sense, "annotation"),
                str_field(sense, "syntacticAnnotation"),
            ],
        )?;
        let sense_id = conn.last_insert_rowid();
        stats.senses += 1;

        for example in records(sense, "SenseExample") {
            let type_code = str_field(example, "type").unwrap_or("");
            let Some(text) = example_text(example.get("example"), type_code == DIALOGUE) else {
                continue;
            };
            let type_of_example = self.vocabulary.lookup(Category::ExampleType, type_code)?;

            conn.execute(
                "INSERT INTO sense_examples (sense_id, example, type_of_example) VALUES (?1, ?2, ?3)",
                params![sense_id, text, type_of_example],
            )?;
            stats.examples += 1;
        }

        for relation in records(sense, "SenseRelation") {
            let type_of_relation =
                self.vocabulary.lookup(Category::RelationType, str_field(relation, "type").unwrap_or(""))?;

            conn.execute(
                "INSERT INTO sense_relations
                    (sense_id, lexical_entry_id, type_of_relation, lemma, homonym_number)
                 VALUES (?1, ?2, ?3, ?4, ?5)",
                params![
                    sense_id,
                    integer_field(relation, "id")?.unwrap_or(0),
                    type_of_relation,
                    str_field(relation, "lemma").unwrap_or(""),
                    integer_field(relation, "homonymNumber")?.unwrap_or(0),
                ],
            )?;
        }

        for pattern in strings(sense.get("syntacticPattern")) {
            conn.execute(
                "INSERT INTO syntactic_patterns (sense_id, pattern) VALUES (?1, ?2)",
                params![sense_id, pattern],
            )?;
        }

        for equivalent in records(sense, "Equivalent") {
            let language =
                self.vocabulary.lookup(Category::Language, str_field(equivalent, "language").unwrap_or(""))?;

            conn.execute(
                "INSERT INTO equivalents (sense_id, language, lemma, definition) VALUES (?1, ?2, ?3, ?4)",
                params![
                    sense_id,
                    language,
                    str_field(equivalent, "lemma").unwrap_or(""),
                    str_field(equivalent, "definition").unwrap_or(""),
                ],
            )?;
        }

        for item in records(sense, "Multimedia") {
            conn.execute(
                "INSERT INTO multimedia (sense_id, type, label, url) VALUES (?1, ?2, ?3, ?4)",
                params![
                    sense_id,
                    str_field(item, "type").unwrap_or(""),
                    str_field(item, "label").unwrap_or(""),
                    str_field(item, "url").unwrap_or(""),
                ],
            )?;
        }

        Ok(())
    }
}

/// Split a `base > detail` semantic category
pub fn split_semantic_category(category: &str) -> Result<(&str, &str), LoadError> {
    let captures = SEMANTIC_CATEGORY_REGEX
        .captures(category)
        .ok_or_else(|| LoadError::MalformedCategory(category.to_string()))?;

    match (captures.get(1), captures.get(2)) {
        (Some(base), Some(detail)) => Ok((base.as_str(), detail.as_str())),
        _ => Err(LoadError::MalformedCategory(category.to_string())),
    }
}

/// Render an example; `None` for the placeholder examples made of a single dot
fn example_text(value: Option<&Value>, dialogue: bool) -> Option<String> {
    match value {
        Some(Value::String(text)) if text == "." => None,
        Some(Value::String(text)) if dialogue && !text.starts_with('"') => Some(format!("\"{}\"", text)),
        Some(Value::String(text)) => Some(text.clone()),
        // A list of examples is a dialogue, one turn per line
        Some(Value::Array(turns)) => Some(
            turns
                .iter()
                .map(|turn| format!("\"{}\"", turn.as_str().unwrap_or_default()))
                .collect::<Vec<_>>()
                .join("\n"),
        ),
        _ => Some(String::new()),
    }
}

/// Pair each pronunciation with its sound file.
///
/// Always yields at least one pair; an empty pronunciation list counts as none.
fn pronunciations(form: &Value) -> Vec<(Option<&str>, Option<&str>)> {
    let sound = form.get("sound");
    match form.get("pronunciation") {
        Some(Value::Array(items)) if !items.is_empty() => items
            .iter()
            .enumerate()
            .map(|(idx, pronunciation)| {
                let sound = match sound {
                    Some(Value::Array(sounds)) => sounds.get(idx).and_then(Value::as_str),
                    other => other.and_then(Value::as_str),
                };
                (pronunciation.as_str(), sound)
            })
            .collect(),
        other => vec![(other.and_then(Value::as_str), sound.and_then(Value::as_str))],
    }
}

fn lexical_entries(document: &Value) -> Vec<&Value> {
    let lexicons = document
        .get("LexicalResource")
        .and_then(|resource| resource.get("Lexicon"))
        .map(as_list)
        .unwrap_or_default();

    lexicons
        .into_iter()
        .filter_map(|lexicon| lexicon.get("LexicalEntry"))
        .flat_map(as_list)
        .filter(|entry| entry.is_object())
        .collect()
}

/// A value that may hold one record or a list of them
fn as_list(value: &Value) -> Vec<&Value> {
    match value {
        Value::Array(items) => items.iter().collect(),
        other => vec![other],
    }
}

fn records<'a>(value: &'a Value, key: &str) -> Vec<&'a Value> {
    value
        .get(key)
        .map(as_list)
        .unwrap_or_default()
        .into_iter()
        .filter(|record| record.is_object())
        .collect()
}

fn strings(value: Option<&Value>) -> Vec<&str> {
    match value {
        Some(Value::String(s)) => vec![s.as_str()],
        Some(Value::Array(items)) => items.iter().filter_map(Value::as_str).collect(),
        _ => vec![],
    }
}

fn str_field<'a>(value: &'a Value, key: &str) -> Option<&'a str> {
    value.get(key).and_then(Value::as_str)
}

/// Integer field given either as a JSON number or a numeric string
fn integer_field(value: &Value, field: &'static str) -> Result<Option<i64>, LoadError> {
    let Some(raw) = value.get(field) else {
        return Ok(None);
    };
    let parsed = match raw {
        Value::Null => return Ok(None),
        Value::Number(n) => n.as_i64(),
        Value::String(text) => text.trim().parse().ok(),
        _ => None,
    };

    parsed.map(Some).ok_or_else(|| LoadError::InvalidField {
        field,
        value: raw.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::load::vocabulary::StaticVocabulary;
    use serde_json::json;

    fn store() -> (Loader<StaticVocabulary>, Connection) {
        let loader = Loader::new(StaticVocabulary, LoadConfig::default());
        let conn = Connection::open_in_memory().unwrap();
        loader.prepare(&conn).unwrap();
        (loader, conn)
    }

    fn count(conn: &Connection, table: &str) -> i64 {
        conn.query_row(&format!("SELECT COUNT(*) FROM {}", table), [], |row| row.get(0))
            .unwrap()
    }

    fn document(entries: Value) -> Value {
        json!({"LexicalResource": {"Lexicon": {"language": "한국어", "LexicalEntry": entries}}})
    }

    fn verb_entry() -> Value {
        json!({
            "id": "100",
            "Lemma": {"writtenForm": "가다", "variant": "가ᄃᆞ,"},
            "homonym_number": "0",
            "lexicalUnit": "단어",
            "partOfSpeech": "동사",
            "vocabularyLevel": "초급",
            "semanticCategory": "삶 > 삶의 행위",
            "WordForm": {
                "type": "발음",
                "pronunciation": ["가다", "가따"],
                "sound": ["a.wav", "b.wav"],
                "FormRepresentation": {"type": "활용", "writtenForm": "가서", "pronunciation": "가서"}
            },
            "Sense": [{
                "id": "1",
                "definition": "움직이다.",
                "SenseExample": [
                    {"type": "구", "example": "학교에 가다"},
                    {"type": "대화", "example": ["어디 가?", "학교 가."]},
                    {"type": "문장", "example": "."}
                ],
                "SenseRelation": {"type": "반대말", "lemma": "오다", "id": "200", "homonymNumber": 0},
                "syntacticPattern": ["1이 2에 가다"],
                "Equivalent": [
                    {"language": "영어", "lemma": "go", "definition": "to move"},
                    {"language": "일본어", "lemma": "行く", "definition": "移動する"}
                ],
                "Multimedia": {"type": "사진", "label": "가다", "url": "http://example.com/a.jpg"}
            }]
        })
    }

    #[test]
    fn test_load_full_entry() {
        let (loader, mut conn) = store();
        let stats = loader.load_document(&mut conn, &document(json!([verb_entry()]))).unwrap();

        assert_eq!(stats.entries, 1);
        assert_eq!(stats.senses, 1);
        assert_eq!(stats.examples, 2);
        assert_eq!(stats.skipped, 0);

        let (pos, level, homonym): (String, String, i64) = conn
            .query_row(
                "SELECT part_of_speech, vocabulary_level, homonym_number FROM lexical_entries WHERE id = 100",
                [],
                |row| Ok((row.get(0)?, row.get(1)?, row.get(2)?)),
            )
            .unwrap();
        assert_eq!((pos.as_str(), level.as_str(), homonym), ("verb", "beginner", 0));

        assert_eq!(count(&conn, "variants"), 2);
        assert_eq!(count(&conn, "word_forms"), 2);
        assert_eq!(count(&conn, "form_representations"), 1);
        assert_eq!(count(&conn, "sense_relations"), 1);
        assert_eq!(count(&conn, "syntactic_patterns"), 1);
        assert_eq!(count(&conn, "equivalents"), 2);
        assert_eq!(count(&conn, "multimedia"), 1);

        let (base, detail): (String, String) = conn
            .query_row("SELECT base, detail FROM semantic_categories", [], |row| {
                Ok((row.get(0)?, row.get(1)?))
            })
            .unwrap();
        assert_eq!((base.as_str(), detail.as_str()), ("life", "삶의 행위"));

        let dialogue: String = conn
            .query_row(
                "SELECT example FROM sense_examples WHERE type_of_example = 'dialogue'",
                [],
                |row| row.get(0),
            )
            .unwrap();
        assert_eq!(dialogue, "\"어디 가?\"\n\"학교 가.\"");

        let sound: String = conn
            .query_row("SELECT sound FROM word_forms WHERE pronunciation = '가따'", [], |row| row.get(0))
            .unwrap();
        assert_eq!(sound, "b.wav");
    }

    #[test]
    fn test_empty_pronunciation_list_keeps_representation() {
        let (loader, mut conn) = store();
        let mut entry = verb_entry();
        entry["WordForm"] = json!({
            "type": "활용",
            "pronunciation": [],
            "FormRepresentation": {"type": "활용", "writtenForm": "가서", "pronunciation": "가서"}
        });

        loader.load_document(&mut conn, &document(entry)).unwrap();

        assert_eq!(count(&conn, "word_forms"), 1);
        let (pronunciation, word_form_id): (Option<String>, i64) = conn
            .query_row("SELECT pronunciation, id FROM word_forms", [], |row| {
                Ok((row.get(0)?, row.get(1)?))
            })
            .unwrap();
        assert_eq!(pronunciation, None);

        let representation_parent: i64 = conn
            .query_row("SELECT word_form_id FROM form_representations", [], |row| row.get(0))
            .unwrap();
        assert_eq!(representation_parent, word_form_id);
    }

    #[test]
    fn test_pronunciations_of_empty_list() {
        let form = json!({"pronunciation": [], "sound": "a.wav"});
        assert_eq!(pronunciations(&form), vec![(None, Some("a.wav"))]);
    }

    #[test]
    fn test_entry_without_part_of_speech_is_a_phrase() {
        let (loader, mut conn) = store();
        let entry = json!({"id": 7, "Lemma": {"writtenForm": "발 없는 말이 천 리 간다"}, "lexicalUnit": "속담"});

        let stats = loader.load_document(&mut conn, &document(json!(entry))).unwrap();

        assert_eq!(stats.phrases, 1);
        assert_eq!(count(&conn, "phrase_proverbs"), 1);
        assert_eq!(count(&conn, "lexical_entries"), 0);
    }

    #[test]
    fn test_unknown_code_rolls_back_document() {
        let (loader, mut conn) = store();
        let mut bad = verb_entry();
        bad["id"] = json!("101");
        bad["partOfSpeech"] = json!("외계어");

        let err = loader
            .load_document(&mut conn, &document(json!([verb_entry(), bad])))
            .unwrap_err();

        assert!(matches!(
            err,
            LoadError::UnknownCode(UnknownCode { category: Category::PartOfSpeech, .. })
        ));
        assert_eq!(count(&conn, "lexical_entries"), 0);
        assert_eq!(count(&conn, "senses"), 0);
    }

    #[test]
    fn test_skip_policy_drops_only_bad_entry() {
        let loader = Loader::new(
            StaticVocabulary,
            LoadConfig {
                on_unknown: UnknownCodePolicy::Skip,
                ..LoadConfig::default()
            },
        );
        let mut conn = Connection::open_in_memory().unwrap();
        loader.prepare(&conn).unwrap();

        let mut bad = verb_entry();
        bad["id"] = json!("101");
        bad["Sense"][0]["Equivalent"][0]["language"] = json!("클링온어");

        let stats = loader
            .load_document(&mut conn, &document(json!([verb_entry(), bad])))
            .unwrap();

        assert_eq!(stats.entries, 1);
        assert_eq!(stats.skipped, 1);
        assert_eq!(count(&conn, "lexical_entries"), 1);
        assert_eq!(count(&conn, "senses"), 1);
        assert_eq!(count(&conn, "variants"), 2);
    }

    #[test]
    fn test_malformed_semantic_category() {
        let (loader, mut conn) = store();
        let mut entry = verb_entry();
        entry["semanticCategory"] = json!("삶");

        let err = loader.load_document(&mut conn, &document(entry)).unwrap_err();

        assert!(matches!(err, LoadError::MalformedCategory(ref c) if c == "삶"));
    }

    #[test]
    fn test_missing_lemma() {
        let (loader, mut conn) = store();
        let err = loader
            .load_document(&mut conn, &document(json!({"id": "1", "partOfSpeech": "명사"})))
            .unwrap_err();

        assert!(matches!(err, LoadError::MissingField("Lemma")));
    }

    #[test]
    fn test_invalid_id() {
        let (loader, mut conn) = store();
        let err = loader
            .load_document(
                &mut conn,
                &document(json!({"id": "abc", "Lemma": {"writtenForm": "가"}, "partOfSpeech": "명사"})),
            )
            .unwrap_err();

        assert!(matches!(err, LoadError::InvalidField { field: "id", .. }));
    }

    #[test]
    fn test_document_without_entries() {
        let (loader, mut conn) = store();
        let stats = loader.load_document(&mut conn, &json!({"other": 1})).unwrap();

        assert_eq!(stats, LoadStats::default());
    }

    #[test]
    fn test_custom_vocabulary() {
        struct Passthrough;

        impl Vocabulary for Passthrough {
            fn lookup(&self, _category: Category, code: &str) -> Result<&str, UnknownCode> {
                Ok(if code.is_empty() { "unknown" } else { "known" })
            }
        }

        let loader = Loader::new(Passthrough, LoadConfig::default());
        let mut conn = Connection::open_in_memory().unwrap();
        loader.prepare(&conn).unwrap();

        let entry = json!({"id": "1", "Lemma": {"writtenForm": "가"}, "partOfSpeech": "anything"});
        loader.load_document(&mut conn, &document(entry)).unwrap();

        let pos: String = conn
            .query_row("SELECT part_of_speech FROM lexical_entries", [], |row| row.get(0))
            .unwrap();
        assert_eq!(pos, "known");
    }

    #[test]
    fn test_split_semantic_category() {
        assert_eq!(
            split_semantic_category(" 사회 생활 >  인간관계 ").unwrap(),
            ("사회 생활", "인간관계")
        );
        assert_eq!(split_semantic_category("a > b > c").unwrap(), ("a", "b > c"));
        assert!(split_semantic_category("no separator").is_err());
    }

    #[test]
    fn test_example_text() {
        assert_eq!(example_text(Some(&json!(".")), false), None);
        assert_eq!(example_text(Some(&json!("안녕")), true).unwrap(), "\"안녕\"");
        assert_eq!(example_text(Some(&json!("\"안녕\"")), true).unwrap(), "\"안녕\"");
        assert_eq!(example_text(Some(&json!("안녕")), false).unwrap(), "안녕");
    }
}
