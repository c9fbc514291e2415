//! Relational schema for the loaded dictionary

use rusqlite::Connection;

const DROP_TABLES: &str = "
    DROP TABLE IF EXISTS multimedia;
    DROP TABLE IF EXISTS equivalents;
    DROP TABLE IF EXISTS syntactic_patterns;
    DROP TABLE IF EXISTS sense_relations;
    DROP TABLE IF EXISTS sense_examples;
    DROP TABLE IF EXISTS senses;
    DROP TABLE IF EXISTS form_representations;
    DROP TABLE IF EXISTS word_forms;
    DROP TABLE IF EXISTS semantic_categories;
    DROP TABLE IF EXISTS variants;
    DROP TABLE IF EXISTS phrase_proverbs;
    DROP TABLE IF EXISTS lexical_entries;
";

const CREATE_TABLES: &str = "
    CREATE TABLE IF NOT EXISTS lexical_entries (
        id INTEGER PRIMARY KEY NOT NULL,
        part_of_speech TEXT NOT NULL,
        written_form TEXT NOT NULL,
        homonym_number INTEGER NOT NULL,
        lexical_unit TEXT NOT NULL,
        vocabulary_level TEXT
    );

    CREATE TABLE IF NOT EXISTS phrase_proverbs (
        pk INTEGER PRIMARY KEY AUTOINCREMENT,
        id INTEGER,
        written_form TEXT NOT NULL,
        lexical_unit TEXT NOT NULL
    );

    CREATE TABLE IF NOT EXISTS variants (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        lexical_entry_id INTEGER NOT NULL,
        variant TEXT NOT NULL
    );

    CREATE TABLE IF NOT EXISTS semantic_categories (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        lexical_entry_id INTEGER NOT NULL,
        base TEXT NOT NULL,
        detail TEXT NOT NULL
    );

    CREATE TABLE IF NOT EXISTS word_forms (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        lexical_entry_id INTEGER NOT NULL,
        pronunciation TEXT,
        sound TEXT,
        type_of_form TEXT NOT NULL,
        written_form TEXT
    );

    CREATE TABLE IF NOT EXISTS form_representations (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        word_form_id INTEGER NOT NULL REFERENCES word_forms(id) ON DELETE CASCADE,
        pronunciation TEXT,
        sound TEXT,
        type_of_form TEXT NOT NULL,
        written_form TEXT NOT NULL
    );

    CREATE TABLE IF NOT EXISTS senses (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        lexical_entry_id INTEGER NOT NULL,
        definition TEXT NOT NULL,
        annotation TEXT,
        syntactic_annotation TEXT
    );

    CREATE TABLE IF NOT EXISTS sense_examples (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        sense_id INTEGER NOT NULL REFERENCES senses(id) ON DELETE CASCADE,
        example TEXT NOT NULL,
        type_of_example TEXT NOT NULL
    );

    CREATE TABLE IF NOT EXISTS sense_relations (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        sense_id INTEGER NOT NULL REFERENCES senses(id) ON DELETE CASCADE,
        lexical_entry_id INTEGER NOT NULL,
        type_of_relation TEXT NOT NULL,
        lemma TEXT NOT NULL,
        homonym_number INTEGER NOT NULL
    );

    CREATE TABLE IF NOT EXISTS syntactic_patterns (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        sense_id INTEGER NOT NULL REFERENCES senses(id) ON DELETE CASCADE,
        pattern TEXT NOT NULL
    );

    CREATE TABLE IF NOT EXISTS equivalents (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        sense_id INTEGER NOT NULL REFERENCES senses(id) ON DELETE CASCADE,
        language TEXT NOT NULL,
        lemma TEXT NOT NULL,
        definition TEXT NOT NULL
    );

    CREATE TABLE IF NOT EXISTS multimedia (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        sense_id INTEGER NOT NULL REFERENCES senses(id) ON DELETE CASCADE,
        type TEXT NOT NULL,
        label TEXT NOT NULL,
        url TEXT NOT NULL
    );
";

/// Tables created by [`create`], in dependency order
pub const TABLES: &[&str] = &[
    "lexical_entries",
    "phrase_proverbs",
    "variants",
    "semantic_categories",
    "word_forms",
    "form_representations",
    "senses",
    "sense_examples",
    "sense_relations",
    "syntactic_patterns",
    "equivalents",
    "multimedia",
];

pub fn create(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch("PRAGMA foreign_keys = ON;")?;
    conn.execute_batch(CREATE_TABLES)
}

/// Drop every table and create them again empty
pub fn reset(conn: &Connection) -> rusqlite::Result<()> {
    tracing::debug!("dropping dictionary tables");
    conn.execute_batch(DROP_TABLES)?;
    create(conn)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table_count(conn: &Connection) -> i64 {
        conn.query_row(
            "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name NOT LIKE 'sqlite_%'",
            [],
            |row| row.get(0),
        )
        .unwrap()
    }

    #[test]
    fn test_create_all_tables() {
        let conn = Connection::open_in_memory().unwrap();
        create(&conn).unwrap();

        assert_eq!(table_count(&conn), TABLES.len() as i64);
    }

    #[test]
    fn test_reset_empties_tables() {
        let conn = Connection::open_in_memory().unwrap();
        create(&conn).unwrap();
        conn.execute("INSERT INTO variants (lexical_entry_id, variant) VALUES (1, 'a')", [])
            .unwrap();

        reset(&conn).unwrap();

        let rows: i64 = conn
            .query_row("SELECT COUNT(*) FROM variants", [], |row| row.get(0))
            .unwrap();
        assert_eq!(rows, 0);
        assert_eq!(table_count(&conn), TABLES.len() as i64);
    }
}
