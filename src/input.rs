//! Locating and parsing input documents

use anyhow::{bail, Context, Result};
use serde_json::Value;
use std::io::Read;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// List the `*.json` files directly inside `dir`, sorted by file name
pub fn discover_documents<P: AsRef<Path>>(dir: P) -> Result<Vec<PathBuf>> {
    let dir = dir.as_ref();
    let mut paths = Vec::new();

    for entry in WalkDir::new(dir).min_depth(1).max_depth(1).sort_by_file_name() {
        let entry = entry.with_context(|| format!("Failed to read directory: {}", dir.display()))?;
        let is_json = entry.path().extension().map(|ext| ext == "json").unwrap_or(false);
        if entry.file_type().is_file() && is_json {
            paths.push(entry.into_path());
        }
    }

    Ok(paths)
}

/// Parse one JSON document from a reader using SIMD-accelerated parsing.
///
/// Documents nested deeper than `max_depth` containers are rejected before parsing.
pub fn parse_document<R: Read>(mut reader: R, max_depth: usize) -> Result<Value> {
    let mut content = Vec::new();
    reader.read_to_end(&mut content).context("Failed to read document")?;

    check_nesting(&content, max_depth)?;
    simd_json::serde::from_slice(&mut content).context("Failed to parse JSON")
}

pub fn read_document<P: AsRef<Path>>(path: P, max_depth: usize) -> Result<Value> {
    let path = path.as_ref();
    let file = std::fs::File::open(path)
        .with_context(|| format!("Failed to open file: {}", path.display()))?;
    parse_document(std::io::BufReader::new(file), max_depth)
        .with_context(|| format!("Failed to load document: {}", path.display()))
}

/// Scan raw JSON bytes for container nesting deeper than `max_depth`
fn check_nesting(content: &[u8], max_depth: usize) -> Result<()> {
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for &byte in content {
        if in_string {
            match byte {
                _ if escaped => escaped = false,
                b'\\' => escaped = true,
                b'"' => in_string = false,
                _ => {}
            }
            continue;
        }

        match byte {
            b'"' => in_string = true,
            b'[' | b'{' => {
                depth += 1;
                if depth > max_depth {
                    bail!("Document nesting exceeds maximum depth of {}", max_depth);
                }
            }
            b']' | b'}' => depth = depth.saturating_sub(1),
            _ => {}
        }
    }

    Ok(())
}

/// File name of a document path, used to name its simplified counterpart
pub fn document_name(path: &Path) -> Result<String> {
    path.file_name()
        .and_then(|name| name.to_str())
        .map(str::to_string)
        .with_context(|| format!("Invalid document path: {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_document() {
        let value = parse_document(r#"{"Lemma": {"writtenForm": "나무"}}"#.as_bytes(), 128).unwrap();

        assert_eq!(value, json!({"Lemma": {"writtenForm": "나무"}}));
    }

    #[test]
    fn test_parse_document_rejects_garbage() {
        assert!(parse_document("{not json".as_bytes(), 128).is_err());
    }

    #[test]
    fn test_parse_document_rejects_deep_nesting() {
        let deep = format!("{}{}", "[".repeat(1000), "]".repeat(1000));

        let err = parse_document(deep.as_bytes(), 128).unwrap_err();
        assert!(err.to_string().contains("maximum depth of 128"));
    }

    #[test]
    fn test_nesting_limit_is_inclusive() {
        let nested = format!("{}{}", "[".repeat(3), "]".repeat(3));

        assert!(parse_document(nested.as_bytes(), 3).is_ok());
        assert!(parse_document(nested.as_bytes(), 2).is_err());
    }

    #[test]
    fn test_brackets_inside_strings_are_not_nesting() {
        let value = parse_document(r#"{"example": "[[[{{\"[\""}"#.as_bytes(), 1).unwrap();

        assert_eq!(value, json!({"example": "[[[{{\"[\""}));
    }

    #[test]
    fn test_discover_documents() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("b.json"), "{}").unwrap();
        std::fs::write(dir.path().join("a.json"), "{}").unwrap();
        std::fs::write(dir.path().join("notes.txt"), "").unwrap();
        std::fs::create_dir(dir.path().join("nested.json")).unwrap();

        let paths = discover_documents(dir.path()).unwrap();
        let names: Vec<String> = paths.iter().map(|p| document_name(p).unwrap()).collect();

        assert_eq!(names, vec!["a.json", "b.json"]);
    }
}
