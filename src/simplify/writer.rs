use crate::simplify::known_values::KnownValues;
use crate::simplify::types::Conflict;
use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::Value;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Write any serializable value as indented JSON.
///
/// Non-ASCII text is written literally.
pub fn write_pretty<W: Write, T: Serialize + ?Sized>(mut writer: W, value: &T) -> Result<()> {
    serde_json::to_writer_pretty(&mut writer, value).context("Failed to serialize JSON")?;
    writeln!(writer).context("Failed to write JSON")?;
    writer.flush().context("Failed to flush writer")
}

/// Writes simplified documents into an output directory, one file per document
pub struct DocumentWriter {
    output_dir: PathBuf,
    written: usize,
}

impl DocumentWriter {
    /// Create the output directory if needed
    pub fn new<P: AsRef<Path>>(output_dir: P) -> Result<Self> {
        std::fs::create_dir_all(&output_dir).context("Failed to create output directory")?;

        Ok(DocumentWriter {
            output_dir: output_dir.as_ref().to_path_buf(),
            written: 0,
        })
    }

    /// Write a document under `file_name` and return its path
    pub fn write_document(&mut self, file_name: &str, document: &Value) -> Result<PathBuf> {
        let path = self.output_dir.join(file_name);
        let file = std::fs::File::create(&path)
            .with_context(|| format!("Failed to create file: {}", path.display()))?;
        write_pretty(std::io::BufWriter::new(file), document)?;

        self.written += 1;
        Ok(path)
    }

    pub fn written(&self) -> usize {
        self.written
    }
}

/// Persist the known-values table
pub fn write_known_values<P: AsRef<Path>>(path: P, known_values: &KnownValues) -> Result<()> {
    let path = path.as_ref();
    let file = std::fs::File::create(path)
        .with_context(|| format!("Failed to create file: {}", path.display()))?;
    write_pretty(std::io::BufWriter::new(file), known_values)
}

/// Persist the conflicts of a run for manual review
pub fn write_conflicts<P: AsRef<Path>>(path: P, conflicts: &[Conflict]) -> Result<()> {
    let path = path.as_ref();
    let file = std::fs::File::create(path)
        .with_context(|| format!("Failed to create file: {}", path.display()))?;
    write_pretty(std::io::BufWriter::new(file), conflicts)
}
