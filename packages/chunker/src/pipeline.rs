//! File pipeline that ties the classifier, aggregator and writer together.

use std::fs;
use std::path::{Path, PathBuf};

use crate::chunking::chunk_document;
use crate::classifier::LineClassifier;
use crate::config::{chunked_output_path, validate_markdown_path};
use crate::error::Result;
use crate::output::save_chunks;
use crate::types::Record;

/// Outcome of converting one Markdown file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileReport {
    /// Input Markdown file.
    pub input: PathBuf,

    /// Written chunk file, `None` when the document produced no chunks.
    pub output: Option<PathBuf>,

    /// Number of chunks written.
    pub chunks: usize,
}

/// Convert a Markdown file to a `.chunked.jsonl` file.
///
/// # Arguments
/// * `md_path` - Markdown document to convert
/// * `output_dir` - Directory for the chunk file (created if missing)
///
/// # Returns
/// A `FileReport`; no file is written when the document has no chunks.
pub fn chunk_file(md_path: &Path, output_dir: &Path) -> Result<FileReport> {
    validate_markdown_path(md_path)?;

    let text = fs::read_to_string(md_path)?;
    let source_file = md_path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();

    tracing::debug!(path = %md_path.display(), "Chunking document");
    let chunks = chunk_document(&text, &source_file);

    if chunks.is_empty() {
        tracing::warn!(
            path = %md_path.display(),
            "No chunks found, nothing written. Expected clauses like '(1.2.3) Текст' or '1.2.3. Текст'"
        );
        return Ok(FileReport {
            input: md_path.to_path_buf(),
            output: None,
            chunks: 0,
        });
    }

    fs::create_dir_all(output_dir)?;
    let output_path = chunked_output_path(md_path, output_dir);
    save_chunks(&chunks, &output_path)?;

    tracing::info!(
        path = %output_path.display(),
        chunks = chunks.len(),
        "Saved chunks"
    );

    Ok(FileReport {
        input: md_path.to_path_buf(),
        output: Some(output_path),
        chunks: chunks.len(),
    })
}

/// Classify every line of a Markdown file.
pub fn classify_file(md_path: &Path) -> Result<Vec<Record>> {
    validate_markdown_path(md_path)?;

    let text = fs::read_to_string(md_path)?;
    let records = LineClassifier::new().classify_lines(text.lines());

    tracing::debug!(
        path = %md_path.display(),
        records = records.len(),
        "Classified document"
    );
    Ok(records)
}
