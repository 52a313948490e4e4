//! JSON-lines writer for records and chunks.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use serde::Serialize;

use crate::chunking::Chunk;
use crate::error::Result;
use crate::types::Record;

/// Write items as JSON lines, one encoded object per line.
///
/// Non-ASCII text is written as UTF-8, not escaped.
pub fn write_jsonl<W: Write, T: Serialize>(writer: &mut W, items: &[T]) -> Result<()> {
    for item in items {
        serde_json::to_writer(&mut *writer, item)?;
        writer.write_all(b"\n")?;
    }
    writer.flush()?;
    Ok(())
}

/// Save records to a JSON-lines file, creating parent directories.
pub fn save_records(records: &[Record], path: &Path) -> Result<()> {
    save_jsonl(records, path)
}

/// Save chunks to a JSON-lines file, creating parent directories.
pub fn save_chunks(chunks: &[Chunk], path: &Path) -> Result<()> {
    save_jsonl(chunks, path)
}

fn save_jsonl<T: Serialize>(items: &[T], path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    write_jsonl(&mut writer, items)?;

    tracing::debug!(path = %path.display(), lines = items.len(), "Wrote JSON lines");
    Ok(())
}
