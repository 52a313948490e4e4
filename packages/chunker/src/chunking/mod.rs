//! Chunking of classified documents for retrieval.
//!
//! Consecutive content records under the same Paragraph/Clause address are
//! merged into one [`Chunk`], prefixed with a context header built from the
//! enclosing Document, Section, Chapter and Paragraph.

mod aggregator;
mod types;

pub use aggregator::ChunkAggregator;
pub use types::{Chunk, ChunkMetadata};

use crate::classifier::LineClassifier;

/// Classify a whole document and aggregate it into chunks.
///
/// # Arguments
/// * `text` - Markdown text of the document
/// * `source_file` - File name recorded in each chunk's metadata
pub fn chunk_document(text: &str, source_file: &str) -> Vec<Chunk> {
    let mut classifier = LineClassifier::new();
    let mut aggregator = ChunkAggregator::new(source_file);
    let mut chunks = Vec::new();
    let mut line_count = 0usize;

    for line in text.lines() {
        line_count += 1;
        match classifier.classify(line) {
            Some(record) => chunks.extend(aggregator.push(record)),
            None => aggregator.push_gap(),
        }
    }

    if aggregator.clause_count() == 0 {
        let address = classifier.address();
        tracing::warn!(
            source_file,
            lines = line_count,
            document = %address.document,
            section = %address.section,
            chapter = %address.chapter,
            "No clauses found in document"
        );
    }

    chunks.extend(aggregator.finish());
    chunks
}
