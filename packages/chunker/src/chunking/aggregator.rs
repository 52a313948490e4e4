//! Aggregation of classified records into retrieval chunks.

use super::types::Chunk;
use crate::types::{HierarchicalAddress, Record};

/// Lines collected under one address.
#[derive(Debug)]
struct Block {
    address: HierarchicalAddress,
    lines: Vec<String>,
}

/// Groups consecutive content records sharing an address into chunks.
///
/// A chunk is flushed when a header record arrives, when a content record
/// carries a different address (a new clause), and at the end of input.
#[derive(Debug)]
pub struct ChunkAggregator {
    source_file: String,
    open: Option<Block>,
    clause_count: usize,
}

impl ChunkAggregator {
    /// Create an aggregator for one source document.
    #[must_use]
    pub fn new(source_file: impl Into<String>) -> Self {
        Self {
            source_file: source_file.into(),
            open: None,
            clause_count: 0,
        }
    }

    /// Feed the next record; returns the chunk it completed, if any.
    pub fn push(&mut self, record: Record) -> Option<Chunk> {
        if record.is_header {
            return self.flush();
        }

        if let Some(block) = self.open.as_mut() {
            if block.address == record.address {
                block.lines.push(record.content);
                return None;
            }
        }

        let completed = self.flush();
        if !record.address.clause.is_empty() {
            self.clause_count += 1;
        }
        self.open = Some(Block {
            address: record.address,
            lines: vec![record.content],
        });
        completed
    }

    /// Record a line that produced no record.
    ///
    /// Keeps paragraph breaks inside an open chunk.
    pub fn push_gap(&mut self) {
        if let Some(block) = self.open.as_mut() {
            block.lines.push(String::new());
        }
    }

    /// Flush the open chunk at end of input.
    #[must_use]
    pub fn finish(mut self) -> Option<Chunk> {
        self.flush()
    }

    /// Number of clause blocks opened so far.
    #[must_use]
    pub fn clause_count(&self) -> usize {
        self.clause_count
    }

    fn flush(&mut self) -> Option<Chunk> {
        let block = self.open.take()?;
        Chunk::from_block(&block.address, &block.lines, self.source_file.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Level;
    use pretty_assertions::assert_eq;

    fn address(paragraph: &str, clause: &str) -> HierarchicalAddress {
        let mut address = HierarchicalAddress::new();
        address.set(Level::Document, "ПУЭ");
        address.set(Level::Paragraph, paragraph);
        address.set(Level::Clause, clause);
        address
    }

    fn body(paragraph: &str, clause: &str, text: &str) -> Record {
        Record::body(&address(paragraph, clause), text)
    }

    #[test]
    fn test_consecutive_content_is_grouped() {
        let mut aggregator = ChunkAggregator::new("1.1.md");
        assert!(aggregator.push(body("П", "1.1.1", "(1.1.1) Первая строка")).is_none());
        assert!(aggregator.push(body("П", "1.1.1", "вторая строка")).is_none());

        let chunk = aggregator.finish().unwrap();
        assert_eq!(chunk.metadata.address.clause, "1.1.1");
        assert!(chunk.content.ends_with("(1.1.1) Первая строка\nвторая строка"));
    }

    #[test]
    fn test_new_clause_flushes() {
        let mut aggregator = ChunkAggregator::new("1.1.md");
        aggregator.push(body("П", "1.1.1", "(1.1.1) Первый"));

        let chunk = aggregator.push(body("П", "1.1.2", "(1.1.2) Второй")).unwrap();
        assert_eq!(chunk.metadata.address.clause, "1.1.1");
        assert_eq!(aggregator.clause_count(), 2);

        let last = aggregator.finish().unwrap();
        assert_eq!(last.metadata.address.clause, "1.1.2");
    }

    #[test]
    fn test_header_flushes() {
        let mut aggregator = ChunkAggregator::new("1.1.md");
        aggregator.push(body("П", "1.1.1", "(1.1.1) Первый"));

        let header = Record::header(&address("Новый", ""));
        let chunk = aggregator.push(header).unwrap();
        assert_eq!(chunk.metadata.address.paragraph, "П");
        assert!(aggregator.finish().is_none());
    }

    #[test]
    fn test_paragraph_content_without_clause() {
        let mut aggregator = ChunkAggregator::new("1.1.md");
        aggregator.push(body("Общие указания", "", "Текст абзаца"));

        let chunk = aggregator.finish().unwrap();
        assert_eq!(chunk.metadata.address.paragraph, "Общие указания");
        assert_eq!(chunk.metadata.address.clause, "");
    }

    #[test]
    fn test_clause_count_ignores_paragraph_blocks() {
        let mut aggregator = ChunkAggregator::new("1.1.md");
        aggregator.push(body("П", "", "Текст абзаца"));
        assert_eq!(aggregator.clause_count(), 0);

        aggregator.push(body("П", "1.1.1", "(1.1.1) Пункт"));
        assert_eq!(aggregator.clause_count(), 1);
    }

    #[test]
    fn test_gaps_are_kept_inside_a_chunk() {
        let mut aggregator = ChunkAggregator::new("1.1.md");
        aggregator.push_gap();
        aggregator.push(body("П", "1.1.1", "(1.1.1) Первый абзац"));
        aggregator.push_gap();
        aggregator.push(body("П", "1.1.1", "Второй абзац"));
        aggregator.push_gap();

        let chunk = aggregator.finish().unwrap();
        assert!(chunk.content.ends_with("(1.1.1) Первый абзац\n\nВторой абзац"));
    }

    #[test]
    fn test_headers_only_produce_nothing() {
        let mut aggregator = ChunkAggregator::new("1.1.md");
        assert!(aggregator.push(Record::header(&address("П", ""))).is_none());
        assert!(aggregator.push(Record::header(&address("Q", ""))).is_none());
        assert!(aggregator.finish().is_none());
    }
}
