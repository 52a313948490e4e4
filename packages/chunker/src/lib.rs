//! PUE Chunker - Turn normative Markdown documents into addressed records.
//!
//! This crate classifies each line of a Markdown rendering of the PUE
//! (Правила устройства электроустановок) into a hierarchical address
//! (Document, Section, Chapter, Paragraph, Clause) and aggregates the
//! resulting records into retrieval chunks written as JSON lines.
//!
//! # Example
//!
//! ```
//! use pue_chunker::LineClassifier;
//!
//! let mut classifier = LineClassifier::new();
//! classifier.classify("## Раздел 1 Общие правила");
//! classifier.classify("# Область применения");
//! let record = classifier.classify("(1.1.1) Настоящие Правила...").unwrap();
//!
//! assert_eq!(record.address.section, "Раздел 1 Общие правила");
//! assert_eq!(record.address.clause, "1.1.1");
//! assert!(!record.is_header);
//! ```
//!
//! # Architecture
//!
//! - [`config`]: Configuration constants and validation
//! - [`types`]: Hierarchical address and record types
//! - [`error`]: Error types and Result alias
//! - [`classifier`]: Ordered line rules and the stateful classifier
//! - [`chunking`]: Aggregation of records into chunks
//! - [`output`]: JSON-lines output
//! - [`pipeline`]: Single-file conversion
//! - [`batch`]: Concurrent directory conversion
//! - [`cli`]: Command-line interface

pub mod batch;
pub mod chunking;
pub mod classifier;
pub mod cli;
pub mod config;
pub mod error;
pub mod output;
pub mod pipeline;
pub mod types;

// Re-export main functions
pub use chunking::{chunk_document, Chunk, ChunkMetadata};
pub use pipeline::{chunk_file, classify_file, FileReport};

// Re-export commonly used items
pub use classifier::LineClassifier;
pub use error::{ChunkerError, Result};
pub use types::{HierarchicalAddress, Level, Record};
