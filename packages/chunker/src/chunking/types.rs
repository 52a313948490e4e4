//! Types for retrieval chunks.

use chrono::{NaiveDateTime, SubsecRound};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::classifier::TABLE_TOKEN;
use crate::config::{CHUNK_ID_PREFIX, CHUNK_ID_RANDOM_LEN};
use crate::types::HierarchicalAddress;

/// Metadata stored with each chunk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChunkMetadata {
    /// Address shared by every line of the chunk.
    #[serde(flatten)]
    pub address: HierarchicalAddress,

    /// Whether the text carries a table caption or Markdown table rows.
    pub contains_tables: bool,

    /// Whether the text carries a Markdown image.
    pub contains_images: bool,

    /// File name of the source document.
    pub source_file: String,
}

/// A retrieval chunk: consecutive content lines under one address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chunk {
    /// Identifier, e.g. "pue_1.2.3_1a2b3c4d".
    pub id: String,

    /// Address and content flags.
    pub metadata: ChunkMetadata,

    /// Context header followed by a blank line and the chunk text.
    pub content: String,

    /// Local creation time, microsecond precision.
    pub created_at: NaiveDateTime,
}

impl Chunk {
    /// Build a chunk from the lines collected under one address.
    ///
    /// Returns `None` when the joined text is empty after trimming.
    #[must_use]
    pub fn from_block(
        address: &HierarchicalAddress,
        lines: &[String],
        source_file: impl Into<String>,
    ) -> Option<Self> {
        let text = lines.join("\n").trim().to_string();
        if text.is_empty() {
            return None;
        }

        let context_header = address.context_header();
        let content = if context_header.is_empty() {
            text.clone()
        } else {
            format!("{context_header}\n\n{text}")
        };

        Some(Self {
            id: chunk_id(address),
            metadata: ChunkMetadata {
                address: address.clone(),
                contains_tables: contains_tables(&text),
                contains_images: contains_images(&text),
                source_file: source_file.into(),
            },
            content,
            created_at: chrono::Local::now().naive_local().trunc_subsecs(6),
        })
    }
}

/// Generate a chunk identifier keyed by clause number.
fn chunk_id(address: &HierarchicalAddress) -> String {
    let key = if address.clause.is_empty() {
        "unknown"
    } else {
        address.clause.as_str()
    };
    let random = Uuid::new_v4().simple().to_string();
    format!(
        "{CHUNK_ID_PREFIX}_{key}_{}",
        &random[..CHUNK_ID_RANDOM_LEN]
    )
}

fn contains_tables(text: &str) -> bool {
    text.contains(&format!("# {TABLE_TOKEN}")) || text.contains('|')
}

fn contains_images(text: &str) -> bool {
    text.contains("![")
}
