//! Structural marker rules: Document, Section, Chapter and Paragraph headers.
//!
//! These rules only ever produce header outcomes. Chapter and Paragraph
//! markers are shared by annotation and table headings (`# Таблица 1.1.1`,
//! `# Примечание`), so both rules check their suppression tokens before
//! accepting a match.

use std::sync::LazyLock;

use regex::Regex;

use crate::classifier::config::{
    CHAPTER_SUPPRESSORS, CHAPTER_TOKEN, PARAGRAPH_SUPPRESSORS, SECTION_TOKEN,
};
use crate::classifier::rule::{contains_any, LineRule, RuleOutcome};
use crate::types::{HierarchicalAddress, Level};

/// `### <title>`
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static DOCUMENT_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^###\s+(.+)$").expect("valid regex"));

/// `## Раздел <N> [title]`
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static SECTION_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"^##\s+{SECTION_TOKEN}\s+(\d+)\s*(.*)$")).expect("valid regex")
});

/// `# Глава ` prefix, checked before suppression.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static CHAPTER_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(&format!(r"^#\s+{CHAPTER_TOKEN}\s+")).expect("valid regex"));

/// `# Глава <X.Y>` optionally followed by a separator and a title.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static CHAPTER_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"^#\s+{CHAPTER_TOKEN}\s+(\d+\.\d+)(?:\s*[-–:]\s*(.*)|\s*)$"
    ))
    .expect("valid regex")
});

/// `#` alone or `# <text>`; `##...` and `#word` do not match.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static PARAGRAPH_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#(?:\s+(.*))?$").expect("valid regex"));

/// Rule for the document title line (`### ...`).
///
/// Sets the document title and clears nothing.
pub struct DocumentRule;

impl LineRule for DocumentRule {
    fn name(&self) -> &'static str {
        "document"
    }

    fn evaluate(&self, line: &str, _address: &HierarchicalAddress) -> Option<RuleOutcome> {
        let caps = DOCUMENT_PATTERN.captures(line)?;
        Some(RuleOutcome::Header {
            level: Level::Document,
            value: caps[1].trim().to_string(),
        })
    }
}

/// Rule for section lines (`## Раздел N ...`).
///
/// The label is `Раздел N`, followed by the title when one is present.
pub struct SectionRule;

impl LineRule for SectionRule {
    fn name(&self) -> &'static str {
        "section"
    }

    fn evaluate(&self, line: &str, _address: &HierarchicalAddress) -> Option<RuleOutcome> {
        let caps = SECTION_PATTERN.captures(line)?;
        let number = &caps[1];
        let title = caps.get(2).map_or("", |m| m.as_str().trim());

        let value = if title.is_empty() {
            format!("{SECTION_TOKEN} {number}")
        } else {
            format!("{SECTION_TOKEN} {number} {title}")
        };

        Some(RuleOutcome::Header {
            level: Level::Section,
            value,
        })
    }
}

/// Rule for chapter lines (`# Глава X.Y - ...`).
///
/// Lines mentioning a table or a note are table/annotation captions that
/// happen to start with a chapter reference; they fall through.
pub struct ChapterRule;

impl LineRule for ChapterRule {
    fn name(&self) -> &'static str {
        "chapter"
    }

    fn evaluate(&self, line: &str, _address: &HierarchicalAddress) -> Option<RuleOutcome> {
        if !CHAPTER_PREFIX.is_match(line) {
            return None;
        }

        if contains_any(line, CHAPTER_SUPPRESSORS) {
            tracing::trace!(line, "Chapter marker suppressed");
            return None;
        }

        let Some(caps) = CHAPTER_PATTERN.captures(line) else {
            tracing::debug!(line, "Chapter marker without a valid X.Y numeral");
            return None;
        };

        let number = &caps[1];
        let title = caps.get(2).map_or("", |m| m.as_str().trim());

        let value = if title.is_empty() {
            format!("{CHAPTER_TOKEN} {number}")
        } else {
            format!("{CHAPTER_TOKEN} {number} - {title}")
        };

        Some(RuleOutcome::Header {
            level: Level::Chapter,
            value,
        })
    }
}

/// Rule for paragraph headings (`# <free text>`).
///
/// A bare `#` is consumed without a record.
pub struct ParagraphRule;

impl LineRule for ParagraphRule {
    fn name(&self) -> &'static str {
        "paragraph"
    }

    fn evaluate(&self, line: &str, _address: &HierarchicalAddress) -> Option<RuleOutcome> {
        let caps = PARAGRAPH_PATTERN.captures(line)?;

        if contains_any(line, PARAGRAPH_SUPPRESSORS) {
            tracing::trace!(line, "Paragraph marker suppressed");
            return None;
        }

        let title = caps.get(1).map_or("", |m| m.as_str().trim());
        if title.is_empty() {
            return Some(RuleOutcome::Drop);
        }

        Some(RuleOutcome::Header {
            level: Level::Paragraph,
            value: title.to_string(),
        })
    }
}
