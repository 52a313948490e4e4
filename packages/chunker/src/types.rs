//! Core data types for the chunker.
//!
//! A normative document is addressed as
//! Document → Section → Chapter → Paragraph → Clause. The classifier keeps
//! one [`HierarchicalAddress`] and stamps a copy of it on every [`Record`].

use serde::{Deserialize, Serialize};

/// Structural levels of a normative document, outermost first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Level {
    /// Title of the whole document (`### ...`).
    Document,

    /// Numbered section (`## Раздел N ...`).
    Section,

    /// Numbered chapter (`# Глава X.Y ...`).
    Chapter,

    /// Free-text paragraph heading (`# ...`).
    Paragraph,

    /// Numbered clause (`(X.Y.Z) ...` or `X.Y.Z. ...`).
    Clause,
}

impl Level {
    /// Field name used in the JSON encoding.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Document => "Document",
            Self::Section => "Section",
            Self::Chapter => "Chapter",
            Self::Paragraph => "Paragraph",
            Self::Clause => "Clause",
        }
    }

    /// Levels cleared when this level is set.
    ///
    /// Document is the root and clears nothing; clauses are siblings and
    /// clear nothing either.
    #[must_use]
    pub fn resets(&self) -> &'static [Level] {
        match self {
            Self::Document | Self::Clause => &[],
            Self::Section => &[Level::Chapter, Level::Paragraph, Level::Clause],
            Self::Chapter => &[Level::Paragraph, Level::Clause],
            Self::Paragraph => &[Level::Clause],
        }
    }
}

impl std::fmt::Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Current position in the document hierarchy.
///
/// Empty strings mean "not set".
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct HierarchicalAddress {
    /// Document title.
    pub document: String,

    /// Section label, e.g. "Раздел 1 Общие правила".
    pub section: String,

    /// Chapter label, e.g. "Глава 1.2 - Электроснабжение".
    pub chapter: String,

    /// Paragraph title.
    pub paragraph: String,

    /// Clause numeral, e.g. "1.2.3".
    pub clause: String,
}

impl HierarchicalAddress {
    /// Create an empty address.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the value of a level.
    #[must_use]
    pub fn get(&self, level: Level) -> &str {
        match level {
            Level::Document => &self.document,
            Level::Section => &self.section,
            Level::Chapter => &self.chapter,
            Level::Paragraph => &self.paragraph,
            Level::Clause => &self.clause,
        }
    }

    fn field_mut(&mut self, level: Level) -> &mut String {
        match level {
            Level::Document => &mut self.document,
            Level::Section => &mut self.section,
            Level::Chapter => &mut self.chapter,
            Level::Paragraph => &mut self.paragraph,
            Level::Clause => &mut self.clause,
        }
    }

    /// Set a level and clear the levels below it.
    pub fn set(&mut self, level: Level, value: impl Into<String>) {
        *self.field_mut(level) = value.into();
        for lower in level.resets() {
            self.field_mut(*lower).clear();
        }
    }

    /// Whether body text can be attributed to this address.
    ///
    /// Content needs an active paragraph or clause.
    #[must_use]
    pub fn has_context(&self) -> bool {
        !self.paragraph.is_empty() || !self.clause.is_empty()
    }

    /// Context header used to prefix chunk text.
    ///
    /// Joins the non-empty Document, Section, Chapter and Paragraph values
    /// with ". " and terminates with "."; empty when none is set.
    ///
    /// # Examples
    /// ```
    /// use pue_chunker::types::HierarchicalAddress;
    ///
    /// let address = HierarchicalAddress {
    ///     document: "ПУЭ".to_string(),
    ///     chapter: "Глава 1.1 - Общая часть".to_string(),
    ///     ..HierarchicalAddress::default()
    /// };
    /// assert_eq!(address.context_header(), "ПУЭ. Глава 1.1 - Общая часть.");
    /// ```
    #[must_use]
    pub fn context_header(&self) -> String {
        let parts: Vec<&str> = [
            Level::Document,
            Level::Section,
            Level::Chapter,
            Level::Paragraph,
        ]
        .into_iter()
        .map(|level| self.get(level))
        .filter(|value| !value.is_empty())
        .collect();

        if parts.is_empty() {
            String::new()
        } else {
            format!("{}.", parts.join(". "))
        }
    }
}

/// A classified line: an address snapshot plus the line's content.
///
/// Serializes to the JSON-lines shape
/// `{"Document", "Section", "Chapter", "Paragraph", "Clause", "Content", "_is_header"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Address at emission time.
    #[serde(flatten)]
    pub address: HierarchicalAddress,

    /// Trimmed line text, empty for header records.
    #[serde(rename = "Content")]
    pub content: String,

    /// Whether the line was a structural marker.
    #[serde(rename = "_is_header")]
    pub is_header: bool,
}

impl Record {
    /// Create a header record (empty content).
    #[must_use]
    pub fn header(address: &HierarchicalAddress) -> Self {
        Self {
            address: address.clone(),
            content: String::new(),
            is_header: true,
        }
    }

    /// Create a content record.
    #[must_use]
    pub fn body(address: &HierarchicalAddress, content: impl Into<String>) -> Self {
        Self {
            address: address.clone(),
            content: content.into(),
            is_header: false,
        }
    }
}
