//! Rule configuration for PUE Markdown documents.

use super::registry::RuleSet;
use super::rules::{
    ChapterRule, DocumentRule, DottedClauseRule, ParagraphRule, ParenthesizedClauseRule,
    PlainContentRule, SectionRule,
};

/// Keyword introducing a section (`## Раздел 1`).
pub const SECTION_TOKEN: &str = "Раздел";

/// Keyword introducing a chapter (`# Глава 1.1`).
pub const CHAPTER_TOKEN: &str = "Глава";

/// Keyword of table captions (`# Таблица 1.1.1`).
pub const TABLE_TOKEN: &str = "Таблица";

/// Keyword of annotations (`# Примечание`).
pub const NOTE_TOKEN: &str = "Примечание";

/// Tokens that disqualify a `# Глава` line as a chapter marker.
pub const CHAPTER_SUPPRESSORS: &[&str] = &[TABLE_TOKEN, NOTE_TOKEN];

/// Tokens that disqualify a `#` line as a paragraph marker.
pub const PARAGRAPH_SUPPRESSORS: &[&str] = &[CHAPTER_TOKEN, TABLE_TOKEN, NOTE_TOKEN];

/// Create the rule set for PUE Markdown documents.
///
/// Order matters: the first matching rule wins.
///
/// ```text
/// 1. ###  <title>              document
/// 2. ##   Раздел N [title]     section
/// 3. #    Глава X.Y [- title]  chapter    (not tables/notes)
/// 4. #    <title>              paragraph  (not chapters/tables/notes)
/// 5. (X.Y.Z) text              clause
/// 6. X.Y.Z. text               clause
/// 7. text                      content    (needs paragraph or clause)
/// ```
#[must_use]
pub fn create_normative_rules() -> RuleSet {
    let mut rules = RuleSet::new();

    // Structural headers
    rules.register(DocumentRule);
    rules.register(SectionRule);
    rules.register(ChapterRule);
    rules.register(ParagraphRule);

    // Clauses
    rules.register(ParenthesizedClauseRule);
    rules.register(DottedClauseRule);

    // Body text
    rules.register(PlainContentRule);

    rules
}
