//! Line classifier that tracks the hierarchical address of a document.

use super::config::create_normative_rules;
use super::registry::RuleSet;
use super::rule::RuleOutcome;
use crate::types::{HierarchicalAddress, Level, Record};

/// Stateful classifier for one document.
///
/// Feed lines strictly in document order. Use one instance per document;
/// instances share no state.
pub struct LineClassifier {
    rules: RuleSet,
    address: HierarchicalAddress,
}

impl LineClassifier {
    /// Create a classifier with the PUE rule set.
    #[must_use]
    pub fn new() -> Self {
        Self::with_rules(create_normative_rules())
    }

    /// Create a classifier with a custom rule set.
    #[must_use]
    pub fn with_rules(rules: RuleSet) -> Self {
        Self {
            rules,
            address: HierarchicalAddress::new(),
        }
    }

    /// Classify one line and return the record it produces, if any.
    ///
    /// Blank lines, orphan text before any paragraph or clause, and bare `#`
    /// markers produce no record and leave the address untouched.
    ///
    /// # Examples
    /// ```
    /// use pue_chunker::LineClassifier;
    ///
    /// let mut classifier = LineClassifier::new();
    /// assert!(classifier.classify("### ПУЭ").unwrap().is_header);
    /// assert!(classifier.classify("Текст без пункта").is_none());
    ///
    /// let record = classifier.classify("(1.1.1) Настоящие Правила...").unwrap();
    /// assert_eq!(record.address.clause, "1.1.1");
    /// assert_eq!(record.content, "(1.1.1) Настоящие Правила...");
    /// ```
    pub fn classify(&mut self, line: &str) -> Option<Record> {
        let line = line.trim();
        if line.is_empty() {
            return None;
        }

        let Some((rule, outcome)) = self.rules.evaluate(line, &self.address) else {
            tracing::trace!(line, "No active paragraph or clause, line skipped");
            return None;
        };
        tracing::trace!(rule, line, "Line classified");

        match outcome {
            RuleOutcome::Header { level, value } => {
                tracing::debug!(%level, value = %value, "Header");
                self.address.set(level, value);
                Some(Record::header(&self.address))
            }
            RuleOutcome::Clause { number } => {
                self.address.set(Level::Clause, number);
                Some(Record::body(&self.address, line))
            }
            RuleOutcome::Content => Some(Record::body(&self.address, line)),
            RuleOutcome::Drop => None,
        }
    }

    /// Classify a sequence of lines, keeping only the emitted records.
    pub fn classify_lines<'a>(&mut self, lines: impl IntoIterator<Item = &'a str>) -> Vec<Record> {
        lines
            .into_iter()
            .filter_map(|line| self.classify(line))
            .collect()
    }

    /// Snapshot of the current address.
    #[must_use]
    pub fn address(&self) -> HierarchicalAddress {
        self.address.clone()
    }
}

impl Default for LineClassifier {
    fn default() -> Self {
        Self::new()
    }
}
