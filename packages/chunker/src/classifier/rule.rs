//! Line rule trait definition.

use crate::types::{HierarchicalAddress, Level};

/// What a matching rule does with a line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleOutcome {
    /// Structural marker: set `level` to `value` and emit a header record.
    Header { level: Level, value: String },

    /// Clause marker: set the clause numeral and emit the line as content.
    Clause { number: String },

    /// Body text under the current address.
    Content,

    /// The line is consumed without a record or state change.
    Drop,
}

/// Trait for line rules.
///
/// Rules are evaluated in order and the first one returning `Some` wins.
/// A rule that returns `None` leaves the line to the next rule, which is
/// also how suppressed structural markers fall through.
pub trait LineRule: Send + Sync {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// Evaluate a trimmed, non-empty line against the current address.
    ///
    /// Rules never mutate state; the classifier applies the outcome.
    fn evaluate(&self, line: &str, address: &HierarchicalAddress) -> Option<RuleOutcome>;
}

/// Check whether a line contains any of the given tokens.
#[must_use]
pub fn contains_any(line: &str, tokens: &[&str]) -> bool {
    tokens.iter().any(|token| line.contains(token))
}
