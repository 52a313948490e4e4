//! Clause rules for the two numbering styles found in PUE documents.

use std::sync::LazyLock;

use regex::Regex;

use crate::classifier::rule::{LineRule, RuleOutcome};
use crate::types::HierarchicalAddress;

/// `(X.Y.Z) text`
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static PARENTHESIZED_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\((\d+\.\d+\.\d+)\)\s+(.*)$").expect("valid regex"));

/// `X.Y.Z. text`
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static DOTTED_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d+\.\d+\.\d+)\.\s+(.*)$").expect("valid regex"));

/// Rule for parenthesized clause numbers, e.g. `(1.2.3) Текст`.
pub struct ParenthesizedClauseRule;

impl LineRule for ParenthesizedClauseRule {
    fn name(&self) -> &'static str {
        "clause_parenthesized"
    }

    fn evaluate(&self, line: &str, _address: &HierarchicalAddress) -> Option<RuleOutcome> {
        clause_outcome(&PARENTHESIZED_PATTERN, line)
    }
}

/// Rule for clause numbers with a trailing dot, e.g. `1.2.3. Текст`.
pub struct DottedClauseRule;

impl LineRule for DottedClauseRule {
    fn name(&self) -> &'static str {
        "clause_dotted"
    }

    fn evaluate(&self, line: &str, _address: &HierarchicalAddress) -> Option<RuleOutcome> {
        clause_outcome(&DOTTED_PATTERN, line)
    }
}

fn clause_outcome(pattern: &Regex, line: &str) -> Option<RuleOutcome> {
    let caps = pattern.captures(line)?;
    Some(RuleOutcome::Clause {
        number: caps[1].to_string(),
    })
}
