//! Fallback rule for body text.

use crate::classifier::rule::{LineRule, RuleOutcome};
use crate::types::HierarchicalAddress;

/// Rule attaching any remaining line to the active paragraph or clause.
///
/// Lines seen before any paragraph or clause has been opened have nowhere
/// to go and are left unmatched.
pub struct PlainContentRule;

impl LineRule for PlainContentRule {
    fn name(&self) -> &'static str {
        "content"
    }

    fn evaluate(&self, _line: &str, address: &HierarchicalAddress) -> Option<RuleOutcome> {
        address.has_context().then_some(RuleOutcome::Content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Level;

    #[test]
    fn test_content_without_context() {
        let mut address = HierarchicalAddress::new();
        address.set(Level::Document, "ПУЭ");
        address.set(Level::Chapter, "Глава 1.1");

        assert_eq!(PlainContentRule.evaluate("Текст", &address), None);
    }

    #[test]
    fn test_content_under_paragraph() {
        let mut address = HierarchicalAddress::new();
        address.set(Level::Paragraph, "Общие указания");

        assert_eq!(
            PlainContentRule.evaluate("Текст", &address),
            Some(RuleOutcome::Content)
        );
    }

    #[test]
    fn test_content_under_clause() {
        let mut address = HierarchicalAddress::new();
        address.set(Level::Clause, "1.1.1");

        assert_eq!(
            PlainContentRule.evaluate("Текст", &address),
            Some(RuleOutcome::Content)
        );
    }
}
