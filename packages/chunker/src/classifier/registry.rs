//! Ordered rule set for line classification.

use super::rule::{LineRule, RuleOutcome};
use crate::types::HierarchicalAddress;

/// Ordered list of line rules.
///
/// Rules are tried in registration order and the first match wins.
pub struct RuleSet {
    rules: Vec<Box<dyn LineRule>>,
}

impl RuleSet {
    /// Create a new empty rule set.
    #[must_use]
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Append a rule after all previously registered rules.
    pub fn register(&mut self, rule: impl LineRule + 'static) {
        self.rules.push(Box::new(rule));
    }

    /// Evaluate a line against the rules in order.
    ///
    /// Returns the name of the matching rule together with its outcome.
    #[must_use]
    pub fn evaluate(
        &self,
        line: &str,
        address: &HierarchicalAddress,
    ) -> Option<(&'static str, RuleOutcome)> {
        self.rules
            .iter()
            .find_map(|rule| rule.evaluate(line, address).map(|o| (rule.name(), o)))
    }

    /// Names of the registered rules, in evaluation order.
    #[must_use]
    pub fn names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|r| r.name()).collect()
    }

    /// Number of registered rules.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether no rule is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl Default for RuleSet {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct PrefixRule {
        name: &'static str,
        prefix: &'static str,
    }

    impl LineRule for PrefixRule {
        fn name(&self) -> &'static str {
            self.name
        }

        fn evaluate(&self, line: &str, _address: &HierarchicalAddress) -> Option<RuleOutcome> {
            line.starts_with(self.prefix).then_some(RuleOutcome::Content)
        }
    }

    #[test]
    fn test_first_match_wins() {
        let mut rules = RuleSet::new();
        rules.register(PrefixRule {
            name: "long",
            prefix: "ab",
        });
        rules.register(PrefixRule {
            name: "short",
            prefix: "a",
        });

        let address = HierarchicalAddress::new();
        assert_eq!(rules.evaluate("abc", &address).map(|(n, _)| n), Some("long"));
        assert_eq!(rules.evaluate("acb", &address).map(|(n, _)| n), Some("short"));
        assert!(rules.evaluate("bca", &address).is_none());
    }

    #[test]
    fn test_names_keep_registration_order() {
        let mut rules = RuleSet::new();
        assert!(rules.is_empty());

        rules.register(PrefixRule {
            name: "first",
            prefix: "1",
        });
        rules.register(PrefixRule {
            name: "second",
            prefix: "2",
        });

        assert_eq!(rules.len(), 2);
        assert_eq!(rules.names(), vec!["first", "second"]);
    }
}
