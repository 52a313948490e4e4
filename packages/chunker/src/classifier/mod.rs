//! Hierarchical line classifier for PUE Markdown documents.
//!
//! Lines are matched against an ordered set of rules. Structural markers
//! update the current [`HierarchicalAddress`](crate::types::HierarchicalAddress)
//! and emit header records; clause and body lines emit content records
//! stamped with the address.

mod config;
mod engine;
mod registry;
mod rule;
pub mod rules;

pub use config::{
    create_normative_rules, CHAPTER_SUPPRESSORS, CHAPTER_TOKEN, NOTE_TOKEN,
    PARAGRAPH_SUPPRESSORS, SECTION_TOKEN, TABLE_TOKEN,
};
pub use engine::LineClassifier;
pub use registry::RuleSet;
pub use rule::{contains_any, LineRule, RuleOutcome};
