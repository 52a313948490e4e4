//! Line rules for PUE Markdown documents.

mod clause;
mod content;
mod structural;

pub use clause::*;
pub use content::*;
pub use structural::*;
