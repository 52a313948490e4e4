//! JSON-lines output generation.

mod writer;

pub use writer::{save_chunks, save_records, write_jsonl};
