//! Error types for the chunker.
//!
//! Line classification never fails; these errors come from the file,
//! serialization and batch layers around it.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for the chunker library.
#[derive(Debug, Error)]
pub enum ChunkerError {
    /// Input file does not carry a `.md` extension.
    #[error("Not a Markdown file: '{}'. Expected a .md extension", .0.display())]
    NotMarkdown(PathBuf),

    /// Input file does not exist.
    #[error("Input file not found: {}", .0.display())]
    InputNotFound(PathBuf),

    /// Output directory does not exist.
    #[error("Output directory does not exist: {}", .0.display())]
    OutputDirNotFound(PathBuf),

    /// Path exists but is not a directory.
    #[error("Path is not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    /// Worker count must be at least one.
    #[error("Invalid number of jobs: {0}. Expected at least 1")]
    InvalidJobs(usize),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    /// Directory traversal failed.
    #[error("Directory traversal failed: {0}")]
    WalkDir(#[from] walkdir::Error),

    /// Processing a file inside a batch failed.
    #[error("Failed to process {}: {source}", .path.display())]
    File {
        path: PathBuf,
        #[source]
        source: Box<ChunkerError>,
    },
}

impl ChunkerError {
    /// Attach the offending file path to an error.
    #[must_use]
    pub fn in_file(self, path: impl Into<PathBuf>) -> Self {
        Self::File {
            path: path.into(),
            source: Box::new(self),
        }
    }
}

/// Result type alias for chunker operations.
pub type Result<T> = std::result::Result<T, ChunkerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ChunkerError::NotMarkdown(PathBuf::from("notes.txt"));
        assert!(err.to_string().contains("notes.txt"));
        assert!(err.to_string().contains(".md"));
    }

    #[test]
    fn test_invalid_jobs_display() {
        let err = ChunkerError::InvalidJobs(0);
        assert_eq!(
            err.to_string(),
            "Invalid number of jobs: 0. Expected at least 1"
        );
    }

    #[test]
    fn test_in_file_wraps_source() {
        let err = ChunkerError::InputNotFound(PathBuf::from("1.1.md")).in_file("data/1.1.md");
        assert_eq!(
            err.to_string(),
            "Failed to process data/1.1.md: Input file not found: 1.1.md"
        );
        assert!(std::error::Error::source(&err).is_some());
    }
}
