//! Configuration constants and validation functions for the chunker.

use std::path::{Path, PathBuf};

use crate::error::{ChunkerError, Result};

/// Extension of input documents.
pub const MARKDOWN_EXTENSION: &str = "md";

/// Suffix of chunk output files (`1.2.md` becomes `1.2.chunked.jsonl`).
pub const CHUNKED_SUFFIX: &str = ".chunked.jsonl";

/// Suffix of record output files written by the `records` command.
pub const RECORDS_SUFFIX: &str = ".records.jsonl";

/// Prefix of generated chunk identifiers.
pub const CHUNK_ID_PREFIX: &str = "pue";

/// Number of hex characters of the random part of a chunk identifier.
pub const CHUNK_ID_RANDOM_LEN: usize = 8;

/// Default number of concurrent conversions in batch mode.
pub const DEFAULT_JOBS: usize = 4;

/// Default batch input directory, relative to the working directory.
pub const DEFAULT_INPUT_DIR: &str = "data/extracted";

/// Default batch output directory, relative to the working directory.
pub const DEFAULT_OUTPUT_DIR: &str = "data/chunked";

/// Check whether a path has the Markdown extension (case-insensitive).
///
/// # Examples
/// ```
/// use std::path::Path;
/// use pue_chunker::config::is_markdown;
///
/// assert!(is_markdown(Path::new("1.2.md")));
/// assert!(is_markdown(Path::new("1.2.MD")));
/// assert!(!is_markdown(Path::new("1.2.docx")));
/// ```
#[must_use]
pub fn is_markdown(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case(MARKDOWN_EXTENSION))
}

/// Validate an input document path.
///
/// # Returns
/// * `Ok(())` if the file exists and is a Markdown file
/// * `Err(ChunkerError::InputNotFound)` if it does not exist
/// * `Err(ChunkerError::NotMarkdown)` if the extension is wrong
pub fn validate_markdown_path(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(ChunkerError::InputNotFound(path.to_path_buf()));
    }
    if !is_markdown(path) {
        return Err(ChunkerError::NotMarkdown(path.to_path_buf()));
    }
    Ok(())
}

/// Validate that a batch input directory exists and is a directory.
pub fn validate_input_dir(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(ChunkerError::InputNotFound(path.to_path_buf()));
    }
    if !path.is_dir() {
        return Err(ChunkerError::NotADirectory(path.to_path_buf()));
    }
    Ok(())
}

/// Validate that an output directory exists and is a directory.
pub fn validate_output_dir(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(ChunkerError::OutputDirNotFound(path.to_path_buf()));
    }
    if !path.is_dir() {
        return Err(ChunkerError::NotADirectory(path.to_path_buf()));
    }
    Ok(())
}

/// Validate the batch worker count.
pub fn validate_jobs(jobs: usize) -> Result<()> {
    if jobs == 0 {
        return Err(ChunkerError::InvalidJobs(jobs));
    }
    Ok(())
}

/// Build the chunk output path for a document.
///
/// # Examples
/// ```
/// use std::path::{Path, PathBuf};
/// use pue_chunker::config::chunked_output_path;
///
/// assert_eq!(
///     chunked_output_path(Path::new("data/extracted/1.2.md"), Path::new("out")),
///     PathBuf::from("out/1.2.chunked.jsonl")
/// );
/// ```
#[must_use]
pub fn chunked_output_path(md_path: &Path, output_dir: &Path) -> PathBuf {
    output_dir.join(format!("{}{CHUNKED_SUFFIX}", file_stem(md_path)))
}

/// Build the record output path for a document.
#[must_use]
pub fn records_output_path(md_path: &Path, output_dir: &Path) -> PathBuf {
    output_dir.join(format!("{}{RECORDS_SUFFIX}", file_stem(md_path)))
}

fn file_stem(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_markdown() {
        assert!(is_markdown(Path::new("a.md")));
        assert!(is_markdown(Path::new("dir/1.9.Md")));
        assert!(!is_markdown(Path::new("a.txt")));
        assert!(!is_markdown(Path::new("md")));
    }

    #[test]
    fn test_validate_markdown_path_missing() {
        let err = validate_markdown_path(Path::new("/definitely/not/here.md")).unwrap_err();
        assert!(matches!(err, ChunkerError::InputNotFound(_)));
    }

    #[test]
    fn test_validate_markdown_path_wrong_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("doc.txt");
        std::fs::write(&path, "text").unwrap();

        let err = validate_markdown_path(&path).unwrap_err();
        assert!(matches!(err, ChunkerError::NotMarkdown(_)));
    }

    #[test]
    fn test_validate_output_dir() {
        let dir = tempfile::tempdir().unwrap();
        assert!(validate_output_dir(dir.path()).is_ok());

        let file = dir.path().join("file.md");
        std::fs::write(&file, "").unwrap();
        assert!(matches!(
            validate_output_dir(&file).unwrap_err(),
            ChunkerError::NotADirectory(_)
        ));
        assert!(matches!(
            validate_output_dir(&dir.path().join("missing")).unwrap_err(),
            ChunkerError::OutputDirNotFound(_)
        ));
    }

    #[test]
    fn test_validate_input_dir() {
        let dir = tempfile::tempdir().unwrap();
        assert!(validate_input_dir(dir.path()).is_ok());
        assert!(matches!(
            validate_input_dir(&dir.path().join("missing")).unwrap_err(),
            ChunkerError::InputNotFound(_)
        ));
    }

    #[test]
    fn test_validate_jobs() {
        assert!(validate_jobs(1).is_ok());
        assert!(validate_jobs(DEFAULT_JOBS).is_ok());
        assert!(validate_jobs(0).is_err());
    }

    #[test]
    fn test_output_paths() {
        assert_eq!(
            chunked_output_path(Path::new("in/1.7.md"), Path::new("out")),
            PathBuf::from("out/1.7.chunked.jsonl")
        );
        assert_eq!(
            records_output_path(Path::new("in/1.7.md"), Path::new("out")),
            PathBuf::from("out/1.7.records.jsonl")
        );
    }
}
