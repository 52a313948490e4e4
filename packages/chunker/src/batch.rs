//! Batch conversion of a directory of Markdown documents.
//!
//! Every document gets its own classifier, so files are processed on a
//! small pool of scoped worker threads without any shared parsing state.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::thread;

use walkdir::WalkDir;

use crate::config::{is_markdown, validate_input_dir, validate_jobs, DEFAULT_JOBS};
use crate::error::{ChunkerError, Result};
use crate::pipeline::{chunk_file, FileReport};

/// Options for a batch run.
#[derive(Debug, Clone)]
pub struct BatchOptions {
    /// Directory to read `.md` files from.
    pub input_dir: PathBuf,

    /// Directory to write `.chunked.jsonl` files to.
    pub output_dir: PathBuf,

    /// Maximum number of files converted concurrently.
    pub jobs: usize,

    /// Whether to descend into subdirectories.
    pub recursive: bool,
}

impl BatchOptions {
    /// Create options with the default job count, non-recursive.
    #[must_use]
    pub fn new(input_dir: impl Into<PathBuf>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            input_dir: input_dir.into(),
            output_dir: output_dir.into(),
            jobs: DEFAULT_JOBS,
            recursive: false,
        }
    }

    /// Set the job count.
    #[must_use]
    pub fn with_jobs(mut self, jobs: usize) -> Self {
        self.jobs = jobs;
        self
    }

    /// Set whether to search subdirectories.
    #[must_use]
    pub fn with_recursive(mut self, recursive: bool) -> Self {
        self.recursive = recursive;
        self
    }
}

/// Result of a batch run, in input order.
#[derive(Debug, Default)]
pub struct BatchSummary {
    /// Files that produced a chunk file.
    pub written: Vec<FileReport>,

    /// Files that produced no chunks.
    pub empty: Vec<PathBuf>,

    /// Files that failed, with their errors.
    pub failed: Vec<ChunkerError>,
}

impl BatchSummary {
    /// Total number of files processed.
    #[must_use]
    pub fn total(&self) -> usize {
        self.written.len() + self.empty.len() + self.failed.len()
    }

    /// Total number of chunks written.
    #[must_use]
    pub fn chunks(&self) -> usize {
        self.written.iter().map(|r| r.chunks).sum()
    }
}

/// Find Markdown files in a directory, sorted by path.
///
/// # Arguments
/// * `input_dir` - Directory to search
/// * `recursive` - Whether to descend into subdirectories
pub fn discover_markdown(input_dir: &Path, recursive: bool) -> Result<Vec<PathBuf>> {
    validate_input_dir(input_dir)?;

    let mut walker = WalkDir::new(input_dir).min_depth(1);
    if !recursive {
        walker = walker.max_depth(1);
    }

    let mut files = Vec::new();
    for entry in walker {
        let entry = entry?;
        if entry.file_type().is_file() && is_markdown(entry.path()) {
            files.push(entry.into_path());
        }
    }
    files.sort();
    Ok(files)
}

/// Output directory for a file, mirroring its location under the input directory.
fn mirrored_output_dir(path: &Path, input_dir: &Path, output_dir: &Path) -> PathBuf {
    path.strip_prefix(input_dir)
        .ok()
        .and_then(Path::parent)
        .filter(|rel| !rel.as_os_str().is_empty())
        .map_or_else(|| output_dir.to_path_buf(), |rel| output_dir.join(rel))
}

/// Run a batch conversion.
pub fn run_batch(options: &BatchOptions) -> Result<BatchSummary> {
    run_batch_with_progress(options, |_, _| {})
}

/// Run a batch conversion, calling `on_file` after each file completes.
///
/// `on_file` is called from worker threads. Individual file failures are
/// collected in the summary; only setup errors abort the run.
pub fn run_batch_with_progress<F>(options: &BatchOptions, on_file: F) -> Result<BatchSummary>
where
    F: Fn(&Path, &Result<FileReport>) + Sync,
{
    validate_jobs(options.jobs)?;
    let files = discover_markdown(&options.input_dir, options.recursive)?;
    fs::create_dir_all(&options.output_dir)?;

    tracing::info!(
        files = files.len(),
        jobs = options.jobs,
        input = %options.input_dir.display(),
        "Starting batch conversion"
    );

    let next = AtomicUsize::new(0);
    let results: Mutex<Vec<(usize, PathBuf, Result<FileReport>)>> =
        Mutex::new(Vec::with_capacity(files.len()));

    thread::scope(|scope| {
        for _ in 0..options.jobs.min(files.len()) {
            scope.spawn(|| loop {
                let index = next.fetch_add(1, Ordering::Relaxed);
                let Some(path) = files.get(index) else {
                    break;
                };

                let output_dir = mirrored_output_dir(path, &options.input_dir, &options.output_dir);
                let result = chunk_file(path, &output_dir);
                on_file(path, &result);

                results
                    .lock()
                    .unwrap_or_else(|poisoned| poisoned.into_inner())
                    .push((index, path.clone(), result));
            });
        }
    });

    let mut results = results
        .into_inner()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    results.sort_by_key(|(index, _, _)| *index);

    let mut summary = BatchSummary::default();
    for (_, path, result) in results {
        match result {
            Ok(report) if report.output.is_some() => summary.written.push(report),
            Ok(report) => summary.empty.push(report.input),
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Conversion failed");
                summary.failed.push(e.in_file(path));
            }
        }
    }

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const DOCUMENT: &str = "# Определения\n(1.1.1) Текст\n";

    fn setup() -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("in");
        fs::create_dir_all(input.join("sub")).unwrap();
        fs::write(input.join("b.md"), DOCUMENT).unwrap();
        fs::write(input.join("a.MD"), DOCUMENT).unwrap();
        fs::write(input.join("notes.txt"), DOCUMENT).unwrap();
        fs::write(input.join("empty.md"), "### Только заголовок\n").unwrap();
        fs::write(input.join("sub").join("c.md"), DOCUMENT).unwrap();
        dir
    }

    #[test]
    fn test_discover_markdown_flat() {
        let dir = setup();
        let input = dir.path().join("in");

        let files = discover_markdown(&input, false).unwrap();
        assert_eq!(
            files,
            vec![input.join("a.MD"), input.join("b.md"), input.join("empty.md")]
        );
    }

    #[test]
    fn test_discover_markdown_recursive() {
        let dir = setup();
        let input = dir.path().join("in");

        let files = discover_markdown(&input, true).unwrap();
        assert_eq!(files.len(), 4);
        assert!(files.contains(&input.join("sub").join("c.md")));
    }

    #[test]
    fn test_discover_markdown_missing_dir() {
        let dir = tempfile::tempdir().unwrap();
        assert!(discover_markdown(&dir.path().join("missing"), false).is_err());
    }

    #[test]
    fn test_mirrored_output_dir() {
        assert_eq!(
            mirrored_output_dir(Path::new("in/sub/c.md"), Path::new("in"), Path::new("out")),
            PathBuf::from("out/sub")
        );
        assert_eq!(
            mirrored_output_dir(Path::new("in/a.md"), Path::new("in"), Path::new("out")),
            PathBuf::from("out")
        );
    }

    #[test]
    fn test_run_batch_recursive() {
        let dir = setup();
        let options = BatchOptions::new(dir.path().join("in"), dir.path().join("out"))
            .with_jobs(2)
            .with_recursive(true);

        let summary = run_batch(&options).unwrap();

        assert_eq!(summary.total(), 4);
        assert_eq!(summary.written.len(), 3);
        assert_eq!(summary.empty.len(), 1);
        assert!(summary.failed.is_empty());
        assert_eq!(summary.chunks(), 3);
        assert!(dir.path().join("out/sub/c.chunked.jsonl").exists());
        assert!(dir.path().join("out/a.chunked.jsonl").exists());
        assert!(!dir.path().join("out/empty.chunked.jsonl").exists());
    }

    #[test]
    fn test_run_batch_reports_progress() {
        let dir = setup();
        let options = BatchOptions::new(dir.path().join("in"), dir.path().join("out"));
        let seen = AtomicUsize::new(0);

        run_batch_with_progress(&options, |_, _| {
            seen.fetch_add(1, Ordering::Relaxed);
        })
        .unwrap();

        assert_eq!(seen.load(Ordering::Relaxed), 3);
    }

    #[test]
    fn test_run_batch_rejects_zero_jobs() {
        let dir = setup();
        let options = BatchOptions::new(dir.path().join("in"), dir.path().join("out")).with_jobs(0);

        assert!(matches!(
            run_batch(&options).unwrap_err(),
            ChunkerError::InvalidJobs(0)
        ));
    }
}
