//! Command-line interface for the chunker.

use std::io::Write;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};

use crate::batch::{run_batch_with_progress, BatchOptions};
use crate::config::{
    records_output_path, validate_output_dir, DEFAULT_INPUT_DIR, DEFAULT_JOBS, DEFAULT_OUTPUT_DIR,
};
use crate::error::Result;
use crate::output::{save_records, write_jsonl};
use crate::pipeline::{chunk_file, classify_file};

/// PUE Chunker - Convert normative Markdown documents into addressed records and chunks.
#[derive(Parser)]
#[command(name = "pue-chunker")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Classify a Markdown file and emit one JSON record per structural or content line.
    Records {
        /// Markdown file to classify
        file: PathBuf,

        /// Output directory for <name>.records.jsonl (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Convert a Markdown file into <name>.chunked.jsonl.
    Chunk {
        /// Markdown file to convert
        file: PathBuf,

        /// Output directory (default: the input file's directory)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Convert every Markdown file in a directory.
    Batch {
        /// Input directory with .md files
        #[arg(short, long, default_value = DEFAULT_INPUT_DIR)]
        input: PathBuf,

        /// Output directory for .chunked.jsonl files
        #[arg(short, long, default_value = DEFAULT_OUTPUT_DIR)]
        output: PathBuf,

        /// Maximum number of concurrent conversions
        #[arg(short, long, default_value_t = DEFAULT_JOBS)]
        jobs: usize,

        /// Search subdirectories too
        #[arg(short, long)]
        recursive: bool,
    },
}

/// Run the CLI.
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Records { file, output } => records_command(&file, output.as_deref()),
        Commands::Chunk { file, output } => chunk_command(&file, output.as_deref()),
        Commands::Batch {
            input,
            output,
            jobs,
            recursive,
        } => batch_command(
            BatchOptions::new(input, output)
                .with_jobs(jobs)
                .with_recursive(recursive),
        ),
    }
}

/// Execute the records command.
fn records_command(file: &Path, output: Option<&Path>) -> Result<()> {
    if let Some(output_dir) = output {
        validate_output_dir(output_dir)?;
    }

    let records = classify_file(file)?;

    match output {
        Some(output_dir) => {
            let path = records_output_path(file, output_dir);
            save_records(&records, &path)?;
            println!(
                "{} {} records to {}",
                style("Saved").green().bold(),
                records.len(),
                path.display()
            );
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            write_jsonl(&mut stdout, &records)?;
            stdout.flush()?;
        }
    }

    Ok(())
}

/// Execute the chunk command.
fn chunk_command(file: &Path, output: Option<&Path>) -> Result<()> {
    // Validate output directory exists (if specified) before reading
    if let Some(output_dir) = output {
        validate_output_dir(output_dir)?;
    }

    let output_dir = output
        .map(Path::to_path_buf)
        .or_else(|| file.parent().map(Path::to_path_buf))
        .unwrap_or_default();

    println!(
        "{} {}",
        style("Chunking").bold(),
        style(file.display()).cyan()
    );

    let report = chunk_file(file, &output_dir)?;

    match report.output {
        Some(path) => {
            println!("  Chunks: {}", style(report.chunks).green());
            println!();
            println!("{} {}", style("Saved to:").green().bold(), path.display());
        }
        None => {
            println!(
                "{} no chunks found, expected clauses like '(1.2.3) Текст' or '1.2.3. Текст'",
                style("Warning:").yellow().bold()
            );
        }
    }

    Ok(())
}

/// Execute the batch command.
fn batch_command(options: BatchOptions) -> Result<()> {
    println!(
        "{} {} -> {} ({} jobs)",
        style("Converting").bold(),
        style(options.input_dir.display()).cyan(),
        style(options.output_dir.display()).cyan(),
        options.jobs
    );
    println!();

    let pb = ProgressBar::new_spinner();
    #[allow(clippy::expect_used)] // Static template string that is guaranteed to be valid
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {pos} files {msg}")
            .expect("valid template"),
    );
    pb.enable_steady_tick(std::time::Duration::from_millis(100));

    let summary = match run_batch_with_progress(&options, |path, result| {
        pb.inc(1);
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        match result {
            Ok(report) if report.output.is_some() => {
                pb.println(format!("{} {name} ({} chunks)", style("✓").green(), report.chunks));
            }
            Ok(_) => pb.println(format!("{} {name} (no chunks)", style("⚠").yellow())),
            Err(e) => pb.println(format!("{} {name}: {e}", style("✗").red())),
        }
    }) {
        Ok(summary) => summary,
        Err(e) => {
            pb.finish_and_clear();
            return Err(e);
        }
    };

    pb.finish_and_clear();

    if summary.total() == 0 {
        println!("No Markdown files found in {}", options.input_dir.display());
        return Ok(());
    }

    println!();
    println!("  Files: {}", summary.total());
    println!("  Chunks: {}", style(summary.chunks()).green());
    if !summary.empty.is_empty() {
        println!("  Without chunks: {}", style(summary.empty.len()).yellow());
    }
    if !summary.failed.is_empty() {
        println!("  Failed: {}", style(summary.failed.len()).red().bold());
    }
    println!();
    println!(
        "{} {}",
        style("Done! Results saved to:").green().bold(),
        options.output_dir.display()
    );

    Ok(())
}
