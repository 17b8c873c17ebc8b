//! `memo2md` conversion command
//!
//! Runs the core pipeline, then reports per-memo failures on stderr and the
//! success/failure counts on stdout.

use std::time::Instant;

use colored::Colorize;
use tracing::debug;

use crate::cli::{Cli, OutputFormat};
use memo2md_core::config::ConvertConfig;
use memo2md_core::convert::{convert_file, ConversionSummary, ConvertOptions, MemoFailure};
use memo2md_core::error::Result;

const SEPARATOR_WIDTH: usize = 30;

/// Build conversion options from CLI flags and the optional config file
pub fn options_from_cli(cli: &Cli) -> Result<ConvertOptions> {
    let config = match &cli.config {
        Some(path) => ConvertConfig::load(path)?,
        None => ConvertConfig::default(),
    };

    Ok(ConvertOptions {
        input: cli.input.clone(),
        output_dir: cli.output.clone(),
        dry_run: cli.dry_run,
        config,
    })
}

/// Execute the conversion and print its outcome
pub fn execute(cli: &Cli) -> Result<ConversionSummary> {
    let start = Instant::now();
    let options = options_from_cli(cli)?;

    debug!(
        input = %options.input.display(),
        output = %options.output_dir.display(),
        dry_run = options.dry_run,
        "convert_params"
    );

    let summary = convert_file(&options)?;

    debug!(
        succeeded = summary.succeeded,
        failed = summary.failed,
        elapsed = ?start.elapsed(),
        "convert"
    );

    match cli.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&summary)?);
        }
        OutputFormat::Human => {
            for failure in &summary.failures {
                print_failure(failure);
            }
            if !cli.quiet {
                print_summary(&summary, cli.dry_run);
            }
        }
    }

    Ok(summary)
}

fn print_failure(failure: &MemoFailure) {
    eprintln!(
        "{} failed to convert memo {}: {}",
        "Error:".red().bold(),
        failure.index,
        failure.error
    );
    eprintln!("  time: {}", failure.time);
    eprintln!("  content: {}", failure.content);
}

fn print_summary(summary: &ConversionSummary, dry_run: bool) {
    if dry_run {
        for path in &summary.written {
            println!("would write {}", path.display());
        }
    }
    println!("{}", "-".repeat(SEPARATOR_WIDTH));
    println!("Converted: {} memos", summary.succeeded);
    println!("Failed: {} memos", summary.failed);
}

/// Print the run-fatal warning for a missing source document
pub fn warn_missing_source(path: &std::path::Path) {
    eprintln!(
        "{} source file not found: {}",
        "Warning:".yellow().bold(),
        path.display()
    );
}
