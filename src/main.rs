//! memo2md - exported memo page to Markdown files
//!
//! Reads a page of memo entries and writes one Markdown file per memo,
//! with inline tags moved to the end and the memo time as the file mtime.

mod cli;
mod commands;

use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;

use cli::{Cli, OutputFormat};
use memo2md_core::error::{ExitCode as Memo2mdExitCode, Memo2mdError};
use memo2md_core::logging;

fn main() -> ExitCode {
    let start = Instant::now();
    let cli = Cli::parse();

    // Initialize structured logging
    if let Err(e) = logging::init_tracing(cli.verbose, cli.log_level.as_deref(), cli.log_json) {
        // If tracing initialization fails, fall back to stderr
        eprintln!("Warning: Failed to initialize logging: {}", e);
    }

    tracing::debug!(elapsed = ?start.elapsed(), "parse_args");

    match commands::convert::execute(&cli) {
        Ok(summary) if summary.is_clean() => ExitCode::from(Memo2mdExitCode::Success as u8),
        Ok(_) => ExitCode::from(Memo2mdExitCode::Failure as u8),
        Err(e) => {
            let exit_code = e.exit_code();

            match (&e, cli.format) {
                (_, OutputFormat::Json) => eprintln!("{}", e.to_json()),
                (Memo2mdError::MissingSource { path }, OutputFormat::Human) => {
                    commands::convert::warn_missing_source(path)
                }
                (_, OutputFormat::Human) => eprintln!("error: {}", e),
            }

            ExitCode::from(exit_code as u8)
        }
    }
}
