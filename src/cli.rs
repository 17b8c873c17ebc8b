//! CLI argument parsing for memo2md
//!
//! Uses clap. Both positional input and `--output` have defaults, so a bare
//! `memo2md` converts `index.html` into `memos/`.

use std::path::PathBuf;

use clap::Parser;

pub use memo2md_core::format::OutputFormat;

/// memo2md - split an exported memo page into Markdown files
#[derive(Parser, Debug)]
#[command(name = "memo2md")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Exported memo page to read
    #[arg(default_value = memo2md_core::convert::DEFAULT_INPUT)]
    pub input: PathBuf,

    /// Directory to write Markdown files into
    #[arg(long, short, default_value = memo2md_core::convert::DEFAULT_OUTPUT_DIR)]
    pub output: PathBuf,

    /// TOML file overriding memo class names, time format and naming limits
    #[arg(long, env = "MEMO2MD_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output format for the summary
    #[arg(long, default_value = "human", value_parser = parse_output_format)]
    pub format: OutputFormat,

    /// Show which files would be written without writing them
    #[arg(long)]
    pub dry_run: bool,

    /// Suppress the summary (failures are still reported)
    #[arg(long, short)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, short)]
    pub verbose: bool,

    /// Log level or filter directive (e.g. debug, memo2md_core=trace)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long)]
    pub log_json: bool,
}

/// Parse output format from string
fn parse_output_format(s: &str) -> Result<OutputFormat, String> {
    s.parse::<OutputFormat>().map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_cli_help() {
        let result = Cli::try_parse_from(["memo2md", "--help"]);
        assert!(result.is_err()); // --help exits
    }

    #[test]
    fn test_parse_defaults() {
        let cli = Cli::try_parse_from(["memo2md"]).unwrap();
        assert_eq!(cli.input, PathBuf::from("index.html"));
        assert_eq!(cli.output, PathBuf::from("memos"));
        assert_eq!(cli.format, OutputFormat::Human);
        assert!(!cli.dry_run);
    }

    #[test]
    fn test_parse_paths_and_flags() {
        let cli = Cli::try_parse_from([
            "memo2md",
            "export.html",
            "-o",
            "archive",
            "--format",
            "json",
            "--dry-run",
            "-q",
        ])
        .unwrap();
        assert_eq!(cli.input, PathBuf::from("export.html"));
        assert_eq!(cli.output, PathBuf::from("archive"));
        assert_eq!(cli.format, OutputFormat::Json);
        assert!(cli.dry_run);
        assert!(cli.quiet);
    }

    #[test]
    fn test_parse_rejects_unknown_format() {
        assert!(Cli::try_parse_from(["memo2md", "--format", "records"]).is_err());
    }
}
