//! Memo conversion pipeline
//!
//! For each memo: render content, pull out tags, trim, derive a name, parse
//! the timestamp, write the file and stamp it. A failing memo is recorded in
//! the summary and the run moves on to the next one.

use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Instant;

use chrono::{DateTime, Duration, Local, LocalResult, NaiveDateTime, Offset, TimeZone};
use filetime::FileTime;
use serde::Serialize;
use tracing::debug;

use crate::config::ConvertConfig;
use crate::error::{Memo2mdError, Result};
use crate::filename::{derive_base_name, unique_path_with};
use crate::markdown::render;
use crate::memo::{locate_memos, RawMemo};
use crate::node::Node;
use crate::tags::{extract_tags, tag_line};
use crate::trace_time;

pub const DEFAULT_INPUT: &str = "index.html";
pub const DEFAULT_OUTPUT_DIR: &str = "memos";

/// Where to read from, where to write to, and how
#[derive(Debug, Clone)]
pub struct ConvertOptions {
    pub input: PathBuf,
    pub output_dir: PathBuf,
    /// Resolve names and timestamps but write nothing
    pub dry_run: bool,
    pub config: ConvertConfig,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            dry_run: false,
            config: ConvertConfig::default(),
        }
    }
}

/// A memo that could not be converted, with the raw inputs for debugging
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MemoFailure {
    pub index: usize,
    #[serde(rename = "type")]
    pub error_type: &'static str,
    pub error: String,
    pub time: String,
    pub content: String,
}

/// Outcome of a whole run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ConversionSummary {
    pub succeeded: usize,
    pub failed: usize,
    /// Paths in write order (planned paths on a dry run)
    pub written: Vec<PathBuf>,
    pub failures: Vec<MemoFailure>,
}

impl ConversionSummary {
    pub fn is_clean(&self) -> bool {
        self.failed == 0
    }

    fn record_success(&mut self, path: PathBuf) {
        self.succeeded += 1;
        self.written.push(path);
    }

    fn record_failure(&mut self, memo: &RawMemo, err: &Memo2mdError) {
        self.failed += 1;
        self.failures.push(MemoFailure {
            index: memo.index,
            error_type: err.error_type(),
            error: err.to_string(),
            time: memo.raw_time().to_string(),
            content: memo.raw_content().to_string(),
        });
    }
}

/// Markdown for one memo, ready to be written
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertedMemo {
    /// Trimmed body with tags removed
    pub body: String,
    pub tags: Vec<String>,
    pub base_name: String,
}

impl ConvertedMemo {
    /// Render, strip tags, trim and name a memo's content tree
    pub fn from_content(content: &Node, config: &ConvertConfig) -> Self {
        let markdown = render(content);
        let (stripped, tags) = extract_tags(&markdown);
        let body = stripped.trim().to_string();
        let base_name = derive_base_name(&body, config.max_name_len, &config.fallback_name);

        Self {
            body,
            tags,
            base_name,
        }
    }

    /// File content: the body, then a blank line and the tag line if any
    pub fn file_content(&self) -> String {
        match tag_line(&self.tags) {
            Some(line) => format!("{}\n\n{}", self.body, line),
            None => self.body.clone(),
        }
    }
}

/// Map a wall-clock time onto an instant in `tz`.
///
/// Repeated times take the earlier instant. Times skipped by a forward
/// transition use the offset in effect a day earlier, so 02:30 in a
/// 02:00 -> 03:00 gap lands at 03:30 on the clock.
pub fn resolve_local<Tz: TimeZone>(tz: &Tz, naive: &NaiveDateTime) -> DateTime<Tz> {
    match tz.from_local_datetime(naive) {
        LocalResult::Single(time) | LocalResult::Ambiguous(time, _) => time,
        LocalResult::None => {
            let before = tz.offset_from_utc_datetime(&(*naive - Duration::days(1)));
            let utc = *naive - Duration::seconds(i64::from(before.fix().local_minus_utc()));
            tz.from_utc_datetime(&utc)
        }
    }
}

/// Parse a memo time string as local time
pub fn parse_memo_time(value: &str, format: &str) -> Result<DateTime<Local>> {
    let naive =
        NaiveDateTime::parse_from_str(value, format).map_err(|e| Memo2mdError::TimestampFormat {
            value: value.to_string(),
            reason: e.to_string(),
        })?;

    Ok(resolve_local(&Local, &naive))
}

fn write_memo(path: &Path, content: &str, time: DateTime<Local>) -> Result<()> {
    fs::write(path, content).map_err(|e| Memo2mdError::io_operation("write", path.display(), e))?;

    let stamp = FileTime::from_unix_time(time.timestamp(), time.timestamp_subsec_nanos());
    filetime::set_file_times(path, stamp, stamp)
        .map_err(|e| Memo2mdError::io_operation("set times on", path.display(), e))?;

    Ok(())
}

struct MemoWriter<'a> {
    options: &'a ConvertOptions,
    claimed: HashSet<PathBuf>,
}

impl MemoWriter<'_> {
    fn convert(&mut self, memo: &RawMemo) -> Result<PathBuf> {
        let time = memo
            .time
            .as_deref()
            .ok_or(Memo2mdError::MemoStructure { missing: "time" })?;
        let content = memo
            .content
            .as_ref()
            .ok_or(Memo2mdError::MemoStructure { missing: "content" })?;

        let converted = ConvertedMemo::from_content(content, &self.options.config);
        let timestamp = parse_memo_time(time, &self.options.config.time_format)?;

        let path = unique_path_with(&self.options.output_dir, &converted.base_name, |p| {
            self.claimed.contains(p) || p.exists()
        });

        if !self.options.dry_run {
            write_memo(&path, &converted.file_content(), timestamp)?;
        }
        self.claimed.insert(path.clone());

        debug!(
            memo = memo.index,
            path = %path.display(),
            tags = converted.tags.len(),
            dry_run = self.options.dry_run,
            "memo_written"
        );
        Ok(path)
    }
}

/// Convert every memo in an already-loaded document.
///
/// The output directory must already exist unless this is a dry run.
pub fn convert_document(html: &str, options: &ConvertOptions) -> Result<ConversionSummary> {
    let start = Instant::now();
    let memos = locate_memos(html, &options.config)?;
    trace_time!(start, "locate_memos", count = memos.len());

    let mut writer = MemoWriter {
        options,
        claimed: HashSet::new(),
    };
    let mut summary = ConversionSummary::default();

    for memo in &memos {
        match writer.convert(memo) {
            Ok(path) => summary.record_success(path),
            Err(err) => {
                debug!(
                    memo = memo.index,
                    time = memo.raw_time(),
                    error = %err,
                    "memo_failed"
                );
                summary.record_failure(memo, &err);
            }
        }
    }

    trace_time!(
        start,
        "convert_document",
        succeeded = summary.succeeded,
        failed = summary.failed
    );
    Ok(summary)
}

/// Read `options.input` and convert it into `options.output_dir`.
///
/// A missing input file aborts the run with [`Memo2mdError::MissingSource`]
/// before anything is written. Everything after that is per memo.
pub fn convert_file(options: &ConvertOptions) -> Result<ConversionSummary> {
    if !options.dry_run {
        fs::create_dir_all(&options.output_dir).map_err(|e| {
            Memo2mdError::io_operation("create output directory", options.output_dir.display(), e)
        })?;
    }

    let html = match fs::read_to_string(&options.input) {
        Ok(html) => html,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            return Err(Memo2mdError::MissingSource {
                path: options.input.clone(),
            })
        }
        Err(e) => return Err(Memo2mdError::io_operation("read", options.input.display(), e)),
    };

    debug!(input = %options.input.display(), bytes = html.len(), "read_source");
    convert_document(&html, options)
}
