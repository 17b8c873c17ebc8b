//! memo2md Core Library
//!
//! Turns an exported memo page into one Markdown file per memo.

pub mod config;
pub mod convert;
pub mod error;
pub mod filename;
pub mod format;
pub mod logging;
pub mod markdown;
pub mod memo;
pub mod node;
pub mod tags;

pub use convert::{convert_document, convert_file, ConversionSummary, ConvertOptions};
