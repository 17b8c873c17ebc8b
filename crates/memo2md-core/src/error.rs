//! Error types and exit codes for memo2md
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure (one or more memos failed, IO errors)
//! - 2: Usage error (bad flags/args)
//! - 3: Data error (missing source document, invalid configuration)

use std::path::PathBuf;
use thiserror::Error;

/// Process exit codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - missing source, invalid config (3)
    Data = 3,
}

/// Errors that can occur while converting memos
#[derive(Error, Debug)]
pub enum Memo2mdError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human or json)")]
    UnknownFormat(String),

    // Data errors (exit code 3)
    #[error("source file not found: {}", path.display())]
    MissingSource { path: PathBuf },

    #[error("invalid configuration: {reason}")]
    InvalidConfig { reason: String },

    // Per-memo failures (exit code 1)
    #[error("memo is missing its {missing} element")]
    MemoStructure { missing: &'static str },

    #[error("invalid memo timestamp {value:?}: {reason}")]
    TimestampFormat { value: String, reason: String },

    // Generic failures (exit code 1)
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("failed to {operation} {target}: {reason}")]
    FailedOperationWithTarget {
        operation: String,
        target: String,
        reason: String,
    },
}

impl Memo2mdError {
    /// Create an error for a failed IO operation with context
    pub fn io_operation(
        operation: &str,
        path: impl std::fmt::Display,
        error: impl std::fmt::Display,
    ) -> Self {
        Memo2mdError::FailedOperationWithTarget {
            operation: operation.to_string(),
            target: path.to_string(),
            reason: error.to_string(),
        }
    }

    /// Create an error for a rejected configuration
    pub fn invalid_config(reason: impl Into<String>) -> Self {
        Memo2mdError::InvalidConfig {
            reason: reason.into(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            Memo2mdError::UnknownFormat(_) => ExitCode::Usage,

            Memo2mdError::MissingSource { .. }
            | Memo2mdError::InvalidConfig { .. }
            | Memo2mdError::Toml(_) => ExitCode::Data,

            Memo2mdError::MemoStructure { .. }
            | Memo2mdError::TimestampFormat { .. }
            | Memo2mdError::Json(_)
            | Memo2mdError::FailedOperationWithTarget { .. } => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    pub fn error_type(&self) -> &'static str {
        match self {
            Memo2mdError::UnknownFormat(_) => "unknown_format",
            Memo2mdError::MissingSource { .. } => "missing_source",
            Memo2mdError::InvalidConfig { .. } => "invalid_config",
            Memo2mdError::MemoStructure { .. } => "memo_structure",
            Memo2mdError::TimestampFormat { .. } => "timestamp_format",
            Memo2mdError::Json(_) => "json_error",
            Memo2mdError::Toml(_) => "toml_error",
            Memo2mdError::FailedOperationWithTarget { .. } => "failed_operation_with_target",
        }
    }

    /// Convert error to JSON representation for structured error output.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.exit_code() as i32,
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }
}

/// Result type alias for memo2md operations
pub type Result<T> = std::result::Result<T, Memo2mdError>;
