//! Conversion configuration for memo2md
//!
//! Every field has a default matching the exported memo page layout, so a
//! config file is only needed to override class names or naming limits.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Memo2mdError, Result};

pub const DEFAULT_MEMO_CLASS: &str = "memo";
pub const DEFAULT_TIME_CLASS: &str = "time";
pub const DEFAULT_CONTENT_CLASS: &str = "content";
pub const DEFAULT_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
pub const DEFAULT_MAX_NAME_LEN: usize = 20;
pub const DEFAULT_FALLBACK_NAME: &str = "untitled";

/// Settings that control how memos are located, named and timestamped
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConvertConfig {
    /// Class of the `div` wrapping each memo
    pub memo_class: String,
    /// Class of the `div` holding the memo timestamp
    pub time_class: String,
    /// Class of the `div` holding the memo body
    pub content_class: String,
    /// chrono format string for the memo timestamp (local time)
    pub time_format: String,
    /// Maximum length of a derived base name, in characters
    pub max_name_len: usize,
    /// Base name used when the first line sanitizes to nothing
    pub fallback_name: String,
}

impl Default for ConvertConfig {
    fn default() -> Self {
        Self {
            memo_class: DEFAULT_MEMO_CLASS.to_string(),
            time_class: DEFAULT_TIME_CLASS.to_string(),
            content_class: DEFAULT_CONTENT_CLASS.to_string(),
            time_format: DEFAULT_TIME_FORMAT.to_string(),
            max_name_len: DEFAULT_MAX_NAME_LEN,
            fallback_name: DEFAULT_FALLBACK_NAME.to_string(),
        }
    }
}

impl ConvertConfig {
    /// Load configuration from a TOML file and validate it
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| Memo2mdError::io_operation("read config", path.display(), e))?;
        let config: ConvertConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject settings that would make every memo fail or produce bad names
    pub fn validate(&self) -> Result<()> {
        for (key, value) in [
            ("memo_class", &self.memo_class),
            ("time_class", &self.time_class),
            ("content_class", &self.content_class),
        ] {
            if value.trim().is_empty() {
                return Err(Memo2mdError::invalid_config(format!(
                    "{key} must not be empty"
                )));
            }
            if value.chars().any(char::is_whitespace) {
                return Err(Memo2mdError::invalid_config(format!(
                    "{key} must be a single class name, got {value:?}"
                )));
            }
        }

        if self.time_format.is_empty() {
            return Err(Memo2mdError::invalid_config("time_format must not be empty"));
        }

        if self.max_name_len == 0 {
            return Err(Memo2mdError::invalid_config(
                "max_name_len must be at least 1",
            ));
        }

        let fallback = self.fallback_name.trim();
        if fallback.is_empty() || fallback.contains(['/', '\\']) {
            return Err(Memo2mdError::invalid_config(format!(
                "fallback_name must be a plain file name, got {:?}",
                self.fallback_name
            )));
        }

        Ok(())
    }
}
