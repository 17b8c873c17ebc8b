//! Output format handling for memo2md
//!
//! - human: separator line plus success/failure counts
//! - json: a single machine-readable summary object

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Memo2mdError;

/// Output format for the conversion summary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output for machine consumption
    Json,
}

impl FromStr for OutputFormat {
    type Err = Memo2mdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "human" => Ok(OutputFormat::Human),
            "json" => Ok(OutputFormat::Json),
            other => Err(Memo2mdError::UnknownFormat(other.to_string())),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Human => write!(f, "human"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!("human".parse::<OutputFormat>().unwrap(), OutputFormat::Human);
    }

    #[test]
    fn test_unknown_format() {
        let err = "records".parse::<OutputFormat>().unwrap_err();
        assert!(matches!(err, Memo2mdError::UnknownFormat(ref f) if f == "records"));
    }
}
