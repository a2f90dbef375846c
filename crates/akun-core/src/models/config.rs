//! Configuration structures for the parser and its front ends.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{AkunError, Result};

/// Main configuration for akun.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AkunConfig {
    /// Batch parser configuration.
    pub parser: ParserConfig,

    /// Output configuration.
    pub output: OutputConfig,
}

/// Batch parser configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
    /// Earliest year accepted in an expiry date.
    pub min_year: u16,

    /// Reject dates that do not exist in the calendar (e.g. Feb 30).
    pub validate_calendar: bool,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            min_year: 2020,
            validate_calendar: false,
        }
    }
}

/// Output format for parse results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// JSON document with camelCase keys.
    #[default]
    Json,
    /// One CSV row per account.
    Csv,
    /// Human-readable summary.
    Text,
}

impl OutputFormat {
    /// File extension used when writing results to disk.
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Csv => "csv",
            Self::Text => "txt",
        }
    }
}

/// Output configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Default output format.
    pub format: OutputFormat,

    /// Pretty-print JSON output.
    pub pretty: bool,
}

impl AkunConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content)
            .map_err(|e| AkunError::Config(format!("{}: {}", path.display(), e)))
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_defaults() {
        let config = AkunConfig::default();
        assert_eq!(config.parser.min_year, 2020);
        assert!(!config.parser.validate_calendar);
        assert_eq!(config.output.format, OutputFormat::Json);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: AkunConfig =
            serde_json::from_str(r#"{"parser": {"validate_calendar": true}}"#).unwrap();
        assert_eq!(config.parser.min_year, 2020);
        assert!(config.parser.validate_calendar);
        assert_eq!(config.output, OutputConfig::default());
    }

    #[test]
    fn test_output_format_names() {
        let format: OutputFormat = serde_json::from_str(r#""csv""#).unwrap();
        assert_eq!(format, OutputFormat::Csv);
        assert_eq!(format.extension(), "csv");
    }
}
