//! Configuration for the footnote resolver and its CLI

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{Error, Result};

/// Main configuration, loaded from TOML
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FootnoteConfig {
    /// Logging configuration
    pub logging: LoggingConfig,
    /// JSON output configuration
    pub output: OutputConfig,
    /// Citation label configuration
    pub labels: LabelOptions,
}

impl FootnoteConfig {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let raw = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml(&raw)
    }

    /// Parse configuration from TOML text
    pub fn from_toml(raw: &str) -> Result<Self> {
        let config: Self = toml::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.logging.filter.trim().is_empty() {
            return Err(Error::Config("logging.filter must not be empty".to_string()));
        }
        if self.labels.keep == 0 {
            return Err(Error::Config("labels.keep must be at least 1".to_string()));
        }
        if self.labels.truncation_limit < self.labels.keep * 2 {
            return Err(Error::Config(format!(
                "labels.truncation_limit ({}) must be at least twice labels.keep ({})",
                self.labels.truncation_limit, self.labels.keep
            )));
        }
        Ok(())
    }
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `EnvFilter` directive used when `RUST_LOG` is unset.
    ///
    /// Targets match by prefix, so `footnote` also covers `footnote_core`.
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "footnote=info".to_string(),
        }
    }
}

/// JSON output configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Pretty-print JSON output
    pub pretty: bool,
}

/// Options for [`Citation::display_label`](crate::Citation::display_label)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LabelOptions {
    /// Shorten long file paths
    pub truncate: bool,
    /// File paths longer than this many characters get shortened (default: 50)
    pub truncation_limit: usize,
    /// Characters kept at each end of a shortened path (default: 20)
    pub keep: usize,
}

impl Default for LabelOptions {
    fn default() -> Self {
        Self {
            truncate: true,
            truncation_limit: 50,
            keep: 20,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    #[test]
    fn test_empty_toml_gives_defaults() {
        let config = FootnoteConfig::from_toml("").unwrap();
        assert_eq!(config, FootnoteConfig::default());
    }

    #[test]
    fn test_default_log_filter() {
        assert_eq!(LoggingConfig::default().filter, "footnote=info");
    }

    #[test]
    fn test_partial_sections() {
        let config = FootnoteConfig::from_toml(
            r#"
            [output]
            pretty = true

            [labels]
            truncate = false
            "#,
        )
        .unwrap();

        assert!(config.output.pretty);
        assert!(!config.labels.truncate);
        assert_eq!(config.labels.truncation_limit, 50);
        assert_eq!(config.logging, LoggingConfig::default());
    }

    #[test]
    fn test_rejects_bad_label_bounds() {
        let err = FootnoteConfig::from_toml("[labels]\ntruncation_limit = 10\nkeep = 20\n").unwrap_err();
        assert!(matches!(err, Error::Config(_)));

        let err = FootnoteConfig::from_toml("[labels]\nkeep = 0\n").unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_rejects_invalid_toml() {
        let err = FootnoteConfig::from_toml("[output\npretty = true").unwrap_err();
        assert!(matches!(err, Error::Toml(_)));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[logging]\nfilter = \"footnote_core=debug\"").unwrap();

        let config = FootnoteConfig::load(file.path()).unwrap();
        assert_eq!(config.logging.filter, "footnote_core=debug");
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = FootnoteConfig::load(dir.path().join("missing.toml")).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}
