//! Error types for footnote-core

use thiserror::Error;

/// Result alias used across the crate
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised around the resolver (I/O, decoding, configuration).
///
/// Resolving markers itself never fails: invalid references are stripped
/// from the text and logged instead.
#[derive(Debug, Error)]
pub enum Error {
    /// Reading an input or config file failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Answer document is not valid JSON or has the wrong shape
    #[error("Invalid answer JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Config file is not valid TOML
    #[error("Invalid config file: {0}")]
    Toml(#[from] toml::de::Error),

    /// Config parsed but holds unusable values
    #[error("Configuration error: {0}")]
    Config(String),
}
