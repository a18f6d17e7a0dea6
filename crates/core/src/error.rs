//! Error types for wikilens operations.
//!
//! Analysis itself never fails: every input text produces a complete
//! [`AnalysisRecord`](crate::AnalysisRecord). The variants below cover the
//! places that can: loading and validating configuration at startup, and
//! talking to the encyclopedia API.
//!
//! # Example
//!
//! ```rust
//! use wikilens_core::{AnalyzerConfig, WikilensError};
//!
//! let config = AnalyzerConfig::builder().reading_speed(0).build();
//! match config.validate() {
//!     Err(WikilensError::Config(msg)) => println!("bad config: {}", msg),
//!     _ => unreachable!(),
//! }
//! ```

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for wikilens.
#[derive(Error, Debug)]
pub enum WikilensError {
    /// HTTP request errors from reqwest.
    #[cfg(feature = "fetch")]
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Request timeout.
    #[error("Request timed out after {timeout} seconds")]
    Timeout { timeout: u64 },

    /// Invalid URL provided or derived from configuration.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// The encyclopedia has no article with the requested title.
    #[error("Article not found: {0}")]
    ArticleNotFound(String),

    /// The encyclopedia answered with something other than the expected shape.
    #[error("Unexpected upstream response: {0}")]
    UpstreamResponse(String),

    /// Invalid analyzer configuration.
    ///
    /// Detected once at startup; an analyzer is never built from a config
    /// that fails validation.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Rejected client input, e.g. a saved article without a title.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Complexity thresholds out of order or not finite.
    #[error("Invalid complexity thresholds: simple_below={simple_below}, moderate_below={moderate_below}")]
    InvalidThresholds { simple_below: f64, moderate_below: f64 },

    /// Malformed line in a directive file.
    #[error("Config parse error at line {line}: {message}")]
    ConfigParse { line: usize, message: String },

    /// File not found.
    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    /// I/O errors while reading inputs or config files.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization failure.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias for WikilensError.
pub type Result<T> = std::result::Result<T, WikilensError>;
