//! Errors raised while loading or exporting dialect definitions
//!
//! Querying a dictionary never fails; only the file boundary does.

use std::path::PathBuf;

/// Result alias for dialect loading
pub type DictionaryResult<T> = Result<T, DictionaryError>;

/// Dialect loading or export failure
#[derive(Debug, thiserror::Error)]
pub enum DictionaryError {
    /// The dialect file could not be read or written
    #[error("cannot access dialect file {path}: {source}")]
    Io {
        /// File path
        path: PathBuf,
        /// Underlying failure
        #[source]
        source: std::io::Error,
    },

    /// TOML document does not describe a dialect
    #[error("invalid TOML dialect: {0}")]
    TomlDecode(#[from] toml::de::Error),

    /// Dialect cannot be written as TOML
    #[error("cannot encode dialect as TOML: {0}")]
    TomlEncode(#[from] toml::ser::Error),

    /// JSON document does not describe a dialect, or cannot be written
    #[error("invalid JSON dialect: {0}")]
    Json(#[from] serde_json::Error),

    /// File extension is neither `.toml` nor `.json`
    #[error("unsupported dialect file format: {0}")]
    UnsupportedFormat(String),
}
