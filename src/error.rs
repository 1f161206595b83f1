//! Error types for the parenting hub
//!
//! Centralized error handling using snafu for ergonomic error definitions.
//! Storage backends report a narrower [`StorageError`](crate::storage::StorageError)
//! which converts into [`Error::Storage`].

use snafu::Snafu;

use crate::storage::StorageError;

/// Main error type for the crate
#[derive(Debug, Snafu)]
pub enum Error {
    /// Invalid input or configuration
    #[snafu(display("Invalid: {message}"))]
    Invalid { message: String },

    /// IO error (config file, file-backed storage)
    #[snafu(display("IO error: {source}"))]
    Io { source: std::io::Error },

    /// JSON serialization/deserialization error
    #[snafu(display("JSON error: {source}"))]
    Json { source: serde_json::Error },

    /// TOML deserialization error
    #[snafu(display("TOML parse error: {source}"))]
    TomlDe { source: toml::de::Error },

    /// TOML serialization error
    #[snafu(display("TOML serialize error: {source}"))]
    TomlSe { source: toml::ser::Error },

    /// Key-value store failure
    #[snafu(display("Storage error: {source}"))]
    Storage { source: StorageError },

    /// Language code outside the supported set
    #[snafu(display("Unsupported language: {code}"))]
    UnsupportedLanguage { code: String },

    /// No translation document bundled for a language
    #[snafu(display("No translation document for language '{code}'"))]
    MissingDocument { code: String },

    /// A second habit was added while one is already active
    #[snafu(display("Only {limit} habit can be active at a time"))]
    HabitLimit { limit: usize },

    /// Background task failed to complete
    #[snafu(display("Task error: {message}"))]
    Task { message: String },
}

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Error::Io { source }
    }
}

impl From<serde_json::Error> for Error {
    fn from(source: serde_json::Error) -> Self {
        Error::Json { source }
    }
}

impl From<toml::de::Error> for Error {
    fn from(source: toml::de::Error) -> Self {
        Error::TomlDe { source }
    }
}

impl From<toml::ser::Error> for Error {
    fn from(source: toml::ser::Error) -> Self {
        Error::TomlSe { source }
    }
}

impl From<StorageError> for Error {
    fn from(source: StorageError) -> Self {
        Error::Storage { source }
    }
}

/// Result type alias for convenience
pub type Result<T, E = Error> = std::result::Result<T, E>;
