//! Error types for TOC processing.

use thiserror::Error;

/// Unified error type for loading, saving and configuring TOC processing.
///
/// The transformations themselves are total; these errors only surface at
/// the document and configuration edges.
#[derive(Debug, Error)]
pub enum TocError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// JSON serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// TOML parse error
    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// TOML serialization error
    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    /// Unknown document format
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),
}
