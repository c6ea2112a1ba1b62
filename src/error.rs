//! Error types for voicedeals

use thiserror::Error;

/// Result type alias for voicedeals operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in voicedeals
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),

    /// Catalog loading or validation error
    #[error("catalog error: {0}")]
    Catalog(String),

    /// Speech-recognition error
    #[error("recognition error: {0}")]
    Recognition(String),

    /// Speech-synthesis error
    #[error("synthesis error: {0}")]
    Synthesis(String),

    /// IO error
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("toml error: {0}")]
    Toml(#[from] toml::de::Error),
}
