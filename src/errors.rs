//! Shared error types for the application
//!
//! Classification itself never fails; these errors cover threshold
//! validation, configuration loading and case-table parsing.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for sizemap operations
#[derive(Debug, Error)]
pub enum Error {
    /// File system related errors
    #[error("File system error: {message}")]
    FileSystem {
        message: String,
        path: Option<PathBuf>,
        #[source]
        source: Option<std::io::Error>,
    },

    /// Case table or config parse errors
    #[error("Parse error in {}: {message}", .path.display())]
    Parse {
        path: PathBuf,
        message: String,
    },

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    /// IO errors
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON errors
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// YAML errors
    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),

    /// TOML errors
    #[error(transparent)]
    Toml(#[from] toml::de::Error),
}

impl Error {
    /// Create a file system error with path context
    pub fn file_system(
        message: impl Into<String>,
        path: impl Into<PathBuf>,
        source: std::io::Error,
    ) -> Self {
        Self::FileSystem {
            message: message.into(),
            path: Some(path.into()),
            source: Some(source),
        }
    }

    /// Create a parse error for a file
    pub fn parse(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Parse {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// Result type alias using our error type
pub type Result<T> = std::result::Result<T, Error>;
