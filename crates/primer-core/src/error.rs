//! Error types for Primer core operations.
//!
//! Search, highlighting and route resolution never fail; a missing topic is
//! an ordinary `None`. The errors here cover the fallible edges: loading a
//! catalog, reading configuration, and callers that must treat a missing
//! topic as a failure.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using PrimerError
pub type Result<T> = std::result::Result<T, PrimerError>;

/// Core error types for Primer operations.
#[derive(Error, Debug)]
pub enum PrimerError {
    // === Catalog Errors ===
    /// The catalog file is missing
    #[error("catalog not found at {path}")]
    CatalogNotFound { path: PathBuf },

    /// The catalog parsed but violates a topic invariant
    #[error("invalid catalog: {reason}")]
    InvalidCatalog { reason: String },

    /// The catalog file extension is not one we can read
    #[error("unsupported catalog format: {path}")]
    UnsupportedFormat { path: PathBuf },

    // === Lookup Errors ===
    /// A caller required a topic that does not exist
    #[error("topic not found: {id}")]
    TopicNotFound { id: String },

    // === Configuration Errors ===
    /// Configuration file parsing failed
    #[error("configuration error: {reason}")]
    ConfigError { reason: String },

    // === I/O Errors ===
    /// Generic I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    // === Serialization Errors ===
    /// Serialization/deserialization failed
    #[error("serialization error: {0}")]
    Serialization(String),
}

impl PrimerError {
    /// Returns true if this error was caused by catalog content rather than
    /// the environment, i.e. fixing the catalog file would resolve it.
    pub fn is_content_error(&self) -> bool {
        matches!(
            self,
            PrimerError::InvalidCatalog { .. }
                | PrimerError::UnsupportedFormat { .. }
                | PrimerError::Serialization(_)
        )
    }

    /// Create an invalid catalog error
    pub fn invalid_catalog(reason: impl Into<String>) -> Self {
        PrimerError::InvalidCatalog {
            reason: reason.into(),
        }
    }
}

impl From<serde_json::Error> for PrimerError {
    fn from(err: serde_json::Error) -> Self {
        PrimerError::Serialization(err.to_string())
    }
}

impl From<toml::de::Error> for PrimerError {
    fn from(err: toml::de::Error) -> Self {
        PrimerError::Serialization(err.to_string())
    }
}
