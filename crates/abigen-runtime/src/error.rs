//! Error types for abigen

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for abigen operations
pub type Result<T> = std::result::Result<T, AbigenError>;

/// Main error type for abigen operations
#[derive(Debug, Error)]
pub enum AbigenError {
    /// Artifact content is not valid structured data
    #[error("Parse failure in {}: {message}", .path.display())]
    ParseFailure { path: PathBuf, message: String },

    /// Identifier assignment was attempted on a fragment without a name
    #[error("Cannot assign an identifier to an unnamed {kind} fragment")]
    UnidentifiableFragment { kind: String },

    /// Two fragments of one destination resolved to the same binding name
    #[error("Duplicate identifier '{identifier}': {first} conflicts with {second}")]
    DuplicateIdentifier { identifier: String, first: String, second: String },

    /// Output directory or file could not be created or written
    #[error("Failed to write {}: {source}", .path.display())]
    WriteFailure {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// I/O error wrapper
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization error wrapper
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl AbigenError {
    pub fn parse_failure(path: impl Into<PathBuf>, message: impl ToString) -> Self {
        Self::ParseFailure { path: path.into(), message: message.to_string() }
    }

    pub fn unidentifiable(kind: impl ToString) -> Self {
        Self::UnidentifiableFragment { kind: kind.to_string() }
    }

    pub fn duplicate_identifier(
        identifier: impl Into<String>,
        first: impl Into<String>,
        second: impl Into<String>,
    ) -> Self {
        Self::DuplicateIdentifier {
            identifier: identifier.into(),
            first: first.into(),
            second: second.into(),
        }
    }

    pub fn write_failure(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::WriteFailure { path: path.into(), source }
    }
}
