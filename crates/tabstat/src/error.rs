//! Error types for the tabstat library.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for tabstat operations.
#[derive(Debug, Error)]
pub enum TabstatError {
    /// Error reading or accessing a file.
    #[error("IO error for '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Error from the CSV library.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Invalid delimiter specified.
    #[error("Invalid delimiter: {0}")]
    InvalidDelimiter(String),

    /// Empty file or no header row.
    #[error("Empty data: {0}")]
    EmptyData(String),

    /// None of the requested columns exist in the header.
    #[error("Columns not found: {}", columns.join(", "))]
    ColumnNotFound { columns: Vec<String> },

    /// A grouped analysis step failed.
    #[error("Aggregation '{analysis}' failed: {message}")]
    Aggregation { analysis: String, message: String },

    /// Configuration error (plans, presets, manifests).
    #[error("Configuration error: {0}")]
    Config(String),

    /// Error writing the report.
    #[error("Persistence error: {0}")]
    Persistence(String),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl TabstatError {
    /// Returns true if the error means the source data could not be loaded.
    pub fn is_source_unavailable(&self) -> bool {
        matches!(
            self,
            TabstatError::Io { .. } | TabstatError::Csv(_) | TabstatError::EmptyData(_)
        )
    }
}

/// Result type alias for tabstat operations.
pub type Result<T> = std::result::Result<T, TabstatError>;
