//! Error handling for the occupation coder.
//!
//! Only failures that stop a run live here: unreadable files, broken
//! schemas and invalid configuration. Per-entry data-quality conditions
//! (unclassified text, conflicting corrections, unknown survey codes) are
//! ordinary values and never surface as errors.

pub mod util;

use std::io;
use std::path::{Path, PathBuf};

use arrow::error::ArrowError;
use parquet::errors::ParquetError;

/// Specialized error type for the occupation coder
#[derive(Debug, thiserror::Error)]
pub enum OccupationError {
    /// Error opening, reading or writing a file
    #[error("IO error at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Error building or converting Arrow data
    #[error("Arrow error: {0}")]
    Arrow(#[from] ArrowError),

    /// Error reading or writing Parquet data
    #[error("Parquet error: {0}")]
    Parquet(#[from] ParquetError),

    /// Error reading or writing delimited text
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Error converting rows to and from Arrow record batches
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Error opening or reading a spreadsheet workbook
    #[error("Spreadsheet error: {0}")]
    Spreadsheet(String),

    /// Invalid or incomplete configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// A required column is absent from an input table
    #[error("Column '{column}' not found")]
    ColumnNotFound { column: String },

    /// A column exists but cannot be read as the expected type
    #[error("Column '{column}' cannot be read as {expected}")]
    ColumnType { column: String, expected: String },

    /// A required sheet is absent from a correction workbook
    #[error("Sheet '{sheet}' not found in correction workbook")]
    MissingSheet { sheet: String },

    /// Input that is structurally readable but unusable
    #[error("Validation error: {0}")]
    Validation(String),
}

impl OccupationError {
    /// Wrap an IO error together with the path it occurred on
    pub fn io(path: impl AsRef<Path>, source: io::Error) -> Self {
        Self::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }
}

impl From<serde_arrow::Error> for OccupationError {
    fn from(error: serde_arrow::Error) -> Self {
        Self::Serialization(error.to_string())
    }
}

impl From<serde_json::Error> for OccupationError {
    fn from(error: serde_json::Error) -> Self {
        Self::Serialization(error.to_string())
    }
}

impl From<calamine::Error> for OccupationError {
    fn from(error: calamine::Error) -> Self {
        Self::Spreadsheet(error.to_string())
    }
}

/// Result type for occupation coder operations
pub type Result<T> = std::result::Result<T, OccupationError>;
