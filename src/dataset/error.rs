//! Dataset error types
//!
//! Errors raised while loading the launch records table. All of them are
//! fatal at startup.

use thiserror::Error;

/// Errors that can occur while loading a dataset
#[derive(Error, Debug)]
pub enum DatasetError {
    /// I/O operation failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The CSV reader failed (bad quoting, unequal row lengths, ...)
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A required column is absent from the header row
    #[error("Missing column: {0}")]
    MissingColumn(String),

    /// A row could not be converted into a launch record
    #[error("Invalid record at line {line}: {message}")]
    InvalidRecord { line: u64, message: String },
}

/// Result type alias for dataset operations
pub type DatasetResult<T> = Result<T, DatasetError>;
