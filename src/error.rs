//! Error types for the statement converter.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for converter operations
pub type Result<T> = std::result::Result<T, ConvertError>;

/// Errors that can occur while converting a statement.
#[derive(Error, Debug)]
pub enum ConvertError {
    /// Failed to open, read or write one of the two files
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV reading or writing error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// The source path does not point to a regular file
    #[error("Mintos CSV {0:?} is not a file. Try --help.")]
    SourceNotAFile(PathBuf),

    /// The holding URL does not match the expected Parqet pattern
    #[error(
        "holding URL \"{0}\" does not match https://app.parqet.com/p/<portfolio>/h/<holding>. Try --help."
    )]
    InvalidHoldingUrl(String),

    /// The amount field of an otherwise acceptable row is not numeric
    #[error("invalid amount \"{value}\" at row {row}")]
    InvalidAmount { row: usize, value: String },
}
