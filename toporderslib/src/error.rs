//! Error types for toporderslib

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading and ranking orders
#[derive(Error, Debug)]
pub enum TopOrdersError {
    /// Path does not exist
    #[error("path does not exist: {0}")]
    PathNotFound(PathBuf),

    /// Failed to open or read a file
    #[error("failed to read file '{path}': {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Malformed CSV (bad quoting, ragged rows, invalid UTF-8, missing header)
    #[error("malformed CSV: {0}")]
    Csv(#[from] csv::Error),

    /// A required column is absent from the header row
    #[error("missing required column '{0}'")]
    MissingColumn(String),

    /// A value in a numeric column could not be read as a number
    #[error("non-numeric value '{value}' in column '{column}' at line {line}")]
    NonNumeric {
        column: String,
        line: u64,
        value: String,
    },
}

/// Broad failure category, used for diagnostics
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The input file is missing or unreadable
    FileAccess,
    /// The input is not valid CSV or lacks a required column
    Parse,
    /// A sort column holds values that cannot be compared numerically
    Type,
}

impl TopOrdersError {
    /// Category of this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            TopOrdersError::PathNotFound(_)
            | TopOrdersError::FileRead { .. } => ErrorKind::FileAccess,
            TopOrdersError::Csv(e) if e.is_io_error() => ErrorKind::FileAccess,
            TopOrdersError::Csv(_) | TopOrdersError::MissingColumn(_) => ErrorKind::Parse,
            TopOrdersError::NonNumeric { .. } => ErrorKind::Type,
        }
    }
}
