//! Error types for the brasindice-core library.

use thiserror::Error;

/// Main error type for the brasindice library.
#[derive(Error, Debug)]
pub enum BrasindiceError {
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Errors raised while mapping a single tokenized line.
///
/// These never escape [`crate::table::BrasindiceParser::parse`]; they are
/// converted into per-line entries in the parse result.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RowError {
    /// The line does not have the fixed column count of the feed.
    #[error("expected {expected} columns, found {found}")]
    ColumnCount { expected: usize, found: usize },

    /// One of the identity fields is empty.
    #[error("missing required field: {0}")]
    MissingField(&'static str),
}

/// Result type for the brasindice library.
pub type Result<T> = std::result::Result<T, BrasindiceError>;
