//! Shared error types for dataset loading.

use std::io;

/// Errors that can occur when loading a dataset.
#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("line {line}, column {column}: invalid numeric value {value:?}")]
    ParseField {
        line: usize,
        column: usize,
        value: String,
    },

    #[error("line {line}: expected {expected} features, got {got}")]
    RowLength {
        line: usize,
        expected: usize,
        got: usize,
    },

    #[error("no valid rows in input")]
    Empty,
}
