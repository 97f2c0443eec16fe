//! Error types for the tictac crate
//!
//! Game play itself never fails: illegal moves are ignored and configuration
//! is clamped. These errors cover the text and file boundaries only.

use thiserror::Error;

/// Main error type for the tictac crate
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("board string too short: expected at least {expected} cells, got {got} in '{context}'")]
    InvalidBoardLength {
        expected: usize,
        got: usize,
        context: String,
    },

    #[error("board string has {cells} cells, which is not a square of a side >= 2, in '{context}'")]
    NonSquareBoard { cells: usize, context: String },

    #[error("invalid character '{character}' at position {position} in '{context}'")]
    InvalidCellCharacter {
        character: char,
        position: usize,
        context: String,
    },

    #[error("invalid marker '{input}' (expected 'X' or 'O')")]
    InvalidMarker { input: String },

    #[error("invalid cell '{input}': expected a number between 1 and {max}")]
    InvalidCellInput { input: String, max: usize },

    #[error("failed to {operation}: {source}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("progress bar template error: {message}")]
    ProgressBarTemplate { message: String },
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Error::Io {
            operation: "IO operation".to_string(),
            source,
        }
    }
}
