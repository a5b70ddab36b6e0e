//! Parse error types for resource files.

use thiserror::Error;

/// An error that occurred while parsing a resource file.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ParseError {
    /// A syntax error with location information.
    #[error("syntax error at {line}:{column}: {message}")]
    Syntax {
        line: usize,
        column: usize,
        message: String,
    },
}

impl ParseError {
    /// The 1-based line and column of the error.
    pub fn position(&self) -> (usize, usize) {
        match self {
            ParseError::Syntax { line, column, .. } => (*line, *column),
        }
    }
}
