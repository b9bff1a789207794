//! Lenient JSON error type.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum JsonError {
    #[error("invalid JSON at byte {0}")]
    Invalid(usize),
    #[error("invalid UTF-8")]
    InvalidUtf8,
    #[error("{0}")]
    Parse(#[from] serde_json::Error),
}

impl JsonError {
    /// One-based line of the failure, when the parser reported one.
    pub fn line(&self) -> Option<usize> {
        match self {
            JsonError::Parse(err) if err.line() > 0 => Some(err.line()),
            _ => None,
        }
    }

    /// One-based column of the failure, when the parser reported one.
    pub fn column(&self) -> Option<usize> {
        match self {
            JsonError::Parse(err) if err.line() > 0 => Some(err.column()),
            _ => None,
        }
    }
}
