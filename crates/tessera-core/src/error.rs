//! Core error types

use thiserror::Error;

/// Errors from parsing user-entered colours
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ColorError {
    /// Input is not 3 or 6 hex digits (with optional leading `#`)
    #[error("Invalid hex colour length: {0:?}")]
    InvalidLength(String),

    /// Input contains a non-hex character
    #[error("Invalid hex digit in colour: {0:?}")]
    InvalidDigit(String),
}

/// Result type for colour operations
pub type ColorResult<T> = Result<T, ColorError>;
