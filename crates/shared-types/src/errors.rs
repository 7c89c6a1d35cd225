//! Errors for parsing shared identifiers.

use thiserror::Error;

/// Failure to parse a hex-encoded identifier.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseIdError {
    /// Input was not valid hex.
    #[error("Invalid hex: {0}")]
    InvalidHex(String),

    /// Decoded byte length did not match the identifier size.
    #[error("Invalid length: expected {expected} bytes, got {got}")]
    InvalidLength {
        /// Required number of bytes
        expected: usize,
        /// Number of bytes decoded
        got: usize,
    },
}
