//! Header codec errors.

use thiserror::Error;

/// Result alias for codec operations.
pub type CodecResult<T> = Result<T, CodecError>;

/// Reasons a byte string is not a well-formed subnet header.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// Top-level item is not an RLP list.
    #[error("Header must be an RLP list")]
    NotAList,

    /// Wrong number of top-level fields.
    #[error("Header must have {expected} fields, got {got}")]
    FieldCount {
        /// Required count
        expected: usize,
        /// Count found
        got: usize,
    },

    /// An individual field failed to decode.
    #[error("RLP decode error for {field}: {reason}")]
    Rlp {
        /// Field name
        field: String,
        /// Decoder message
        reason: String,
    },

    /// A fixed-size field had the wrong length.
    #[error("Invalid length for {field}: expected {expected} bytes, got {got}")]
    InvalidLength {
        /// Field name
        field: &'static str,
        /// Required length
        expected: usize,
        /// Actual length
        got: usize,
    },

    /// The extra field is empty.
    #[error("Extra field is empty")]
    EmptyExtra,

    /// The extra field carries a version byte other than 0x02.
    #[error("Unsupported extra version: 0x{0:02x}")]
    UnsupportedExtraVersion(u8),

    /// Declared RLP length does not match the bytes supplied.
    #[error("Encoded length of {0} does not match input")]
    LengthMismatch(&'static str),

    /// The input decodes but does not re-encode to the same bytes.
    #[error("Non-canonical header encoding")]
    NonCanonical,
}
