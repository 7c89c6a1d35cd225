//! Signature recovery errors.
//!
//! These never abort header verification on their own: a signature that
//! fails here is simply not counted.

use thiserror::Error;

/// Why a single QC signature did not yield a signer.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SignatureError {
    /// Signature is not 65 bytes.
    #[error("Invalid signature length: expected 65 bytes, got {0}")]
    InvalidLength(usize),

    /// r or s is zero or not below the curve order.
    #[error("Invalid signature format")]
    InvalidFormat,

    /// The recovery byte is not 0, 1, 27 or 28.
    #[error("Invalid recovery ID: {0}")]
    InvalidRecoveryId(u8),

    /// No public key could be recovered for the digest.
    #[error("Public key recovery failed")]
    RecoveryFailed,
}
