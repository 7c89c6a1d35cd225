//! Validator registry errors.
//!
//! Every variant means the epoch a header tried to create is invalid.

use shared_types::BlockNumber;
use thiserror::Error;

/// Result alias for registry operations.
pub type RegistryResult<T> = Result<T, RegistryError>;

/// Reasons a validator epoch is rejected.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// The set would have no members.
    #[error("Validator set is empty")]
    EmptyValidatorSet,

    /// The same address appears twice.
    #[error("Duplicate validator address: {0}")]
    DuplicateValidator(String),

    /// The rule produced a zero threshold.
    #[error("Quorum threshold is zero")]
    ZeroThreshold,

    /// A fixed threshold larger than the set can never be reached.
    #[error("Quorum threshold {threshold} exceeds validator count {size}")]
    ThresholdExceedsSet {
        /// Threshold requested
        threshold: usize,
        /// Members available
        size: usize,
    },

    /// The new epoch would not start after the latest one.
    #[error("Epoch starting at {effective_from} does not follow latest epoch at {latest}")]
    RetroactiveEpoch {
        /// Requested activation height
        effective_from: BlockNumber,
        /// Activation height of the latest epoch
        latest: BlockNumber,
    },

    /// The quorum rule itself is unusable.
    #[error("Invalid quorum rule: {0}")]
    InvalidRule(String),
}
