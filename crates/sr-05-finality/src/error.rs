//! Error types for the finality engine.

use shared_types::{BlockNumber, Hash, HexDisplay};
use sr_01_header_codec::CodecError;
use sr_04_chain_store::StoreError;
use thiserror::Error;

/// Result type for finality operations
pub type FinalityResult<T> = Result<T, FinalityError>;

/// Finality engine errors.
///
/// Every variant except [`FinalityError::DuplicateHeader`] aborts the whole
/// batch it was raised in.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FinalityError {
    /// The header bytes do not decode, or a decoded field is inconsistent.
    #[error("Malformed header: {0}")]
    MalformedHeader(String),

    /// The header does not extend an accepted chain.
    #[error("Header #{number} does not extend an accepted chain (parent {})", HexDisplay(.parent))]
    UnknownParent {
        /// Parent (or certified) hash that could not be resolved
        parent: Hash,
        /// Number of the rejected header
        number: BlockNumber,
    },

    /// Too few valid signatures from the applicable epoch.
    #[error("Quorum not reached for header #{number}: {valid} valid of {required} required")]
    QuorumNotReached {
        /// Number of the rejected header
        number: BlockNumber,
        /// Distinct member signatures recovered
        valid: usize,
        /// Epoch threshold
        required: usize,
    },

    /// The header's validator lists would produce an invalid epoch.
    #[error("Invalid epoch at header #{number}: {reason}")]
    InvalidEpoch {
        /// Number of the rejected header
        number: BlockNumber,
        /// What was wrong
        reason: String,
    },

    /// The header is already stored.
    #[error("Duplicate header {}", HexDisplay(.0))]
    DuplicateHeader(Hash),

    /// The header forks below the last finalized height.
    #[error("Header #{number} conflicts with finalized header #{finalized}")]
    FinalityConflict {
        /// Number of the rejected header
        number: BlockNumber,
        /// Last finalized number
        finalized: BlockNumber,
    },

    /// A checkpoint at or below the latest stored one.
    #[error("Checkpoint #{number} is not above latest checkpoint #{latest}")]
    StaleCheckpoint {
        /// Number of the rejected checkpoint
        number: BlockNumber,
        /// Latest stored checkpoint number
        latest: BlockNumber,
    },

    /// No pending run is rooted at this hash.
    #[error("No uncommitted run rooted at {}", HexDisplay(.0))]
    UnknownRun(Hash),

    /// A stored header was expected but is missing.
    #[error("Unknown header {}", HexDisplay(.0))]
    UnknownHeader(Hash),

    /// The batch contains no headers.
    #[error("Empty header batch")]
    EmptyBatch,

    /// The batch exceeds the configured maximum.
    #[error("Batch of {size} headers exceeds maximum of {max}")]
    BatchTooLarge {
        /// Headers submitted
        size: usize,
        /// Configured maximum
        max: usize,
    },
}

/// Stable classification of [`FinalityError`] for callers and metric labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// See [`FinalityError::MalformedHeader`]
    MalformedHeader,
    /// See [`FinalityError::UnknownParent`]
    UnknownParent,
    /// See [`FinalityError::QuorumNotReached`]
    QuorumNotReached,
    /// See [`FinalityError::InvalidEpoch`]
    InvalidEpoch,
    /// See [`FinalityError::DuplicateHeader`]
    DuplicateHeader,
    /// See [`FinalityError::FinalityConflict`]
    FinalityConflict,
    /// See [`FinalityError::StaleCheckpoint`]
    StaleCheckpoint,
    /// See [`FinalityError::UnknownRun`]
    UnknownRun,
    /// See [`FinalityError::UnknownHeader`]
    UnknownHeader,
    /// See [`FinalityError::EmptyBatch`]
    EmptyBatch,
    /// See [`FinalityError::BatchTooLarge`]
    BatchTooLarge,
}

impl ErrorKind {
    /// Snake-case label.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::MalformedHeader => "malformed_header",
            Self::UnknownParent => "unknown_parent",
            Self::QuorumNotReached => "quorum_not_reached",
            Self::InvalidEpoch => "invalid_epoch",
            Self::DuplicateHeader => "duplicate_header",
            Self::FinalityConflict => "finality_conflict",
            Self::StaleCheckpoint => "stale_checkpoint",
            Self::UnknownRun => "unknown_run",
            Self::UnknownHeader => "unknown_header",
            Self::EmptyBatch => "empty_batch",
            Self::BatchTooLarge => "batch_too_large",
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FinalityError {
    /// Classification of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::MalformedHeader(_) => ErrorKind::MalformedHeader,
            Self::UnknownParent { .. } => ErrorKind::UnknownParent,
            Self::QuorumNotReached { .. } => ErrorKind::QuorumNotReached,
            Self::InvalidEpoch { .. } => ErrorKind::InvalidEpoch,
            Self::DuplicateHeader(_) => ErrorKind::DuplicateHeader,
            Self::FinalityConflict { .. } => ErrorKind::FinalityConflict,
            Self::StaleCheckpoint { .. } => ErrorKind::StaleCheckpoint,
            Self::UnknownRun(_) => ErrorKind::UnknownRun,
            Self::UnknownHeader(_) => ErrorKind::UnknownHeader,
            Self::EmptyBatch => ErrorKind::EmptyBatch,
            Self::BatchTooLarge { .. } => ErrorKind::BatchTooLarge,
        }
    }

    /// True for errors a caller can ignore on re-submission.
    pub fn is_recoverable(&self) -> bool {
        self.kind() == ErrorKind::DuplicateHeader
    }

    pub(crate) fn invalid_epoch(number: BlockNumber, reason: impl ToString) -> Self {
        Self::InvalidEpoch {
            number,
            reason: reason.to_string(),
        }
    }
}

impl From<CodecError> for FinalityError {
    fn from(e: CodecError) -> Self {
        Self::MalformedHeader(e.to_string())
    }
}

impl From<StoreError> for FinalityError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::DuplicateHeader(hash) => Self::DuplicateHeader(hash),
            StoreError::UnknownParent { parent, number } => Self::UnknownParent { parent, number },
            StoreError::NonSequentialNumber { .. } => Self::MalformedHeader(e.to_string()),
            StoreError::UnknownHeader(hash) => Self::UnknownHeader(hash),
            StoreError::FinalizedHeightConflict { number } => Self::FinalityConflict {
                number,
                finalized: number,
            },
        }
    }
}
