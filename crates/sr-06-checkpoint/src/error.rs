//! Error types for checkpoint variants.

use sr_05_finality::{ErrorKind, FinalityError};
use thiserror::Error;

/// Result type for checkpoint operations
pub type CheckpointResult<T> = Result<T, CheckpointError>;

/// Checkpoint errors
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CheckpointError {
    /// A header batch or query was rejected by the finality engine.
    #[error(transparent)]
    Finality(#[from] FinalityError),

    /// The configuration is unusable.
    #[error("Invalid checkpoint configuration: {0}")]
    InvalidConfig(String),
}

impl CheckpointError {
    /// Engine error kind, if this came from the engine.
    pub fn kind(&self) -> Option<ErrorKind> {
        match self {
            Self::Finality(e) => Some(e.kind()),
            Self::InvalidConfig(_) => None,
        }
    }
}
