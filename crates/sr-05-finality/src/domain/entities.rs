//! Finality engine entities.

use shared_types::{Address, BlockRef};

/// Trusted starting state of a relay.
///
/// Both headers are stored as finalized without verification. Their
/// validator lists are ignored; `validators` is the first epoch.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Bootstrap {
    /// Validator set at the bootstrap header.
    pub validators: Vec<Address>,
    /// Optional genesis header, stored below the bootstrap header.
    pub genesis: Option<Vec<u8>>,
    /// Encoded bootstrap header.
    pub header: Vec<u8>,
}

/// What one batch changed.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BatchOutcome {
    /// Headers verified and applied.
    pub accepted: usize,
    /// Headers skipped because they were already processed.
    pub duplicates: usize,
    /// Headers that got a stored record, in batch order.
    pub stored: Vec<BlockRef>,
    /// Headers finalized, lowest first.
    pub finalized: Vec<BlockRef>,
    /// Validator rotations scheduled.
    pub epochs_scheduled: usize,
}

impl BatchOutcome {
    /// True if the batch changed nothing.
    pub fn is_noop(&self) -> bool {
        self.accepted == 0
    }
}
