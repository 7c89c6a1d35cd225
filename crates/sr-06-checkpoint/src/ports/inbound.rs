//! # Inbound Ports
//!
//! What a relay caller can ask of a checkpoint.

use shared_types::{BlockNumber, Hash};
use sr_03_validator_registry::ValidatorEpoch;
use sr_04_chain_store::{LatestPointers, StoredHeaderRecord};
use sr_05_finality::{BatchOutcome, UncommittedRun};

use crate::error::CheckpointResult;

/// Header ingestion and queries common to every variant.
pub trait CheckpointApi: Send + Sync {
    /// Verify and apply an ordered batch of encoded headers, all or nothing.
    fn receive_header(&self, headers: &[Vec<u8>]) -> CheckpointResult<BatchOutcome>;

    /// Stored record for `hash`.
    fn get_header(&self, hash: &Hash) -> Option<StoredHeaderRecord>;

    /// Stored record on the canonical chain at `number`.
    fn get_header_by_number(&self, number: BlockNumber) -> Option<StoredHeaderRecord>;

    /// `(head, last_finalized)`.
    fn get_latest_blocks(&self) -> LatestPointers;

    /// Validator addresses and threshold for the next header.
    fn get_current_validators(&self) -> ValidatorEpoch;
}

/// Completing uncommitted runs later (lite and periodic).
pub trait CommitApi: CheckpointApi {
    /// Continue the run rooted at `root` with headers following its tip.
    fn commit_header(&self, root: &Hash, headers: &[Vec<u8>]) -> CheckpointResult<BatchOutcome>;

    /// Pending run of `root`, all zeros once finalized.
    fn get_uncommitted_header(&self, root: &Hash) -> UncommittedRun;
}

/// Gap filling and dry runs (periodic).
pub trait ReplenishApi: CommitApi {
    /// Continue the run rooted at `root`; the first header may skip ahead
    /// of the tip as long as its QC does not reach below it.
    fn replenish_header(&self, root: &Hash, headers: &[Vec<u8>])
        -> CheckpointResult<BatchOutcome>;

    /// True if `header` decodes and carries a valid quorum. Changes nothing.
    fn check_header(&self, header: &[u8]) -> bool;
}
