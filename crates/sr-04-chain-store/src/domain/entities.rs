//! # Chain Store Entities

use serde::{Deserialize, Serialize};
use shared_types::{BlockNumber, BlockRef, Hash, HostBlockNumber, Round};

/// Metadata kept per accepted header.
///
/// `mainnet_number` and `finalized` are the only fields that change after
/// insertion, and each changes at most once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredHeaderRecord {
    /// Header hash.
    pub hash: Hash,
    /// Parent hash.
    pub parent_hash: Hash,
    /// Block number.
    pub number: BlockNumber,
    /// BFT round.
    pub round: Round,
    /// Header certified by this header's QC, when it is stored.
    pub certified: Option<Hash>,
    /// Host-chain block number at which the header was finalized.
    pub mainnet_number: Option<HostBlockNumber>,
    /// Finalization marker.
    pub finalized: bool,
}

impl StoredHeaderRecord {
    /// A fresh, unfinalized record.
    pub fn new(hash: Hash, parent_hash: Hash, number: BlockNumber, round: Round) -> Self {
        Self {
            hash,
            parent_hash,
            number,
            round,
            certified: None,
            mainnet_number: None,
            finalized: false,
        }
    }

    /// Attach the header this record's QC certified.
    pub fn with_certified(mut self, certified: Hash) -> Self {
        self.certified = Some(certified);
        self
    }

    /// `(hash, number)` of this record.
    pub fn block_ref(&self) -> BlockRef {
        BlockRef::new(self.hash, self.number)
    }
}

/// The two "latest" pointers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LatestPointers {
    /// Highest accepted header on the chain extending `last_finalized`.
    pub head: BlockRef,
    /// Highest finalized header.
    pub last_finalized: BlockRef,
}

/// Parent requirement for an insertion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Linkage {
    /// The parent must already be stored and the number must be parent + 1.
    Parent,
    /// No parent requirement (bootstrap headers, lite checkpoints).
    Detached,
}
