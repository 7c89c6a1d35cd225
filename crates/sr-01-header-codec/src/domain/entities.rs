//! # Header Entities
//!
//! Structured form of a subnet header. Legacy Ethereum fields are kept as
//! opaque bytes so that re-encoding is byte-exact.

use serde::{Deserialize, Serialize};
use shared_types::{Address, BlockNumber, Hash, Round};

/// Number of top-level RLP fields in a subnet header.
pub const HEADER_FIELD_COUNT: usize = 19;

/// Version byte that prefixes the v2 extra-data layout.
pub const EXTRA_VERSION: u8 = 0x02;

/// The (hash, round, number) triple a vote refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct BlockInfo {
    /// Hash of the certified header.
    pub hash: Hash,
    /// Round the certified header was proposed in.
    pub round: Round,
    /// Number of the certified header.
    pub number: BlockNumber,
}

/// Quorum certificate embedded in a header's extra data.
///
/// Certifies `proposed`, normally the parent of the carrying header.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct QuorumCert {
    /// Header being certified.
    pub proposed: BlockInfo,
    /// Raw 65-byte `r || s || v` signatures, in the order they were collected.
    pub signatures: Vec<Vec<u8>>,
    /// Gap number mixed into the vote digest.
    pub gap_number: u64,
}

/// Decoded v2 extra data.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ExtraFields {
    /// BFT round of the carrying header.
    pub round: Round,
    /// Certificate for the referenced ancestor.
    pub quorum_cert: QuorumCert,
}

/// A fully decoded subnet header.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Header {
    /// Hash of the parent header.
    pub parent_hash: Hash,
    /// Legacy uncle hash.
    pub uncle_hash: Vec<u8>,
    /// Legacy coinbase.
    pub coinbase: Vec<u8>,
    /// State root.
    pub state_root: Vec<u8>,
    /// Transactions root.
    pub tx_root: Vec<u8>,
    /// Receipts root.
    pub receipt_root: Vec<u8>,
    /// Log bloom.
    pub bloom: Vec<u8>,
    /// Difficulty.
    pub difficulty: u64,
    /// Block number.
    pub number: BlockNumber,
    /// Gas limit.
    pub gas_limit: u64,
    /// Gas used.
    pub gas_used: u64,
    /// Timestamp.
    pub time: u64,
    /// Round and quorum certificate.
    pub extra: ExtraFields,
    /// Legacy mix hash.
    pub mix_hash: Vec<u8>,
    /// Legacy nonce.
    pub nonce: Vec<u8>,
    /// Proposer seal.
    pub validator: Vec<u8>,
    /// Current validator set; present on epoch-switch headers.
    pub validators: Vec<Address>,
    /// Validator set scheduled for the next epoch.
    pub next_validators: Vec<Address>,
    /// Addresses removed from `next_validators` before activation.
    pub penalties: Vec<Address>,
}

impl Header {
    /// BFT round of this header.
    pub fn round(&self) -> Round {
        self.extra.round
    }

    /// The quorum certificate this header carries.
    pub fn quorum_cert(&self) -> &QuorumCert {
        &self.extra.quorum_cert
    }

    /// True if the header declares the current validator set.
    pub fn is_epoch_switch(&self) -> bool {
        !self.validators.is_empty()
    }

    /// True if the header schedules a validator rotation.
    pub fn carries_rotation(&self) -> bool {
        !self.next_validators.is_empty()
    }

    /// True for headers that change or restate the validator set.
    pub fn is_checkpoint(&self) -> bool {
        self.is_epoch_switch() || self.carries_rotation()
    }

    /// `(hash, round, number)` describing this header, for building votes.
    pub fn block_info(&self, hash: Hash) -> BlockInfo {
        BlockInfo {
            hash,
            round: self.round(),
            number: self.number,
        }
    }
}

/// Minimal linkage view of a header.
///
/// Produced by the lenient decoder for bootstrap headers whose extra data
/// predates the v2 layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeaderLink {
    /// Header hash.
    pub hash: Hash,
    /// Parent hash.
    pub parent_hash: Hash,
    /// Block number.
    pub number: BlockNumber,
    /// Round, or 0 when the extra data is not v2.
    pub round: Round,
}
