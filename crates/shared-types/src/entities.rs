//! # Core Identifiers
//!
//! Fixed-size byte identifiers for subnet headers and validator accounts.

use serde::{Deserialize, Serialize};

/// A 32-byte Keccak-256 digest (header hash, vote digest).
pub type Hash = [u8; 32];

/// A 20-byte Ethereum-style account address.
pub type Address = [u8; 20];

/// Block number on the subnet chain.
pub type BlockNumber = u64;

/// BFT round number.
pub type Round = u64;

/// Block number on the host chain the relay runs against.
pub type HostBlockNumber = u64;

/// The all-zero hash.
pub const ZERO_HASH: Hash = [0u8; 32];

/// The all-zero address.
pub const ZERO_ADDRESS: Address = [0u8; 20];

/// A (hash, number) pair naming one header.
///
/// Used for the `head` / `lastFinalized` pointers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct BlockRef {
    /// Header hash.
    pub hash: Hash,
    /// Header number.
    pub number: BlockNumber,
}

impl BlockRef {
    /// Create a new block reference.
    pub fn new(hash: Hash, number: BlockNumber) -> Self {
        Self { hash, number }
    }
}
