//! # Vote Digest
//!
//! Validators sign the digest of the header they vote for, and that vote is
//! carried one header later inside the child's quorum certificate.
//!
//! ```text
//! digest = keccak256(RLP([[votedHash, votedRound, votedNumber], gapNumber]))
//! ```

use rlp::RlpStream;
use sha3::{Digest, Keccak256};
use shared_types::Hash;

use crate::domain::entities::{BlockInfo, QuorumCert};

/// Keccak256 hash function.
pub fn keccak256(data: &[u8]) -> Hash {
    let mut hasher = Keccak256::new();
    hasher.update(data);
    let result = hasher.finalize();
    let mut hash = [0u8; 32];
    hash.copy_from_slice(&result);
    hash
}

/// Digest signed by every validator voting for `proposed`.
pub fn vote_digest(proposed: &BlockInfo, gap_number: u64) -> Hash {
    let mut stream = RlpStream::new_list(2);
    stream.begin_list(3);
    stream.append(&proposed.hash.to_vec());
    stream.append(&proposed.round);
    stream.append(&proposed.number);
    stream.append(&gap_number);
    keccak256(&stream.out())
}

impl QuorumCert {
    /// Digest the certificate's signatures were produced over.
    pub fn vote_digest(&self) -> Hash {
        vote_digest(&self.proposed, self.gap_number)
    }
}
