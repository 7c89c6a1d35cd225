//! # Quorum Counting
//!
//! Turns a list of raw signatures into a set of distinct signers and
//! compares the members among them with a validator set's threshold.

use std::collections::BTreeSet;

use rayon::prelude::*;
use shared_types::{Address, Hash, HexDisplay};
use tracing::trace;

use super::ecdsa::recover_address;
use crate::ports::outbound::ValidatorSetView;

/// Certificates with at least this many signatures are recovered in parallel.
pub const PARALLEL_RECOVERY_THRESHOLD: usize = 8;

/// Outcome of counting a certificate against one validator set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuorumTally {
    /// Distinct recovered signers that are members of the set.
    pub valid: usize,
    /// Threshold of the set.
    pub required: usize,
}

impl QuorumTally {
    /// True when `valid >= required`.
    pub fn reached(&self) -> bool {
        self.valid >= self.required
    }
}

/// Recover the distinct signers of `digest`.
///
/// Signatures that fail recovery are dropped; they are not an error.
pub fn recover_signers(digest: &Hash, signatures: &[Vec<u8>]) -> BTreeSet<Address> {
    let recover = |sig: &Vec<u8>| match recover_address(digest, sig) {
        Ok(address) => Some(address),
        Err(e) => {
            trace!(error = %e, "Dropping unrecoverable QC signature");
            None
        }
    };

    if signatures.len() >= PARALLEL_RECOVERY_THRESHOLD {
        signatures.par_iter().filter_map(recover).collect()
    } else {
        signatures.iter().filter_map(recover).collect()
    }
}

/// Count how many of `signers` belong to `set`.
pub fn tally<V: ValidatorSetView + ?Sized>(signers: &BTreeSet<Address>, set: &V) -> QuorumTally {
    let valid = signers
        .iter()
        .filter(|address| {
            let member = set.is_member(address);
            if !member {
                trace!(signer = %HexDisplay(address.as_slice()), "Signer is not in the validator set");
            }
            member
        })
        .count();

    QuorumTally {
        valid,
        required: set.threshold(),
    }
}
