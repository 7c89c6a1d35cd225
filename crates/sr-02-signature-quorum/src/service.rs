//! # ECDSA Quorum Verifier
//!
//! Default [`SignatureQuorumApi`] implementation backed by `k256`.

use std::collections::BTreeSet;

use shared_types::{Address, Hash};
use sr_01_header_codec::QuorumCert;
use tracing::debug;

use crate::domain::quorum::{recover_signers, tally, QuorumTally};
use crate::ports::inbound::SignatureQuorumApi;
use crate::ports::outbound::ValidatorSetView;

/// Recovers QC signers with secp256k1 public-key recovery.
#[derive(Debug, Clone, Copy, Default)]
pub struct EcdsaQuorumVerifier;

impl EcdsaQuorumVerifier {
    /// Create a new verifier.
    pub fn new() -> Self {
        Self
    }
}

impl SignatureQuorumApi for EcdsaQuorumVerifier {
    fn recover_signers(&self, digest: &Hash, signatures: &[Vec<u8>]) -> BTreeSet<Address> {
        recover_signers(digest, signatures)
    }

    fn tally_quorum(&self, cert: &QuorumCert, set: &dyn ValidatorSetView) -> QuorumTally {
        let signers = recover_signers(&cert.vote_digest(), &cert.signatures);
        let result = tally(&signers, set);
        debug!(
            certified_number = cert.proposed.number,
            certified_round = cert.proposed.round,
            signatures = cert.signatures.len(),
            recovered = signers.len(),
            valid = result.valid,
            required = result.required,
            "Tallied quorum certificate"
        );
        result
    }
}
