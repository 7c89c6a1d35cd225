//! Inbound API offered to the finality engine.

use std::collections::BTreeSet;

use shared_types::{Address, Hash};
use sr_01_header_codec::{Header, QuorumCert};

use crate::domain::quorum::QuorumTally;
use crate::ports::outbound::ValidatorSetView;

/// Quorum certificate verification.
pub trait SignatureQuorumApi: Send + Sync {
    /// Recover the distinct signers of `digest`, dropping bad signatures.
    fn recover_signers(&self, digest: &Hash, signatures: &[Vec<u8>]) -> BTreeSet<Address>;

    /// Count the members of `set` that signed `cert`.
    fn tally_quorum(&self, cert: &QuorumCert, set: &dyn ValidatorSetView) -> QuorumTally;

    /// True if `header`'s certificate reaches `set`'s threshold.
    fn verify_quorum(&self, header: &Header, set: &dyn ValidatorSetView) -> bool {
        self.tally_quorum(header.quorum_cert(), set).reached()
    }
}
