//! Outbound dependencies: the validator set a certificate is checked against.

use std::collections::HashSet;

use shared_types::Address;

/// Membership and threshold of one validator epoch.
pub trait ValidatorSetView {
    /// True if `address` belongs to the set.
    fn is_member(&self, address: &Address) -> bool;

    /// Minimum number of distinct member signatures.
    fn threshold(&self) -> usize;
}

/// A fixed validator set.
#[derive(Debug, Clone, Default)]
pub struct StaticValidatorSet {
    members: HashSet<Address>,
    threshold: usize,
}

impl StaticValidatorSet {
    /// Create a set from addresses and a threshold.
    pub fn new(addresses: impl IntoIterator<Item = Address>, threshold: usize) -> Self {
        Self {
            members: addresses.into_iter().collect(),
            threshold,
        }
    }
}

impl ValidatorSetView for StaticValidatorSet {
    fn is_member(&self, address: &Address) -> bool {
        self.members.contains(address)
    }

    fn threshold(&self) -> usize {
        self.threshold
    }
}
