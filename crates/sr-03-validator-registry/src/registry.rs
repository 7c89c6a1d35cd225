//! # Validator Set Registry
//!
//! Append-only list of validator epochs, sorted by activation height.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use shared_types::{Address, BlockNumber, HexDisplay};
use tracing::info;

use crate::domain::entities::ValidatorEpoch;
use crate::domain::errors::{RegistryError, RegistryResult};
use crate::domain::quorum_rule::QuorumRule;

/// Validator epochs known to the relay.
///
/// Invariant: `epochs` is non-empty, sorted by strictly increasing
/// `effective_from`, and the first entry starts at block 0.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidatorSetRegistry {
    epochs: Vec<ValidatorEpoch>,
    rule: QuorumRule,
}

impl ValidatorSetRegistry {
    /// Create a registry whose first epoch applies from block 0.
    pub fn genesis(addresses: Vec<Address>, rule: QuorumRule) -> RegistryResult<Self> {
        rule.validate()?;
        let epoch = build_epoch(addresses, &[], 0, &rule)?;
        Ok(Self {
            epochs: vec![epoch],
            rule,
        })
    }

    /// The epoch that applies to block `number`.
    pub fn active_set(&self, number: BlockNumber) -> &ValidatorEpoch {
        let idx = self
            .epochs
            .partition_point(|epoch| epoch.effective_from <= number);
        // The genesis epoch starts at 0, so idx >= 1
        &self.epochs[idx.saturating_sub(1)]
    }

    /// Insert a new epoch built from `next` minus `penalties`.
    ///
    /// Fails with no change if the epoch would be empty, would not be
    /// reachable under the quorum rule, or would not start after the latest
    /// recorded epoch.
    pub fn schedule_rotation(
        &mut self,
        next: &[Address],
        penalties: &[Address],
        effective_from: BlockNumber,
    ) -> RegistryResult<&ValidatorEpoch> {
        let latest = self.latest().effective_from;
        if effective_from <= latest {
            return Err(RegistryError::RetroactiveEpoch {
                effective_from,
                latest,
            });
        }

        let epoch = build_epoch(next.to_vec(), penalties, effective_from, &self.rule)?;
        info!(
            effective_from,
            validators = epoch.len(),
            threshold = epoch.threshold,
            penalized = penalties.len(),
            "Scheduled validator rotation"
        );
        self.epochs.push(epoch);
        Ok(self.latest())
    }

    /// Most recently scheduled epoch, which may not be active yet.
    pub fn latest(&self) -> &ValidatorEpoch {
        // Non-empty by construction
        &self.epochs[self.epochs.len() - 1]
    }

    /// All epochs, oldest first.
    pub fn epochs(&self) -> &[ValidatorEpoch] {
        &self.epochs
    }

    /// Threshold rule in force.
    pub fn rule(&self) -> QuorumRule {
        self.rule
    }
}

fn build_epoch(
    addresses: Vec<Address>,
    penalties: &[Address],
    effective_from: BlockNumber,
    rule: &QuorumRule,
) -> RegistryResult<ValidatorEpoch> {
    let mut seen = HashSet::with_capacity(addresses.len());
    for address in &addresses {
        if !seen.insert(*address) {
            return Err(RegistryError::DuplicateValidator(
                HexDisplay(address.as_slice()).to_string(),
            ));
        }
    }

    let addresses: Vec<Address> = addresses
        .into_iter()
        .filter(|address| !penalties.contains(address))
        .collect();
    if addresses.is_empty() {
        return Err(RegistryError::EmptyValidatorSet);
    }

    let threshold = rule.threshold_for(addresses.len())?;
    if threshold == 0 {
        return Err(RegistryError::ZeroThreshold);
    }

    Ok(ValidatorEpoch {
        addresses,
        threshold,
        effective_from,
    })
}
