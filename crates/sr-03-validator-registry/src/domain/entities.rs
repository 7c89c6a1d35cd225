//! # Registry Entities

use serde::{Deserialize, Serialize};
use shared_types::{Address, BlockNumber};
use sr_02_signature_quorum::ValidatorSetView;

/// One validator set and the block from which it applies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidatorEpoch {
    /// Members, in the order the subnet declared them.
    pub addresses: Vec<Address>,
    /// Distinct member signatures required for a quorum.
    pub threshold: usize,
    /// First block number this set applies to.
    pub effective_from: BlockNumber,
}

impl ValidatorEpoch {
    /// Number of members.
    pub fn len(&self) -> usize {
        self.addresses.len()
    }

    /// True if the set has no members.
    pub fn is_empty(&self) -> bool {
        self.addresses.is_empty()
    }

    /// True if `other` names exactly the same members, in any order.
    pub fn same_members(&self, other: &[Address]) -> bool {
        if other.len() != self.addresses.len() {
            return false;
        }
        let mut mine = self.addresses.clone();
        let mut theirs = other.to_vec();
        mine.sort_unstable();
        theirs.sort_unstable();
        mine == theirs
    }
}

impl ValidatorSetView for ValidatorEpoch {
    fn is_member(&self, address: &Address) -> bool {
        self.addresses.contains(address)
    }

    fn threshold(&self) -> usize {
        self.threshold
    }
}

/// When a scheduled validator set takes over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RotationActivation {
    /// The block right after the header that scheduled it.
    ///
    /// Headers after the announcing gap block must then be signed by the
    /// incoming set. Subnets whose outgoing set keeps signing until the
    /// switch block fail quorum under this mode.
    #[default]
    NextBlock,
    /// The next multiple of the epoch length.
    ///
    /// The outgoing set keeps certifying every header up to the switch
    /// block. Use this for subnets that rotate only at epoch switches.
    EpochBoundary,
}

impl RotationActivation {
    /// Activation height for a rotation declared at `switch_number`.
    pub fn effective_from(&self, switch_number: BlockNumber, epoch_length: u64) -> BlockNumber {
        match self {
            Self::EpochBoundary if epoch_length > 0 => {
                (switch_number / epoch_length)
                    .saturating_add(1)
                    .saturating_mul(epoch_length)
            }
            _ => switch_number.saturating_add(1),
        }
    }
}

/// Epoch and gap lengths of the subnet.
///
/// ```text
///  0 ........ epoch-gap ........ epoch ........
///  │ switch   │ gap window       │ switch
///  │ (current │ (nextValidators) │ (current
///  │  set)    │                  │  set)
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EpochSchedule {
    /// Blocks per epoch.
    pub epoch_length: u64,
    /// Length of the window before a switch in which the next set is announced.
    pub gap: u64,
}

impl EpochSchedule {
    /// True if `number` is an epoch-switch block.
    pub fn is_switch_block(&self, number: BlockNumber) -> bool {
        self.epoch_length == 0 || number % self.epoch_length == 0
    }

    /// True if `number` lies in the announcement window before a switch.
    pub fn in_gap_window(&self, number: BlockNumber) -> bool {
        if self.epoch_length == 0 {
            return true;
        }
        number % self.epoch_length >= self.epoch_length.saturating_sub(self.gap)
    }
}
