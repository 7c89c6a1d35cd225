//! Engine configuration.

use serde::{Deserialize, Serialize};
use sr_03_validator_registry::{EpochSchedule, QuorumRule, RotationActivation};

/// What the engine keeps beyond the header records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Retention {
    /// Keep the encoded bytes of every stored header.
    pub bodies: bool,
    /// Keep the active validator addresses at every finalized header.
    pub validator_snapshots: bool,
}

impl Retention {
    /// Bodies and snapshots.
    pub const FULL: Self = Self {
        bodies: true,
        validator_snapshots: true,
    };

    /// Records only.
    pub const MINIMAL: Self = Self {
        bodies: false,
        validator_snapshots: false,
    };
}

/// Finality engine configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Epoch and gap lengths
    pub schedule: EpochSchedule,
    /// Reject validator lists outside their epoch positions
    pub enforce_epoch_boundaries: bool,
    /// When a scheduled validator set takes over. The default `NextBlock`
    /// expects the incoming set to sign right after the gap block; subnets
    /// where the outgoing set signs until the switch need `EpochBoundary`.
    pub activation: RotationActivation,
    /// Threshold rule for every epoch
    pub quorum: QuorumRule,
    /// Upper bound on headers per call
    pub max_batch_size: usize,
    /// Bodies and snapshots to keep
    pub retention: Retention,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            schedule: EpochSchedule {
                epoch_length: 900,
                gap: 450,
            },
            enforce_epoch_boundaries: true,
            activation: RotationActivation::NextBlock,
            quorum: QuorumRule::default(),
            max_batch_size: 256,
            retention: Retention::FULL,
        }
    }
}
