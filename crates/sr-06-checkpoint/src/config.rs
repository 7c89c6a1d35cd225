//! # Checkpoint Configuration

use serde::{Deserialize, Serialize};
use sr_03_validator_registry::{EpochSchedule, QuorumRule, RotationActivation};
use sr_05_finality::{EngineConfig, Retention};

use crate::error::{CheckpointError, CheckpointResult};

/// Subnet parameters shared by every checkpoint variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CheckpointConfig {
    /// Blocks per epoch. Current-validator lists sit on multiples of it.
    pub epoch_length: u64,

    /// Blocks before a switch in which next-validator lists may appear.
    pub gap: u64,

    /// Reject validator lists outside their epoch positions.
    pub enforce_epoch_boundaries: bool,

    /// When a scheduled validator set takes over.
    pub activation: RotationActivation,

    /// Threshold rule for every epoch.
    pub quorum: QuorumRule,

    /// Maximum headers per call.
    pub max_batch_size: usize,
}

impl Default for CheckpointConfig {
    fn default() -> Self {
        Self {
            epoch_length: 900,
            gap: 450,
            enforce_epoch_boundaries: true,
            activation: RotationActivation::NextBlock,
            quorum: QuorumRule::default(),
            max_batch_size: 256,
        }
    }
}

impl CheckpointConfig {
    /// Short epochs for tests.
    pub fn for_testing() -> Self {
        Self {
            epoch_length: 10,
            gap: 5,
            max_batch_size: 32,
            ..Self::default()
        }
    }

    /// Parse and validate a JSON document. Missing fields take defaults.
    pub fn from_json_str(json: &str) -> CheckpointResult<Self> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| CheckpointError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration.
    pub fn validate(&self) -> CheckpointResult<()> {
        if self.gap > self.epoch_length {
            return Err(CheckpointError::InvalidConfig(format!(
                "gap {} exceeds epoch length {}",
                self.gap, self.epoch_length
            )));
        }

        self.quorum
            .validate()
            .map_err(|e| CheckpointError::InvalidConfig(e.to_string()))?;

        if self.max_batch_size == 0 {
            return Err(CheckpointError::InvalidConfig(
                "max_batch_size cannot be 0".to_string(),
            ));
        }

        Ok(())
    }

    /// Engine configuration for a variant keeping `retention`.
    pub fn engine_config(&self, retention: Retention) -> EngineConfig {
        EngineConfig {
            schedule: EpochSchedule {
                epoch_length: self.epoch_length,
                gap: self.gap,
            },
            enforce_epoch_boundaries: self.enforce_epoch_boundaries,
            activation: self.activation,
            quorum: self.quorum,
            max_batch_size: self.max_batch_size,
            retention,
        }
    }
}
