//! # Quorum Rule
//!
//! How many distinct member signatures a certificate needs.

use serde::{Deserialize, Serialize};

use super::errors::{RegistryError, RegistryResult};

/// Threshold rule applied to every epoch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuorumRule {
    /// `max(1, floor(n * numerator / denominator))`.
    Fraction {
        /// Numerator
        numerator: u64,
        /// Denominator
        denominator: u64,
    },
    /// A fixed signature count, like a subnet's `CertThreshold`.
    Fixed(usize),
}

impl Default for QuorumRule {
    fn default() -> Self {
        Self::TWO_THIRDS
    }
}

impl QuorumRule {
    /// The relay's 2/3 rule: 2-of-3, 3-of-5, 1-of-1.
    pub const TWO_THIRDS: Self = Self::Fraction {
        numerator: 2,
        denominator: 3,
    };

    /// Threshold for a set of `size` validators.
    pub fn threshold_for(&self, size: usize) -> RegistryResult<usize> {
        match *self {
            Self::Fraction {
                numerator,
                denominator,
            } => {
                if denominator == 0 {
                    return Err(RegistryError::InvalidRule("zero denominator".into()));
                }
                if numerator == 0 || numerator > denominator {
                    return Err(RegistryError::InvalidRule(format!(
                        "fraction {}/{} outside (0, 1]",
                        numerator, denominator
                    )));
                }
                let scaled = (size as u128 * numerator as u128) / denominator as u128;
                Ok((scaled as usize).max(1))
            }
            Self::Fixed(0) => Err(RegistryError::ZeroThreshold),
            Self::Fixed(threshold) if threshold > size => {
                Err(RegistryError::ThresholdExceedsSet { threshold, size })
            }
            Self::Fixed(threshold) => Ok(threshold),
        }
    }

    /// Check the rule without a concrete set.
    pub fn validate(&self) -> RegistryResult<()> {
        match self {
            Self::Fraction { .. } => self.threshold_for(1).map(|_| ()),
            Self::Fixed(0) => Err(RegistryError::ZeroThreshold),
            Self::Fixed(_) => Ok(()),
        }
    }
}
