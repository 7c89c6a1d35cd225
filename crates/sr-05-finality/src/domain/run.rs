//! # Uncommitted Runs
//!
//! Lite storage keeps one run per checkpoint root. The run follows the tip
//! of the headers received after the root and counts consecutive round
//! steps:
//!
//! ```text
//! root r=459 ─ 452 r=460 ─ 453 r=461
//!   seq 0        seq 1       seq 2  → root finalized, run zeroed
//! ```
//!
//! A header whose QC certifies the tip with `round == tip.round + 1`
//! extends the streak. A QC naming an older header (a gap) restarts the
//! streak at 1 when its round step holds and the certified header is not
//! below the root. Anything else restarts it at 0.

use serde::{Deserialize, Serialize};
use shared_types::{BlockNumber, Hash, Round};
use sr_01_header_codec::BlockInfo;

/// Sequence at which a run's root is finalized.
pub const FINALIZING_SEQUENCE: u64 = 2;

/// Pending finalization state of one checkpoint root.
///
/// All zeros once the root is finalized, and for unknown roots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct UncommittedRun {
    /// Consecutive round steps ending at the tip.
    pub sequence: u64,
    /// Round of the tip.
    pub last_round: Round,
    /// Number of the tip.
    pub last_number: BlockNumber,
    /// Hash of the tip.
    pub last_hash: Hash,
}

impl UncommittedRun {
    /// A run whose tip is the root itself.
    pub fn open(root: &BlockInfo) -> Self {
        Self {
            sequence: 0,
            last_round: root.round,
            last_number: root.number,
            last_hash: root.hash,
        }
    }

    /// The run tip.
    pub fn tip(&self) -> BlockInfo {
        BlockInfo {
            hash: self.last_hash,
            round: self.last_round,
            number: self.last_number,
        }
    }

    /// True for the zeroed run.
    pub fn is_settled(&self) -> bool {
        *self == Self::default()
    }

    /// Move the tip to `header`, whose QC certifies `certified`.
    ///
    /// Returns true when the root is now finalized.
    pub fn advance(
        &mut self,
        header: &BlockInfo,
        certified: &BlockInfo,
        root_number: BlockNumber,
    ) -> bool {
        let step = header.round == certified.round + 1;
        self.sequence = if certified.hash == self.last_hash {
            if step {
                self.sequence + 1
            } else {
                0
            }
        } else if step && certified.number >= root_number {
            1
        } else {
            0
        };

        self.last_round = header.round;
        self.last_number = header.number;
        self.last_hash = header.hash;
        self.sequence >= FINALIZING_SEQUENCE
    }
}
