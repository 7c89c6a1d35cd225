//! Driven Ports (SPI - Outbound Dependencies)

use std::sync::atomic::{AtomicU64, Ordering};

use shared_types::HostBlockNumber;

/// The chain the relay runs on.
///
/// Its block number is recorded as the submission marker of every header
/// the relay finalizes.
pub trait HostChain: Send + Sync {
    /// Current host-chain block number.
    fn block_number(&self) -> HostBlockNumber;
}

/// A host chain stuck at one block.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedHostChain(pub HostBlockNumber);

impl HostChain for FixedHostChain {
    fn block_number(&self) -> HostBlockNumber {
        self.0
    }
}

/// A host chain advanced by hand, for tests and replay tooling.
#[derive(Debug, Default)]
pub struct ManualHostChain {
    number: AtomicU64,
}

impl ManualHostChain {
    /// Start at `number`.
    pub fn new(number: HostBlockNumber) -> Self {
        Self {
            number: AtomicU64::new(number),
        }
    }

    /// Jump to `number`.
    pub fn set(&self, number: HostBlockNumber) {
        self.number.store(number, Ordering::SeqCst);
    }

    /// Move forward by `blocks`, returning the new number.
    pub fn advance(&self, blocks: u64) -> HostBlockNumber {
        self.number.fetch_add(blocks, Ordering::SeqCst) + blocks
    }
}

impl HostChain for ManualHostChain {
    fn block_number(&self) -> HostBlockNumber {
        self.number.load(Ordering::SeqCst)
    }
}
