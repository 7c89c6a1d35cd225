//! # Staged Writes
//!
//! Overlay used to make a whole batch of header insertions atomic.

use std::collections::{BTreeMap, HashMap};

use shared_types::{Address, BlockNumber, BlockRef, Hash, HexDisplay, HostBlockNumber};
use tracing::trace;

use crate::domain::entities::{LatestPointers, Linkage, StoredHeaderRecord};
use crate::domain::errors::{StoreError, StoreResult};
use crate::store::{ChainStore, HeaderReader};

/// Pending changes produced by a [`StagedStore`].
///
/// A `None` canonical entry removes that height from the index.
#[derive(Debug, Clone, Default)]
pub struct StoreWriteSet {
    pub(crate) records: HashMap<Hash, StoredHeaderRecord>,
    pub(crate) bodies: HashMap<Hash, Vec<u8>>,
    pub(crate) canonical: BTreeMap<BlockNumber, Option<Hash>>,
    pub(crate) snapshots: HashMap<Hash, Vec<Address>>,
    pub(crate) latest: Option<LatestPointers>,
}

impl StoreWriteSet {
    /// True if applying this set would change nothing.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
            && self.bodies.is_empty()
            && self.canonical.is_empty()
            && self.snapshots.is_empty()
            && self.latest.is_none()
    }
}

/// Read-through overlay on a committed [`ChainStore`].
#[derive(Debug)]
pub struct StagedStore<'a> {
    base: &'a ChainStore,
    writes: StoreWriteSet,
}

impl<'a> StagedStore<'a> {
    pub(crate) fn new(base: &'a ChainStore) -> Self {
        Self {
            base,
            writes: StoreWriteSet::default(),
        }
    }

    /// Stage a new record.
    pub fn insert(
        &mut self,
        record: StoredHeaderRecord,
        body: Option<Vec<u8>>,
        linkage: Linkage,
    ) -> StoreResult<()> {
        if self.contains(&record.hash) {
            return Err(StoreError::DuplicateHeader(record.hash));
        }

        if linkage == Linkage::Parent {
            let parent = self
                .record(&record.parent_hash)
                .ok_or(StoreError::UnknownParent {
                    parent: record.parent_hash,
                    number: record.number,
                })?;
            if record.number != parent.number + 1 {
                return Err(StoreError::NonSequentialNumber {
                    parent_number: parent.number,
                    got: record.number,
                });
            }
        }

        trace!(
            hash = %HexDisplay(&record.hash),
            number = record.number,
            round = record.round,
            "Staged header record"
        );

        if let Some(body) = body {
            self.writes.bodies.insert(record.hash, body);
        }
        self.writes.records.insert(record.hash, record);
        Ok(())
    }

    /// Mark `hash` finalized. Returns `false` if it already was.
    pub fn set_finalized(&mut self, hash: &Hash, mainnet_number: HostBlockNumber) -> StoreResult<bool> {
        let mut record = self
            .record(hash)
            .cloned()
            .ok_or(StoreError::UnknownHeader(*hash))?;
        if record.finalized {
            return Ok(false);
        }
        record.finalized = true;
        record.mainnet_number = Some(mainnet_number);
        self.writes.records.insert(*hash, record);
        Ok(true)
    }

    /// Keep the validator set that was active at a finalized header.
    pub fn snapshot_validators(&mut self, hash: Hash, addresses: Vec<Address>) {
        self.writes.snapshots.insert(hash, addresses);
    }

    /// Move `head` and re-point the canonical index along its ancestry.
    pub fn set_head(&mut self, head: BlockRef) -> StoreResult<()> {
        self.reindex_canonical(head)?;
        let mut latest = self.latest();
        latest.head = head;
        self.writes.latest = Some(latest);
        Ok(())
    }

    /// Move `last_finalized`.
    pub fn set_last_finalized(&mut self, last_finalized: BlockRef) {
        let mut latest = self.latest();
        latest.last_finalized = last_finalized;
        self.writes.latest = Some(latest);
    }

    /// Release the borrow on the committed store, keeping the changes.
    pub fn into_writes(self) -> StoreWriteSet {
        self.writes
    }

    fn reindex_canonical(&mut self, tip: BlockRef) -> StoreResult<()> {
        let above: Vec<BlockNumber> = self
            .base
            .canonical
            .range(tip.number + 1..)
            .map(|(number, _)| *number)
            .chain(
                self.writes
                    .canonical
                    .range(tip.number + 1..)
                    .filter(|(_, hash)| hash.is_some())
                    .map(|(number, _)| *number),
            )
            .collect();
        for number in above {
            if self.finalized_at(number) {
                return Err(StoreError::FinalizedHeightConflict { number });
            }
            self.writes.canonical.insert(number, None);
        }

        let mut cursor = tip.hash;
        loop {
            let Some(record) = self.record(&cursor) else {
                break;
            };
            let (number, parent) = (record.number, record.parent_hash);

            match self.canonical_hash(number) {
                Some(existing) if existing == cursor => break,
                Some(_) if self.finalized_at(number) => {
                    return Err(StoreError::FinalizedHeightConflict { number });
                }
                _ => {}
            }

            self.writes.canonical.insert(number, Some(cursor));
            if number == 0 {
                break;
            }
            cursor = parent;
        }
        Ok(())
    }

    fn finalized_at(&self, number: BlockNumber) -> bool {
        self.record_by_number(number)
            .map(|record| record.finalized)
            .unwrap_or(false)
    }
}

impl HeaderReader for StagedStore<'_> {
    fn record(&self, hash: &Hash) -> Option<&StoredHeaderRecord> {
        self.writes
            .records
            .get(hash)
            .or_else(|| self.base.records.get(hash))
    }

    fn canonical_hash(&self, number: BlockNumber) -> Option<Hash> {
        match self.writes.canonical.get(&number) {
            Some(entry) => *entry,
            None => self.base.canonical.get(&number).copied(),
        }
    }

    fn latest(&self) -> LatestPointers {
        self.writes.latest.unwrap_or(self.base.latest)
    }
}
