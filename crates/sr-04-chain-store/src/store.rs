//! # Committed Chain Store

use std::collections::{BTreeMap, HashMap};

use shared_types::{Address, BlockNumber, Hash, HostBlockNumber};
use tracing::debug;

use crate::domain::entities::{LatestPointers, Linkage, StoredHeaderRecord};
use crate::domain::errors::StoreResult;
use crate::staging::{StagedStore, StoreWriteSet};

/// Read access shared by the committed store and staged overlays.
pub trait HeaderReader {
    /// Record for `hash`.
    fn record(&self, hash: &Hash) -> Option<&StoredHeaderRecord>;

    /// Hash indexed at `number` on the canonical chain.
    fn canonical_hash(&self, number: BlockNumber) -> Option<Hash>;

    /// Current pointers.
    fn latest(&self) -> LatestPointers;

    /// True if `hash` is stored.
    fn contains(&self, hash: &Hash) -> bool {
        self.record(hash).is_some()
    }

    /// Canonical record at `number`.
    fn record_by_number(&self, number: BlockNumber) -> Option<&StoredHeaderRecord> {
        self.canonical_hash(number)
            .and_then(|hash| self.record(&hash))
    }

    /// Walk parent links from `from` to the ancestor at `number`.
    ///
    /// Returns `None` when the walk leaves the stored chain first.
    fn ancestor_at(&self, from: &Hash, number: BlockNumber) -> Option<&StoredHeaderRecord> {
        let mut current = self.record(from)?;
        while current.number > number {
            current = self.record(&current.parent_hash)?;
        }
        (current.number == number).then_some(current)
    }

    /// True if `ancestor` is `descendant` or one of its stored ancestors.
    fn is_ancestor(&self, ancestor: &StoredHeaderRecord, descendant: &Hash) -> bool {
        self.ancestor_at(descendant, ancestor.number)
            .map(|found| found.hash == ancestor.hash)
            .unwrap_or(false)
    }
}

/// Committed header records and indexes.
#[derive(Debug, Clone, Default)]
pub struct ChainStore {
    pub(crate) records: HashMap<Hash, StoredHeaderRecord>,
    pub(crate) bodies: HashMap<Hash, Vec<u8>>,
    pub(crate) canonical: BTreeMap<BlockNumber, Hash>,
    pub(crate) snapshots: HashMap<Hash, Vec<Address>>,
    pub(crate) latest: LatestPointers,
}

impl ChainStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start an overlay for an atomic batch of writes.
    pub fn stage(&self) -> StagedStore<'_> {
        StagedStore::new(self)
    }

    /// Commit a write set produced by [`StagedStore::into_writes`].
    pub fn apply(&mut self, writes: StoreWriteSet) {
        let StoreWriteSet {
            records,
            bodies,
            canonical,
            snapshots,
            latest,
        } = writes;

        debug!(
            records = records.len(),
            canonical = canonical.len(),
            "Applying chain store write set"
        );

        self.records.extend(records);
        self.bodies.extend(bodies);
        self.snapshots.extend(snapshots);
        for (number, hash) in canonical {
            match hash {
                Some(hash) => {
                    self.canonical.insert(number, hash);
                }
                None => {
                    self.canonical.remove(&number);
                }
            }
        }
        if let Some(latest) = latest {
            self.latest = latest;
        }
    }

    /// Insert one header whose parent must already be stored.
    pub fn accept(
        &mut self,
        record: StoredHeaderRecord,
        body: Option<Vec<u8>>,
    ) -> StoreResult<StoredHeaderRecord> {
        let mut staged = self.stage();
        staged.insert(record.clone(), body, Linkage::Parent)?;
        let writes = staged.into_writes();
        self.apply(writes);
        Ok(record)
    }

    /// Mark `hash` finalized. Returns `false` if it already was.
    pub fn set_finalized(&mut self, hash: &Hash, mainnet_number: HostBlockNumber) -> StoreResult<bool> {
        let mut staged = self.stage();
        let changed = staged.set_finalized(hash, mainnet_number)?;
        let writes = staged.into_writes();
        self.apply(writes);
        Ok(changed)
    }

    /// Record `hash` by its content hash.
    pub fn get(&self, hash: &Hash) -> Option<&StoredHeaderRecord> {
        self.records.get(hash)
    }

    /// Canonical record at `number`.
    pub fn get_by_number(&self, number: BlockNumber) -> Option<&StoredHeaderRecord> {
        self.record_by_number(number)
    }

    /// Encoded header body, when bodies are kept.
    pub fn body(&self, hash: &Hash) -> Option<&[u8]> {
        self.bodies.get(hash).map(Vec::as_slice)
    }

    /// Validator addresses active at a finalized header, when snapshots are kept.
    pub fn validators_at(&self, hash: &Hash) -> Option<&[Address]> {
        self.snapshots.get(hash).map(Vec::as_slice)
    }

    /// Number of stored records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True if nothing is stored.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl HeaderReader for ChainStore {
    fn record(&self, hash: &Hash) -> Option<&StoredHeaderRecord> {
        self.records.get(hash)
    }

    fn canonical_hash(&self, number: BlockNumber) -> Option<Hash> {
        self.canonical.get(&number).copied()
    }

    fn latest(&self) -> LatestPointers {
        self.latest
    }
}
