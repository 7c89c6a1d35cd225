//! # Batch Processing
//!
//! One [`Batch`] per ingress call. It reads through a staged store overlay
//! and works on its own copies of the registry and the run table, so a
//! failing header leaves the engine untouched.

use std::collections::HashMap;

use shared_types::{BlockNumber, BlockRef, Hash, HexDisplay};
use sr_01_header_codec::{BlockInfo, SealedHeader};
use sr_02_signature_quorum::SignatureQuorumApi;
use sr_03_validator_registry::ValidatorSetRegistry;
use sr_04_chain_store::{HeaderReader, Linkage, StagedStore, StoreWriteSet, StoredHeaderRecord};
use tracing::{debug, info};

use crate::domain::entities::BatchOutcome;
use crate::domain::run::UncommittedRun;
use crate::engine::FinalityEngine;
use crate::error::{FinalityError, FinalityResult};
use crate::metrics;
use crate::verify::{apply_epoch_effects, check_certificate_shape, verify_quorum};

/// Where the next run header must attach.
#[derive(Debug, Clone, Copy)]
pub(crate) struct RunCursor {
    /// Root of the run being extended.
    pub root: BlockInfo,
    /// Last header processed in this run.
    pub prev: BlockInfo,
    /// Root already finalized: verify and link, but leave the run alone.
    pub settled: bool,
    /// The next new header may skip ahead of `prev`.
    pub skip_ahead: bool,
}

impl RunCursor {
    pub(crate) fn resume(root: BlockInfo, tip: BlockInfo, skip_ahead: bool) -> Self {
        Self {
            root,
            prev: tip,
            settled: false,
            skip_ahead,
        }
    }

    fn settled(root: BlockInfo) -> Self {
        Self {
            root,
            prev: root,
            settled: true,
            skip_ahead: false,
        }
    }
}

/// Owned results of a successful batch.
pub(crate) struct Committed {
    pub writes: StoreWriteSet,
    pub registry: ValidatorSetRegistry,
    pub runs: HashMap<Hash, UncommittedRun>,
    pub highest: BlockNumber,
    pub outcome: BatchOutcome,
}

pub(crate) struct Batch<'a, V> {
    engine: &'a FinalityEngine<V>,
    store: StagedStore<'a>,
    registry: ValidatorSetRegistry,
    runs: HashMap<Hash, UncommittedRun>,
    highest: BlockNumber,
    cursor: Option<RunCursor>,
    outcome: BatchOutcome,
}

impl<'a, V: SignatureQuorumApi> Batch<'a, V> {
    pub(crate) fn open(engine: &'a FinalityEngine<V>, cursor: Option<RunCursor>) -> Self {
        Self {
            engine,
            store: engine.store.stage(),
            registry: engine.registry.clone(),
            runs: engine.runs.clone(),
            highest: engine.highest,
            cursor,
            outcome: BatchOutcome::default(),
        }
    }

    pub(crate) fn finish(self) -> Committed {
        Committed {
            writes: self.store.into_writes(),
            registry: self.registry,
            runs: self.runs,
            highest: self.highest,
            outcome: self.outcome,
        }
    }

    // =========================================================================
    // FULL STORAGE: every header linked by parent hash
    // =========================================================================

    /// Accept one header that must extend a stored header.
    pub(crate) fn accept_linked(&mut self, bytes: &[u8]) -> FinalityResult<()> {
        let sealed = SealedHeader::decode(bytes)?;
        let header = &sealed.header;
        let number = header.number;

        if self.store.contains(&sealed.hash) {
            debug!(number, hash = %HexDisplay(&sealed.hash), "Skipping already accepted header");
            self.outcome.duplicates += 1;
            return Ok(());
        }

        let parent = self
            .store
            .record(&header.parent_hash)
            .cloned()
            .ok_or(FinalityError::UnknownParent {
                parent: header.parent_hash,
                number,
            })?;
        if number != parent.number + 1 {
            return Err(FinalityError::UnknownParent {
                parent: parent.hash,
                number,
            });
        }

        let last_finalized = self.store.latest().last_finalized;
        let on_finalized_branch = self
            .store
            .ancestor_at(&parent.hash, last_finalized.number)
            .map(|ancestor| ancestor.hash == last_finalized.hash)
            .unwrap_or(false);
        if !on_finalized_branch {
            return Err(FinalityError::FinalityConflict {
                number,
                finalized: last_finalized.number,
            });
        }

        check_certificate_shape(header)?;
        if header.round() <= parent.round {
            return Err(FinalityError::MalformedHeader(format!(
                "header #{} round {} does not advance past parent round {}",
                number,
                header.round(),
                parent.round
            )));
        }
        let certified = self.resolve_certified(&parent, &sealed)?;

        verify_quorum(&self.engine.verifier, &self.registry, &sealed)?;
        if apply_epoch_effects(&self.engine.config, &mut self.registry, header)? {
            self.outcome.epochs_scheduled += 1;
        }

        let record = StoredHeaderRecord::new(sealed.hash, parent.hash, number, header.round())
            .with_certified(certified.hash);
        let body = self
            .engine
            .config
            .retention
            .bodies
            .then(|| sealed.encoded.clone());
        self.store.insert(record, body, Linkage::Parent)?;
        self.note_stored(BlockRef::new(sealed.hash, number));

        if number > self.store.latest().head.number {
            self.store.set_head(BlockRef::new(sealed.hash, number))?;
        }

        debug!(
            number,
            round = header.round(),
            hash = %HexDisplay(&sealed.hash),
            certified = certified.number,
            "Accepted header"
        );

        self.try_three_chain(&sealed, &certified)
    }

    /// Find the stored ancestor the QC certifies.
    fn resolve_certified(
        &self,
        parent: &StoredHeaderRecord,
        sealed: &SealedHeader,
    ) -> FinalityResult<StoredHeaderRecord> {
        let proposed = sealed.header.quorum_cert().proposed;
        match self.store.ancestor_at(&parent.hash, proposed.number) {
            Some(ancestor) if ancestor.hash == proposed.hash => {
                if ancestor.round != proposed.round {
                    return Err(FinalityError::MalformedHeader(format!(
                        "QC round {} does not match round {} of certified header #{}",
                        proposed.round, ancestor.round, ancestor.number
                    )));
                }
                Ok(ancestor.clone())
            }
            _ if !self.store.contains(&proposed.hash) => Err(FinalityError::UnknownParent {
                parent: proposed.hash,
                number: sealed.header.number,
            }),
            _ => Err(FinalityError::MalformedHeader(format!(
                "QC of header #{} certifies a header off its branch",
                sealed.header.number
            ))),
        }
    }

    /// Finalize the grandparent of a three-round chain ending at `sealed`.
    ///
    /// ```text
    /// grand (r) ◄─QC── certified (r+1) ◄─QC── sealed (r+2)
    /// ```
    fn try_three_chain(
        &mut self,
        sealed: &SealedHeader,
        certified: &StoredHeaderRecord,
    ) -> FinalityResult<()> {
        let Some(grand) = certified
            .certified
            .and_then(|hash| self.store.record(&hash))
            .cloned()
        else {
            return Ok(());
        };

        let round = sealed.header.round();
        if round != certified.round + 1 || certified.round != grand.round + 1 || grand.finalized {
            return Ok(());
        }

        self.finalize_branch(&grand, BlockRef::new(sealed.hash, sealed.header.number))
    }

    /// Finalize `target` and every unfinalized ancestor below it.
    fn finalize_branch(
        &mut self,
        target: &StoredHeaderRecord,
        trigger: BlockRef,
    ) -> FinalityResult<()> {
        let mut branch = Vec::new();
        let mut cursor = Some(target);
        while let Some(record) = cursor.filter(|record| !record.finalized) {
            branch.push(record.block_ref());
            cursor = self.store.record(&record.parent_hash);
        }

        let mainnet_number = self.engine.host.block_number();
        for block in branch.iter().rev() {
            self.mark_finalized(block, mainnet_number)?;
        }
        self.store.set_last_finalized(target.block_ref());

        // Keep the canonical index on the finalized branch
        let head = self.store.latest().head;
        let head_extends_target = self
            .store
            .ancestor_at(&head.hash, target.number)
            .map(|ancestor| ancestor.hash == target.hash)
            .unwrap_or(false);
        if !head_extends_target {
            debug!(
                old_head = head.number,
                new_head = trigger.number,
                "Moving head onto the finalized branch"
            );
            self.store.set_head(trigger)?;
        }
        Ok(())
    }

    // =========================================================================
    // LITE STORAGE: checkpoint roots and uncommitted runs
    // =========================================================================

    /// Accept one header of a lite or periodic call.
    pub(crate) fn accept_run(&mut self, bytes: &[u8]) -> FinalityResult<()> {
        let sealed = SealedHeader::decode(bytes)?;
        check_certificate_shape(&sealed.header)?;
        if sealed.header.is_checkpoint() {
            self.open_run(&sealed)
        } else {
            self.extend_run(&sealed)
        }
    }

    fn open_run(&mut self, sealed: &SealedHeader) -> FinalityResult<()> {
        let header = &sealed.header;
        let number = header.number;
        let root = sealed.block_info();

        if let Some(existing) = self.store.record(&sealed.hash) {
            debug!(number, hash = %HexDisplay(&sealed.hash), "Checkpoint already stored");
            let root = BlockInfo {
                hash: existing.hash,
                round: existing.round,
                number: existing.number,
            };
            self.cursor = Some(match self.runs.get(&sealed.hash) {
                Some(run) => RunCursor::resume(root, run.tip(), false),
                None => RunCursor::settled(root),
            });
            self.outcome.duplicates += 1;
            return Ok(());
        }

        let latest = self.store.latest().head.number;
        if number <= latest {
            return Err(FinalityError::StaleCheckpoint { number, latest });
        }

        verify_quorum(&self.engine.verifier, &self.registry, sealed)?;
        if apply_epoch_effects(&self.engine.config, &mut self.registry, header)? {
            self.outcome.epochs_scheduled += 1;
        }

        let record = StoredHeaderRecord::new(sealed.hash, header.parent_hash, number, root.round);
        let body = self
            .engine
            .config
            .retention
            .bodies
            .then(|| sealed.encoded.clone());
        self.store.insert(record, body, Linkage::Detached)?;
        self.store.set_head(BlockRef::new(sealed.hash, number))?;
        self.note_stored(BlockRef::new(sealed.hash, number));

        self.runs.insert(sealed.hash, UncommittedRun::open(&root));
        self.cursor = Some(RunCursor::resume(root, root, false));

        debug!(
            number,
            round = root.round,
            hash = %HexDisplay(&sealed.hash),
            "Opened uncommitted run"
        );
        Ok(())
    }

    fn extend_run(&mut self, sealed: &SealedHeader) -> FinalityResult<()> {
        let header = &sealed.header;
        let number = header.number;
        let Some(mut cursor) = self.cursor else {
            return Err(FinalityError::UnknownParent {
                parent: header.parent_hash,
                number,
            });
        };
        let prev = cursor.prev;

        if number <= prev.number {
            debug!(number, tip = prev.number, "Skipping header at or below the run tip");
            self.outcome.duplicates += 1;
            return Ok(());
        }

        let certified = header.quorum_cert().proposed;
        if cursor.skip_ahead {
            if certified.round < prev.round || certified.number < prev.number {
                return Err(FinalityError::MalformedHeader(format!(
                    "header #{} certifies #{} in round {}, below run tip #{} in round {}",
                    number, certified.number, certified.round, prev.number, prev.round
                )));
            }
            cursor.skip_ahead = false;
        } else if header.parent_hash != prev.hash || number != prev.number + 1 {
            return Err(FinalityError::UnknownParent {
                parent: header.parent_hash,
                number,
            });
        }

        if certified.hash == prev.hash
            && (certified.round != prev.round || certified.number != prev.number)
        {
            return Err(FinalityError::MalformedHeader(format!(
                "QC of header #{} does not match the certified header",
                number
            )));
        }

        verify_quorum(&self.engine.verifier, &self.registry, sealed)?;
        apply_epoch_effects(&self.engine.config, &mut self.registry, header)?;

        let info = sealed.block_info();
        self.outcome.accepted += 1;
        self.highest = self.highest.max(number);
        cursor.prev = info;

        if !cursor.settled {
            let root = cursor.root;
            let finalized = match self.runs.get_mut(&root.hash) {
                Some(run) => run.advance(&info, &certified, root.number),
                None => {
                    cursor.settled = true;
                    false
                }
            };
            if finalized {
                self.finalize_root(&root)?;
                self.runs.remove(&root.hash);
                cursor.settled = true;
            }
        }

        debug!(
            number,
            round = info.round,
            root = cursor.root.number,
            sequence = self.runs.get(&cursor.root.hash).map(|run| run.sequence).unwrap_or(0),
            "Extended uncommitted run"
        );
        self.cursor = Some(cursor);
        Ok(())
    }

    fn finalize_root(&mut self, root: &BlockInfo) -> FinalityResult<()> {
        let mainnet_number = self.engine.host.block_number();
        self.mark_finalized(&BlockRef::new(root.hash, root.number), mainnet_number)?;
        if root.number > self.store.latest().last_finalized.number {
            self.store
                .set_last_finalized(BlockRef::new(root.hash, root.number));
        }
        Ok(())
    }

    // =========================================================================
    // SHARED
    // =========================================================================

    fn mark_finalized(&mut self, block: &BlockRef, mainnet_number: u64) -> FinalityResult<()> {
        if !self.store.set_finalized(&block.hash, mainnet_number)? {
            return Ok(());
        }
        if self.engine.config.retention.validator_snapshots {
            let addresses = self.registry.active_set(block.number).addresses.clone();
            self.store.snapshot_validators(block.hash, addresses);
        }
        info!(
            number = block.number,
            hash = %HexDisplay(&block.hash),
            mainnet_number,
            "Header finalized"
        );
        metrics::record_headers_finalized(1);
        self.outcome.finalized.push(*block);
        Ok(())
    }

    fn note_stored(&mut self, block: BlockRef) {
        self.outcome.accepted += 1;
        self.outcome.stored.push(block);
        self.highest = self.highest.max(block.number);
    }
}
