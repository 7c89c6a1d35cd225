//! # Finality Engine
//!
//! Owns the chain store, the validator registry and the run table. Every
//! ingress call is staged in a [`Batch`] and committed only if all of its
//! headers pass.

use std::collections::HashMap;
use std::sync::Arc;

use shared_types::{Address, BlockNumber, BlockRef, Hash, HexDisplay, HostBlockNumber};
use sr_01_header_codec::{decode_link, BlockInfo, HeaderLink, SealedHeader};
use sr_02_signature_quorum::SignatureQuorumApi;
use sr_03_validator_registry::{ValidatorEpoch, ValidatorSetRegistry};
use sr_04_chain_store::{
    ChainStore, HeaderReader, LatestPointers, Linkage, StagedStore, StoredHeaderRecord,
};
use tracing::{debug, info, warn};

use crate::batch::{Batch, Committed, RunCursor};
use crate::domain::config::EngineConfig;
use crate::domain::entities::{BatchOutcome, Bootstrap};
use crate::domain::run::UncommittedRun;
use crate::error::{FinalityError, FinalityResult};
use crate::metrics;
use crate::ports::outbound::HostChain;
use crate::verify::{apply_epoch_effects, check_certificate_shape, verify_quorum};

/// How headers of a call attach to stored state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Ingest {
    /// Every header links to a stored parent.
    Chain,
    /// Checkpoints open runs; other headers extend the current run.
    Runs,
}

/// Chained three-round commit over quorum-certified headers.
pub struct FinalityEngine<V> {
    pub(crate) config: EngineConfig,
    pub(crate) verifier: V,
    pub(crate) host: Arc<dyn HostChain>,
    pub(crate) store: ChainStore,
    pub(crate) registry: ValidatorSetRegistry,
    pub(crate) runs: HashMap<Hash, UncommittedRun>,
    /// Highest header number verified so far.
    pub(crate) highest: BlockNumber,
}

impl<V: SignatureQuorumApi> FinalityEngine<V> {
    /// Start from trusted bootstrap headers.
    pub fn bootstrap(
        config: EngineConfig,
        bootstrap: &Bootstrap,
        verifier: V,
        host: Arc<dyn HostChain>,
    ) -> FinalityResult<Self> {
        let registry = ValidatorSetRegistry::genesis(bootstrap.validators.clone(), config.quorum)
            .map_err(|e| FinalityError::invalid_epoch(0, e))?;

        let root = decode_link(&bootstrap.header)?;
        let genesis = bootstrap
            .genesis
            .as_deref()
            .map(|bytes| decode_link(bytes).map(|link| (link, bytes)))
            .transpose()?;
        if let Some((link, _)) = &genesis {
            if link.number >= root.number {
                return Err(FinalityError::MalformedHeader(format!(
                    "genesis #{} is not below bootstrap header #{}",
                    link.number, root.number
                )));
            }
            if root.parent_hash != link.hash {
                return Err(FinalityError::MalformedHeader(format!(
                    "bootstrap header #{} does not link to genesis #{}",
                    root.number, link.number
                )));
            }
        }

        let mainnet_number = host.block_number();
        let mut store = ChainStore::new();
        {
            let mut staged = store.stage();
            if let Some((link, bytes)) = genesis {
                seed_trusted(&mut staged, &config, &registry, &link, bytes, mainnet_number)?;
            }
            seed_trusted(
                &mut staged,
                &config,
                &registry,
                &root,
                &bootstrap.header,
                mainnet_number,
            )?;
            let pointer = BlockRef::new(root.hash, root.number);
            staged.set_head(pointer)?;
            staged.set_last_finalized(pointer);
            let writes = staged.into_writes();
            store.apply(writes);
        }

        info!(
            number = root.number,
            hash = %HexDisplay(&root.hash),
            validators = registry.latest().len(),
            threshold = registry.latest().threshold,
            "Relay bootstrapped"
        );

        Ok(Self {
            config,
            verifier,
            host,
            store,
            registry,
            runs: HashMap::new(),
            highest: root.number,
        })
    }

    // =========================================================================
    // INGRESS
    // =========================================================================

    /// Accept a batch of headers that each extend a stored header.
    pub fn receive_chain(&mut self, headers: &[Vec<u8>]) -> FinalityResult<BatchOutcome> {
        self.execute("receive_chain", headers, Ingest::Chain, None)
    }

    /// Accept a batch of checkpoints and run continuations.
    pub fn receive_runs(&mut self, headers: &[Vec<u8>]) -> FinalityResult<BatchOutcome> {
        self.execute("receive_runs", headers, Ingest::Runs, None)
    }

    /// Continue the run rooted at `root` from its tip.
    pub fn commit_run(&mut self, root: &Hash, headers: &[Vec<u8>]) -> FinalityResult<BatchOutcome> {
        self.check_batch(headers.len())?;
        match self.run_cursor(root, false)? {
            Some(cursor) => self.execute("commit_run", headers, Ingest::Runs, Some(cursor)),
            None => Ok(BatchOutcome::default()),
        }
    }

    /// Continue the run rooted at `root`, letting the first header skip ahead
    /// of the tip.
    pub fn replenish_run(
        &mut self,
        root: &Hash,
        headers: &[Vec<u8>],
    ) -> FinalityResult<BatchOutcome> {
        self.check_batch(headers.len())?;
        match self.run_cursor(root, true)? {
            Some(cursor) => self.execute("replenish_run", headers, Ingest::Runs, Some(cursor)),
            None => Ok(BatchOutcome::default()),
        }
    }

    /// Dry run: decode, certificate shape, quorum and epoch checks.
    ///
    /// Nothing is stored and linkage is not checked.
    pub fn check_header(&self, bytes: &[u8]) -> bool {
        match self.dry_run(bytes) {
            Ok(sealed) => {
                debug!(number = sealed.header.number, "Header passes dry-run checks");
                true
            }
            Err(e) => {
                debug!(error = %e, "Header fails dry-run checks");
                false
            }
        }
    }

    fn dry_run(&self, bytes: &[u8]) -> FinalityResult<SealedHeader> {
        let sealed = SealedHeader::decode(bytes)?;
        check_certificate_shape(&sealed.header)?;
        verify_quorum(&self.verifier, &self.registry, &sealed)?;
        let mut registry = self.registry.clone();
        apply_epoch_effects(&self.config, &mut registry, &sealed.header)?;
        Ok(sealed)
    }

    fn check_batch(&self, size: usize) -> FinalityResult<()> {
        if size == 0 {
            return Err(FinalityError::EmptyBatch);
        }
        if size > self.config.max_batch_size {
            return Err(FinalityError::BatchTooLarge {
                size,
                max: self.config.max_batch_size,
            });
        }
        Ok(())
    }

    /// Cursor at the tip of the run rooted at `root`, or `None` if the root
    /// is already finalized.
    fn run_cursor(&self, root: &Hash, skip_ahead: bool) -> FinalityResult<Option<RunCursor>> {
        let record = self.store.get(root).ok_or(FinalityError::UnknownRun(*root))?;
        match self.runs.get(root) {
            Some(run) => {
                let info = BlockInfo {
                    hash: record.hash,
                    round: record.round,
                    number: record.number,
                };
                Ok(Some(RunCursor::resume(info, run.tip(), skip_ahead)))
            }
            None if record.finalized => {
                debug!(root = record.number, "Run already finalized; nothing to commit");
                Ok(None)
            }
            None => Err(FinalityError::UnknownRun(*root)),
        }
    }

    fn execute(
        &mut self,
        operation: &'static str,
        headers: &[Vec<u8>],
        ingest: Ingest,
        cursor: Option<RunCursor>,
    ) -> FinalityResult<BatchOutcome> {
        match self.stage(headers, ingest, cursor) {
            Ok(committed) => Ok(self.commit(committed)),
            Err(e) => {
                warn!(
                    operation,
                    size = headers.len(),
                    kind = %e.kind(),
                    error = %e,
                    "Rejected header batch"
                );
                metrics::record_batch_rejected(e.kind().as_str());
                Err(e)
            }
        }
    }

    fn stage(
        &self,
        headers: &[Vec<u8>],
        ingest: Ingest,
        cursor: Option<RunCursor>,
    ) -> FinalityResult<Committed> {
        self.check_batch(headers.len())?;
        let mut batch = Batch::open(self, cursor);
        for (index, bytes) in headers.iter().enumerate() {
            let step = match ingest {
                Ingest::Chain => batch.accept_linked(bytes),
                Ingest::Runs => batch.accept_run(bytes),
            };
            if let Err(e) = step {
                debug!(index, error = %e, "Header rejected");
                return Err(e);
            }
        }
        Ok(batch.finish())
    }

    fn commit(&mut self, committed: Committed) -> BatchOutcome {
        let Committed {
            writes,
            registry,
            runs,
            highest,
            outcome,
        } = committed;

        self.store.apply(writes);
        self.registry = registry;
        self.runs = runs;
        self.highest = highest;

        metrics::record_headers_accepted(outcome.accepted as u64);
        let latest = self.store.latest();
        debug!(
            accepted = outcome.accepted,
            duplicates = outcome.duplicates,
            finalized = outcome.finalized.len(),
            head = latest.head.number,
            last_finalized = latest.last_finalized.number,
            "Committed header batch"
        );
        outcome
    }

    // =========================================================================
    // QUERIES
    // =========================================================================

    /// Stored record for `hash`.
    pub fn header(&self, hash: &Hash) -> Option<&StoredHeaderRecord> {
        self.store.get(hash)
    }

    /// Canonical record at `number`.
    pub fn header_by_number(&self, number: BlockNumber) -> Option<&StoredHeaderRecord> {
        self.store.get_by_number(number)
    }

    /// `head` and `last_finalized`.
    pub fn latest(&self) -> LatestPointers {
        self.store.latest()
    }

    /// Run rooted at `root`; zeroed if unknown or finalized.
    pub fn uncommitted(&self, root: &Hash) -> UncommittedRun {
        self.runs.get(root).copied().unwrap_or_default()
    }

    /// The epoch that verifies a header certifying the highest one seen.
    pub fn current_validators(&self) -> &ValidatorEpoch {
        self.registry.active_set(self.highest.saturating_add(1))
    }

    /// Encoded header, when bodies are retained.
    pub fn header_body(&self, hash: &Hash) -> Option<&[u8]> {
        self.store.body(hash)
    }

    /// Validators active at a finalized header, when snapshots are retained.
    pub fn validators_at(&self, hash: &Hash) -> Option<&[Address]> {
        self.store.validators_at(hash)
    }

    /// Highest header number verified so far.
    pub fn highest_processed(&self) -> BlockNumber {
        self.highest
    }

    /// Validator epochs.
    pub fn registry(&self) -> &ValidatorSetRegistry {
        &self.registry
    }

    /// Engine configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }
}

fn seed_trusted(
    staged: &mut StagedStore<'_>,
    config: &EngineConfig,
    registry: &ValidatorSetRegistry,
    link: &HeaderLink,
    bytes: &[u8],
    mainnet_number: HostBlockNumber,
) -> FinalityResult<()> {
    let mut record = StoredHeaderRecord::new(link.hash, link.parent_hash, link.number, link.round);
    record.finalized = true;
    record.mainnet_number = Some(mainnet_number);

    let body = config.retention.bodies.then(|| bytes.to_vec());
    staged.insert(record, body, Linkage::Detached)?;
    if config.retention.validator_snapshots {
        staged.snapshot_validators(link.hash, registry.active_set(link.number).addresses.clone());
    }
    Ok(())
}
