//! # Checkpoint Service
//!
//! One finality engine behind a read-write lock, with the ingestion policy
//! chosen by a marker type.

use std::marker::PhantomData;
use std::sync::Arc;

use parking_lot::RwLock;
use shared_types::{Address, BlockNumber, Hash};
use sr_02_signature_quorum::{EcdsaQuorumVerifier, SignatureQuorumApi};
use sr_03_validator_registry::ValidatorEpoch;
use sr_04_chain_store::{LatestPointers, StoredHeaderRecord};
use sr_05_finality::{
    BatchOutcome, Bootstrap, FinalityEngine, FinalityResult, HostChain, Retention, UncommittedRun,
};
use tracing::info;

use crate::config::CheckpointConfig;
use crate::error::CheckpointResult;
use crate::ports::inbound::{CheckpointApi, CommitApi, ReplenishApi};

/// How a variant stores and ingests headers.
pub trait Policy: Send + Sync + 'static {
    /// Name used in logs.
    const NAME: &'static str;

    /// Bodies and snapshots this variant keeps.
    const RETENTION: Retention;

    /// Apply a `receive_header` batch.
    fn receive<V: SignatureQuorumApi>(
        engine: &mut FinalityEngine<V>,
        headers: &[Vec<u8>],
    ) -> FinalityResult<BatchOutcome>;
}

/// Policies that leave checkpoint roots pending in uncommitted runs.
pub trait RunPolicy: Policy {}

/// Every header stored and linked; bodies and validator snapshots kept.
#[derive(Debug, Clone, Copy)]
pub struct Full;

/// Only checkpoint headers stored; roots finalize through uncommitted runs.
#[derive(Debug, Clone, Copy)]
pub struct Lite;

/// Lite, plus gap replenishment and dry-run checks.
#[derive(Debug, Clone, Copy)]
pub struct Periodic;

impl Policy for Full {
    const NAME: &'static str = "full";
    const RETENTION: Retention = Retention::FULL;

    fn receive<V: SignatureQuorumApi>(
        engine: &mut FinalityEngine<V>,
        headers: &[Vec<u8>],
    ) -> FinalityResult<BatchOutcome> {
        engine.receive_chain(headers)
    }
}

impl Policy for Lite {
    const NAME: &'static str = "lite";
    const RETENTION: Retention = Retention::MINIMAL;

    fn receive<V: SignatureQuorumApi>(
        engine: &mut FinalityEngine<V>,
        headers: &[Vec<u8>],
    ) -> FinalityResult<BatchOutcome> {
        engine.receive_runs(headers)
    }
}

impl Policy for Periodic {
    const NAME: &'static str = "periodic";
    const RETENTION: Retention = Retention::MINIMAL;

    fn receive<V: SignatureQuorumApi>(
        engine: &mut FinalityEngine<V>,
        headers: &[Vec<u8>],
    ) -> FinalityResult<BatchOutcome> {
        engine.receive_runs(headers)
    }
}

impl RunPolicy for Lite {}
impl RunPolicy for Periodic {}

/// A relay checkpoint: bootstrap state plus one ingestion policy.
pub struct Checkpoint<V, P> {
    config: CheckpointConfig,
    engine: RwLock<FinalityEngine<V>>,
    _policy: PhantomData<fn() -> P>,
}

/// Full storage variant.
pub type FullCheckpoint<V = EcdsaQuorumVerifier> = Checkpoint<V, Full>;
/// Lite storage variant.
pub type LiteCheckpoint<V = EcdsaQuorumVerifier> = Checkpoint<V, Lite>;
/// Periodic storage variant.
pub type PeriodicCheckpoint<V = EcdsaQuorumVerifier> = Checkpoint<V, Periodic>;

impl<V: SignatureQuorumApi, P: Policy> Checkpoint<V, P> {
    /// Validate `config` and store the trusted bootstrap headers.
    pub fn new(
        config: CheckpointConfig,
        bootstrap: &Bootstrap,
        verifier: V,
        host: Arc<dyn HostChain>,
    ) -> CheckpointResult<Self> {
        config.validate()?;
        let engine =
            FinalityEngine::bootstrap(config.engine_config(P::RETENTION), bootstrap, verifier, host)?;
        info!(
            policy = P::NAME,
            epoch_length = config.epoch_length,
            gap = config.gap,
            "Checkpoint initialized"
        );
        Ok(Self {
            config,
            engine: RwLock::new(engine),
            _policy: PhantomData,
        })
    }

    /// Configuration in use.
    pub fn config(&self) -> &CheckpointConfig {
        &self.config
    }

    /// Policy name.
    pub fn policy(&self) -> &'static str {
        P::NAME
    }

    /// Highest header number verified so far.
    pub fn highest_processed(&self) -> BlockNumber {
        self.engine.read().highest_processed()
    }
}

impl<P: Policy> Checkpoint<EcdsaQuorumVerifier, P> {
    /// Checkpoint verifying QCs with secp256k1 recovery.
    pub fn with_ecdsa(
        config: CheckpointConfig,
        bootstrap: &Bootstrap,
        host: Arc<dyn HostChain>,
    ) -> CheckpointResult<Self> {
        Self::new(config, bootstrap, EcdsaQuorumVerifier::new(), host)
    }
}

impl<V: SignatureQuorumApi> Checkpoint<V, Full> {
    /// Encoded header as received.
    pub fn get_header_body(&self, hash: &Hash) -> Option<Vec<u8>> {
        self.engine.read().header_body(hash).map(<[u8]>::to_vec)
    }

    /// Validators active at a finalized header.
    pub fn validators_at(&self, hash: &Hash) -> Option<Vec<Address>> {
        self.engine.read().validators_at(hash).map(<[Address]>::to_vec)
    }
}

impl<V: SignatureQuorumApi, P: Policy> CheckpointApi for Checkpoint<V, P> {
    fn receive_header(&self, headers: &[Vec<u8>]) -> CheckpointResult<BatchOutcome> {
        let mut engine = self.engine.write();
        Ok(P::receive(&mut *engine, headers)?)
    }

    fn get_header(&self, hash: &Hash) -> Option<StoredHeaderRecord> {
        self.engine.read().header(hash).cloned()
    }

    fn get_header_by_number(&self, number: BlockNumber) -> Option<StoredHeaderRecord> {
        self.engine.read().header_by_number(number).cloned()
    }

    fn get_latest_blocks(&self) -> LatestPointers {
        self.engine.read().latest()
    }

    fn get_current_validators(&self) -> ValidatorEpoch {
        self.engine.read().current_validators().clone()
    }
}

impl<V: SignatureQuorumApi, P: RunPolicy> CommitApi for Checkpoint<V, P> {
    fn commit_header(&self, root: &Hash, headers: &[Vec<u8>]) -> CheckpointResult<BatchOutcome> {
        Ok(self.engine.write().commit_run(root, headers)?)
    }

    fn get_uncommitted_header(&self, root: &Hash) -> UncommittedRun {
        self.engine.read().uncommitted(root)
    }
}

impl<V: SignatureQuorumApi> ReplenishApi for Checkpoint<V, Periodic> {
    fn replenish_header(
        &self,
        root: &Hash,
        headers: &[Vec<u8>],
    ) -> CheckpointResult<BatchOutcome> {
        Ok(self.engine.write().replenish_run(root, headers)?)
    }

    fn check_header(&self, header: &[u8]) -> bool {
        self.engine.read().check_header(header)
    }
}
