//! # sr-05-finality
//!
//! Finality engine for a delegated-BFT subnet, verified header by header.
//!
//! ## Overview
//!
//! This subsystem provides:
//! - **Atomic batches**: every header of a call is verified against a staged
//!   overlay; one failure discards the whole call
//! - **Quorum check**: the QC of each header is counted against the epoch of
//!   the header it certifies
//! - **Epoch tracking**: validator lists in headers schedule rotations
//! - **Three-round commit**: three headers in consecutive rounds, each
//!   certifying the one before, finalize the first of them
//! - **Uncommitted runs**: checkpoint roots finalized by a short round streak
//!   when intermediate headers are not stored
//!
//! ## Architecture
//!
//! ```text
//! bytes ──decode──→ SealedHeader ──shape/linkage──→ quorum ──→ epoch effects
//!                                                                 │
//!            ┌────────────────────────────────────────────────────┘
//!            ▼
//!   StagedStore (overlay) ──finish──→ Committed ──apply──→ ChainStore
//! ```
//!
//! ## Three-round commit
//!
//! ```text
//! G (r) ◄─QC── P (r+1) ◄─QC── H (r+2)      →  G finalized
//! ```
//!
//! ## Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use sr_05_finality::{Bootstrap, EngineConfig, FinalityEngine, FixedHostChain};
//! use sr_02_signature_quorum::EcdsaQuorumVerifier;
//!
//! let mut engine = FinalityEngine::bootstrap(
//!     EngineConfig::default(),
//!     &bootstrap,
//!     EcdsaQuorumVerifier::new(),
//!     Arc::new(FixedHostChain(0)),
//! )?;
//!
//! let outcome = engine.receive_chain(&headers)?;
//! for block in outcome.finalized {
//!     println!("finalized #{}", block.number);
//! }
//! ```

mod batch;
pub mod domain;
pub mod engine;
pub mod error;
pub mod metrics;
pub mod ports;
mod verify;

pub use domain::{
    BatchOutcome, Bootstrap, EngineConfig, Retention, UncommittedRun, FINALIZING_SEQUENCE,
};
pub use engine::FinalityEngine;
pub use error::{ErrorKind, FinalityError, FinalityResult};
pub use ports::outbound::{FixedHostChain, HostChain, ManualHostChain};
