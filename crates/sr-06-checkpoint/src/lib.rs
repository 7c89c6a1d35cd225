//! # sr-06-checkpoint
//!
//! Relay checkpoints over a subnet header chain.
//!
//! ## Variants
//!
//! | Variant | Stores | Finalizes by | Extra calls |
//! |---------|--------|--------------|-------------|
//! | [`FullCheckpoint`] | every header, bodies, validator snapshots | three-round commit | `get_header_body`, `validators_at` |
//! | [`LiteCheckpoint`] | checkpoint headers only | uncommitted run reaching sequence 2 | `commit_header` |
//! | [`PeriodicCheckpoint`] | checkpoint headers only | uncommitted run reaching sequence 2 | `commit_header`, `replenish_header`, `check_header` |
//!
//! A checkpoint header is one that carries a validator list. Lite and
//! periodic relays keep one [`UncommittedRun`] per checkpoint root until two
//! consecutive round steps follow it.
//!
//! ## Concurrency
//!
//! Each checkpoint owns its engine behind a `parking_lot::RwLock`. Ingress
//! calls take the write lock for the whole batch, so readers never observe
//! a half-applied batch.
//!
//! ## Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use sr_06_checkpoint::{CheckpointApi, CheckpointConfig, FullCheckpoint};
//! use sr_05_finality::FixedHostChain;
//!
//! let relay = FullCheckpoint::with_ecdsa(
//!     CheckpointConfig::default(),
//!     &bootstrap,
//!     Arc::new(FixedHostChain(host_block)),
//! )?;
//! relay.receive_header(&headers)?;
//! let latest = relay.get_latest_blocks();
//! ```

#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod ports;
pub mod service;

pub use config::CheckpointConfig;
pub use error::{CheckpointError, CheckpointResult};
pub use ports::inbound::{CheckpointApi, CommitApi, ReplenishApi};
pub use service::{
    Checkpoint, Full, FullCheckpoint, Lite, LiteCheckpoint, Periodic, PeriodicCheckpoint, Policy,
    RunPolicy,
};
pub use sr_05_finality::{BatchOutcome, Bootstrap, UncommittedRun};
