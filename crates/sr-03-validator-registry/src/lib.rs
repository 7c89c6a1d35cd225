//! # sr-03-validator-registry
//!
//! Epoch-indexed history of subnet validator sets.
//!
//! ## Overview
//!
//! - **Epochs** are `(addresses, threshold, effective_from)` triples. The
//!   epoch that applies to block `n` is the one with the greatest
//!   `effective_from <= n`.
//! - **Rotations** append a new epoch. Penalized addresses are removed from
//!   the incoming set when it is inserted; the active set is never edited.
//! - **History is append-only**: a rotation must take effect strictly after
//!   every epoch already recorded.
//!
//! ```text
//!  effective_from:   0            7                 20
//!                    │ genesis    │ rotation #1     │ rotation #2
//!  block numbers ────┴────────────┴─────────────────┴────────────▶
//!  activeSet(6) = genesis, activeSet(7..=19) = #1, activeSet(20..) = #2
//! ```
//!
//! ## Module Structure
//!
//! ```text
//! sr-03-validator-registry/
//! ├── domain/
//! │   ├── entities.rs     # ValidatorEpoch, RotationActivation, EpochSchedule
//! │   ├── quorum_rule.rs  # QuorumRule (fractional or fixed threshold)
//! │   └── errors.rs       # RegistryError
//! └── registry.rs         # ValidatorSetRegistry
//! ```

#![warn(missing_docs)]

pub mod domain;
pub mod registry;

pub use domain::entities::{EpochSchedule, RotationActivation, ValidatorEpoch};
pub use domain::errors::{RegistryError, RegistryResult};
pub use domain::quorum_rule::QuorumRule;
pub use registry::ValidatorSetRegistry;
