//! # sr-02-signature-quorum
//!
//! Verifies the quorum certificate a subnet header carries.
//!
//! ## Overview
//!
//! Every signature in a QC is an `r || s || v` secp256k1 signature over the
//! vote digest of the certified header. This crate:
//!
//! - **Recovers** the signer address of each signature. A signature that does
//!   not recover is dropped, it never fails the whole header.
//! - **Counts** distinct recovered addresses that belong to the applicable
//!   validator set. Repeated signers count once.
//! - **Compares** the count against that set's threshold.
//!
//! ## Module Structure
//!
//! ```text
//! sr-02-signature-quorum/
//! ├── domain/
//! │   ├── ecdsa.rs     # recover_address, address_from_pubkey
//! │   ├── quorum.rs    # recover_signers, QuorumTally
//! │   └── errors.rs    # SignatureError
//! ├── ports/
//! │   ├── inbound.rs   # SignatureQuorumApi
//! │   └── outbound.rs  # ValidatorSetView (+ StaticValidatorSet)
//! ├── service.rs       # EcdsaQuorumVerifier
//! └── test_utils.rs    # TestValidator, HeaderBuilder (feature: test-utils)
//! ```

#![warn(missing_docs)]

pub mod domain;
pub mod ports;
pub mod service;

/// Deterministic signing helpers.
/// Requires feature: `test-utils`
#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use domain::ecdsa::{address_from_pubkey, recover_address};
pub use domain::errors::SignatureError;
pub use domain::quorum::{recover_signers, tally, QuorumTally};
pub use ports::inbound::SignatureQuorumApi;
pub use ports::outbound::{StaticValidatorSet, ValidatorSetView};
pub use service::EcdsaQuorumVerifier;
