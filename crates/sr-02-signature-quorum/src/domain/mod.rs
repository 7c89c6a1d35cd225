//! Domain layer: pure signature recovery and quorum counting.

pub mod ecdsa;
pub mod errors;
pub mod quorum;
