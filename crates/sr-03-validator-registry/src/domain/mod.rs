//! Domain layer for the validator registry.

pub mod entities;
pub mod errors;
pub mod quorum_rule;
