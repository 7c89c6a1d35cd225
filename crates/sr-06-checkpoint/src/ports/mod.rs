//! Ports for checkpoint variants.

pub mod inbound;

pub use inbound::{CheckpointApi, CommitApi, ReplenishApi};
