//! Ports for the signature quorum subsystem.

pub mod inbound;
pub mod outbound;
