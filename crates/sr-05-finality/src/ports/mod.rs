//! Ports for the finality engine.

pub mod outbound;

pub use outbound::{FixedHostChain, HostChain, ManualHostChain};
