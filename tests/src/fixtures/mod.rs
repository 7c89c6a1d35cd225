//! # Test Fixtures
//!
//! Headers from a live subnet ([`subnet`]) plus helpers turning them into
//! bootstrap states and checkpoints.

pub mod subnet;

use std::sync::Arc;

use shared_types::{parse_address, parse_hash, Address, Hash};
use sr_02_signature_quorum::EcdsaQuorumVerifier;
use sr_05_finality::{Bootstrap, ManualHostChain};
use sr_06_checkpoint::{
    Checkpoint, CheckpointConfig, FullCheckpoint, LiteCheckpoint, PeriodicCheckpoint, Policy,
};

/// Host block the fixture relays start at.
pub const HOST_START: u64 = 1_000;

/// Decode a `0x`-prefixed hex fixture.
pub fn bytes(hex_str: &str) -> Vec<u8> {
    hex::decode(hex_str.trim_start_matches("0x")).expect("fixture hex")
}

/// Decode several fixtures into one batch.
pub fn batch(headers: &[&str]) -> Vec<Vec<u8>> {
    headers.iter().map(|h| bytes(h)).collect()
}

/// Parse a fixture hash.
pub fn hash(hex_str: &str) -> Hash {
    parse_hash(hex_str).expect("fixture hash")
}

/// Parse a fixture validator list.
pub fn addresses(list: &[&str]) -> Vec<Address> {
    list.iter()
        .map(|a| parse_address(a).expect("fixture address"))
        .collect()
}

/// Bootstrap state of the full-storage fixture: genesis plus #1.
pub fn full_bootstrap() -> Bootstrap {
    Bootstrap {
        validators: addresses(&subnet::full::VALIDATORS),
        genesis: Some(bytes(subnet::full::GENESIS)),
        header: bytes(subnet::full::BLOCK_1),
    }
}

/// Bootstrap state of the lite-storage fixture: #1 alone.
pub fn lite_bootstrap() -> Bootstrap {
    Bootstrap {
        validators: addresses(&subnet::lite::VALIDATORS),
        genesis: None,
        header: bytes(subnet::lite::BLOCK_1),
    }
}

/// Bootstrap state of the periodic-storage fixture: #1 alone.
pub fn periodic_bootstrap() -> Bootstrap {
    Bootstrap {
        validators: addresses(&subnet::periodic::VALIDATORS),
        genesis: None,
        header: bytes(subnet::periodic::BLOCK_1),
    }
}

fn relay<P: Policy>(
    bootstrap: &Bootstrap,
) -> (Checkpoint<EcdsaQuorumVerifier, P>, Arc<ManualHostChain>) {
    let host = Arc::new(ManualHostChain::new(HOST_START));
    let checkpoint =
        Checkpoint::with_ecdsa(CheckpointConfig::default(), bootstrap, host.clone())
            .expect("fixture bootstrap");
    (checkpoint, host)
}

/// Full checkpoint over the captured subnet, with its host chain.
pub fn full_relay() -> (FullCheckpoint, Arc<ManualHostChain>) {
    relay(&full_bootstrap())
}

/// Lite checkpoint over the captured subnet, with its host chain.
pub fn lite_relay() -> (LiteCheckpoint, Arc<ManualHostChain>) {
    relay(&lite_bootstrap())
}

/// Periodic checkpoint over the captured subnet, with its host chain.
pub fn periodic_relay() -> (PeriodicCheckpoint, Arc<ManualHostChain>) {
    relay(&periodic_bootstrap())
}
