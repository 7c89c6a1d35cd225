//! # ECDSA Recovery (secp256k1)
//!
//! Signer recovery for QC signatures.
//!
//! ## Notes
//!
//! - Signatures are 65 bytes: `r (32) || s (32) || v (1)`, `v` in {0, 1, 27, 28}.
//! - Verification inside `k256` rejects high-S signatures, so malleated
//!   duplicates of a valid signature do not recover.

use k256::ecdsa::{RecoveryId, Signature, VerifyingKey};
use shared_types::{Address, Hash};
use sr_01_header_codec::keccak256;

use super::errors::SignatureError;

/// Length of a raw QC signature.
pub const SIGNATURE_LENGTH: usize = 65;

/// Recover the signer's address from a raw 65-byte signature.
pub fn recover_address(message_hash: &Hash, signature: &[u8]) -> Result<Address, SignatureError> {
    if signature.len() != SIGNATURE_LENGTH {
        return Err(SignatureError::InvalidLength(signature.len()));
    }

    let recovery_id = parse_recovery_id(signature[64])?;
    let sig = Signature::from_slice(&signature[..64]).map_err(|_| SignatureError::InvalidFormat)?;

    let recovered_key = VerifyingKey::recover_from_prehash(message_hash, &sig, recovery_id)
        .map_err(|_| SignatureError::RecoveryFailed)?;

    Ok(address_from_pubkey(&recovered_key))
}

/// Derive the Ethereum-style address of a public key.
pub fn address_from_pubkey(public_key: &VerifyingKey) -> Address {
    let pubkey_bytes = public_key.to_encoded_point(false);
    let pubkey_slice = pubkey_bytes.as_bytes();

    // Keccak256 of the public key without the 0x04 prefix
    let hash = keccak256(&pubkey_slice[1..]);

    let mut address = [0u8; 20];
    address.copy_from_slice(&hash[12..]);
    address
}

fn parse_recovery_id(v: u8) -> Result<RecoveryId, SignatureError> {
    let id = match v {
        0 | 27 => 0,
        1 | 28 => 1,
        _ => return Err(SignatureError::InvalidRecoveryId(v)),
    };

    RecoveryId::try_from(id).map_err(|_| SignatureError::InvalidRecoveryId(v))
}
