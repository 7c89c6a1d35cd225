//! Test utilities for building signed subnet headers.
//!
//! Enable with the `test-utils` feature flag.
//!
//! # Example
//!
//! ```rust
//! use sr_02_signature_quorum::test_utils::{HeaderBuilder, TestValidator};
//!
//! let validators = TestValidator::set(3);
//! let block1 = HeaderBuilder::bootstrap(1, 1).build();
//! let block2 = HeaderBuilder::child_of(&block1)
//!     .signed_by(&validators[..2])
//!     .build();
//! assert_eq!(block2.header.number, 2);
//! assert_eq!(block2.header.round(), 2);
//! ```

use k256::ecdsa::SigningKey;
use shared_types::{Address, BlockNumber, Hash, Round, ZERO_HASH};
use sr_01_header_codec::{BlockInfo, ExtraFields, Header, QuorumCert, SealedHeader};

use crate::domain::ecdsa::address_from_pubkey;

/// A validator with a deterministic secp256k1 key.
#[derive(Clone)]
pub struct TestValidator {
    key: SigningKey,
    /// Address derived from the key.
    pub address: Address,
}

impl std::fmt::Debug for TestValidator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TestValidator")
            .field("address", &self.address)
            .finish()
    }
}

impl TestValidator {
    /// Validator number `index`. Same index, same key.
    pub fn new(index: u64) -> Self {
        let mut secret = [0u8; 32];
        secret[0] = 0x5a;
        secret[24..].copy_from_slice(&(index + 1).to_be_bytes());
        let key = SigningKey::from_slice(&secret).expect("small scalar is a valid key");
        let address = address_from_pubkey(key.verifying_key());
        Self { key, address }
    }

    /// `count` validators with indices `0..count`.
    pub fn set(count: u64) -> Vec<Self> {
        Self::set_from(0, count)
    }

    /// `count` validators with indices `start..start + count`.
    pub fn set_from(start: u64, count: u64) -> Vec<Self> {
        (start..start + count).map(Self::new).collect()
    }

    /// Addresses of `validators`, in order.
    pub fn addresses(validators: &[Self]) -> Vec<Address> {
        validators.iter().map(|v| v.address).collect()
    }

    /// Sign a 32-byte digest, returning `r || s || v` with `v` in {0, 1}.
    pub fn sign(&self, digest: &Hash) -> Vec<u8> {
        let (signature, recovery_id) = self
            .key
            .sign_prehash_recoverable(digest)
            .expect("prehash signing");
        let mut out = signature.to_bytes().to_vec();
        out.push(recovery_id.to_byte());
        out
    }
}

/// Builds a header the way the subnet's consensus layer composes one:
/// zeroed legacy fields, v2 extra data and a QC over the certified block.
#[derive(Debug, Clone)]
pub struct HeaderBuilder {
    header: Header,
    signers: Vec<TestValidator>,
}

impl HeaderBuilder {
    /// A header with no meaningful parent, for bootstrap and lite roots.
    pub fn bootstrap(number: BlockNumber, round: Round) -> Self {
        let certified = BlockInfo {
            hash: ZERO_HASH,
            round: round.saturating_sub(1),
            number: number.saturating_sub(1),
        };
        Self::new(ZERO_HASH, number, round, certified)
    }

    /// The next header after `parent`: number + 1, round + 1, certifying `parent`.
    pub fn child_of(parent: &SealedHeader) -> Self {
        let info = parent.block_info();
        Self::new(info.hash, info.number + 1, info.round + 1, info)
    }

    fn new(parent_hash: Hash, number: BlockNumber, round: Round, certified: BlockInfo) -> Self {
        let header = Header {
            parent_hash,
            uncle_hash: ZERO_HASH.to_vec(),
            coinbase: ZERO_HASH.to_vec(),
            state_root: ZERO_HASH.to_vec(),
            tx_root: ZERO_HASH.to_vec(),
            receipt_root: ZERO_HASH.to_vec(),
            bloom: vec![0u8; 256],
            difficulty: 0,
            number,
            gas_limit: 0,
            gas_used: 0,
            time: 0,
            extra: ExtraFields {
                round,
                quorum_cert: QuorumCert {
                    proposed: certified,
                    signatures: Vec::new(),
                    gap_number: 0,
                },
            },
            mix_hash: ZERO_HASH.to_vec(),
            nonce: vec![0u8; 8],
            validator: vec![0u8; 8],
            validators: Vec::new(),
            next_validators: Vec::new(),
            penalties: Vec::new(),
        };
        Self {
            header,
            signers: Vec::new(),
        }
    }

    /// Override the header's round.
    pub fn round(mut self, round: Round) -> Self {
        self.header.extra.round = round;
        self
    }

    /// Override the block the QC certifies.
    pub fn certify(mut self, proposed: BlockInfo) -> Self {
        self.header.extra.quorum_cert.proposed = proposed;
        self
    }

    /// Set the QC gap number.
    pub fn gap_number(mut self, gap_number: u64) -> Self {
        self.header.extra.quorum_cert.gap_number = gap_number;
        self
    }

    /// Declare the current validator set (epoch-switch header).
    pub fn validators(mut self, addresses: Vec<Address>) -> Self {
        self.header.validators = addresses;
        self
    }

    /// Schedule the next validator set.
    pub fn next_validators(mut self, addresses: Vec<Address>) -> Self {
        self.header.next_validators = addresses;
        self
    }

    /// Penalize addresses out of the next validator set.
    pub fn penalties(mut self, addresses: Vec<Address>) -> Self {
        self.header.penalties = addresses;
        self
    }

    /// Set the timestamp, useful for creating sibling headers.
    pub fn time(mut self, time: u64) -> Self {
        self.header.time = time;
        self
    }

    /// Validators whose votes go into the QC.
    pub fn signed_by(mut self, validators: &[TestValidator]) -> Self {
        self.signers = validators.to_vec();
        self
    }

    /// Add raw signature bytes after the real votes.
    pub fn extra_signature(mut self, signature: Vec<u8>) -> Self {
        self.header.extra.quorum_cert.signatures.push(signature);
        self
    }

    /// Sign, encode and hash.
    pub fn build(mut self) -> SealedHeader {
        let digest = self.header.extra.quorum_cert.vote_digest();
        let mut votes: Vec<Vec<u8>> = self.signers.iter().map(|v| v.sign(&digest)).collect();
        votes.append(&mut self.header.extra.quorum_cert.signatures);
        self.header.extra.quorum_cert.signatures = votes;
        SealedHeader::seal(self.header)
    }
}
