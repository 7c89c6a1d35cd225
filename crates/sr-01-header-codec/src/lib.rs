//! # sr-01-header-codec
//!
//! Binary codec for delegated-BFT subnet headers.
//!
//! ## Overview
//!
//! A subnet header is an RLP list of 19 fields. Most of them are Ethereum
//! legacy fields the relay carries byte-for-byte; the fields that matter for
//! finality are `parentHash`, `number`, the v2 `extra` blob (round number and
//! quorum certificate) and the three validator lists.
//!
//! ```text
//!  0 parentHash   5 receiptHash   10 gasUsed    15 validator (seal)
//!  1 uncleHash    6 bloom         11 time       16 validators     (current)
//!  2 coinbase     7 difficulty    12 extra      17 nextValidators
//!  3 root         8 number        13 mixHash    18 penalties
//!  4 txHash       9 gasLimit      14 nonce
//!
//!  extra = 0x02 || RLP([round, [[votedHash, votedRound, votedNumber], [sig...], gapNumber]])
//! ```
//!
//! ## Module Structure
//!
//! ```text
//! sr-01-header-codec/
//! ├── domain/
//! │   ├── entities.rs  # Header, ExtraFields, QuorumCert, BlockInfo
//! │   └── errors.rs    # CodecError
//! ├── codec.rs         # decode / encode / lenient linkage decode
//! └── vote.rs          # keccak256, vote digest
//! ```
//!
//! ## Content addressing
//!
//! A header's hash is `keccak256` of its encoding. [`decode_header`] rejects
//! any input whose re-encoding differs from the input, so
//! `encode_header(decode_header(b)?) == b` holds for every accepted `b`.

#![warn(missing_docs)]

pub mod codec;
pub mod domain;
pub mod vote;

pub use codec::{decode_header, decode_link, encode_header, SealedHeader};
pub use domain::entities::{
    BlockInfo, ExtraFields, Header, HeaderLink, QuorumCert, EXTRA_VERSION, HEADER_FIELD_COUNT,
};
pub use domain::errors::{CodecError, CodecResult};
pub use vote::{keccak256, vote_digest};
