//! # Header Codec
//!
//! RLP decode/encode for subnet headers and their v2 extra data.
//!
//! Decoding is strict: the field count, fixed field sizes and the extra
//! version byte are all checked, and the input must be the canonical
//! encoding of what was decoded.

use rlp::{DecoderError, Rlp, RlpStream};
use shared_types::{Address, Hash};
use tracing::trace;

use crate::domain::entities::{
    BlockInfo, ExtraFields, Header, HeaderLink, QuorumCert, EXTRA_VERSION, HEADER_FIELD_COUNT,
};
use crate::domain::errors::{CodecError, CodecResult};
use crate::vote::keccak256;

/// A decoded header together with its hash and original encoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SealedHeader {
    /// `keccak256(encoded)`.
    pub hash: Hash,
    /// Structured fields.
    pub header: Header,
    /// Canonical encoding.
    pub encoded: Vec<u8>,
}

impl SealedHeader {
    /// Decode `bytes` and compute the content hash.
    pub fn decode(bytes: &[u8]) -> CodecResult<Self> {
        let header = decode_header(bytes)?;
        let hash = keccak256(bytes);
        trace!(
            number = header.number,
            round = header.round(),
            "Decoded subnet header"
        );
        Ok(Self {
            hash,
            header,
            encoded: bytes.to_vec(),
        })
    }

    /// Encode `header` and compute its hash.
    pub fn seal(header: Header) -> Self {
        let encoded = encode_header(&header);
        let hash = keccak256(&encoded);
        Self {
            hash,
            header,
            encoded,
        }
    }

    /// `(hash, round, number)` for this header.
    pub fn block_info(&self) -> BlockInfo {
        self.header.block_info(self.hash)
    }
}

// =============================================================================
// DECODING
// =============================================================================

/// Decode a subnet header.
///
/// Fails when the structure does not match the 19-field layout, when the
/// extra data is not version 2, or when `bytes` is not canonical.
pub fn decode_header(bytes: &[u8]) -> CodecResult<Header> {
    let rlp = open_header_list(bytes)?;

    let extra_bytes = decode_bytes(&rlp, 12, "extra")?;

    let header = Header {
        parent_hash: decode_hash(&rlp, 0, "parentHash")?,
        uncle_hash: decode_bytes(&rlp, 1, "uncleHash")?,
        coinbase: decode_bytes(&rlp, 2, "coinbase")?,
        state_root: decode_bytes(&rlp, 3, "root")?,
        tx_root: decode_bytes(&rlp, 4, "txHash")?,
        receipt_root: decode_bytes(&rlp, 5, "receiptHash")?,
        bloom: decode_bytes(&rlp, 6, "bloom")?,
        difficulty: decode_u64(&rlp, 7, "difficulty")?,
        number: decode_u64(&rlp, 8, "number")?,
        gas_limit: decode_u64(&rlp, 9, "gasLimit")?,
        gas_used: decode_u64(&rlp, 10, "gasUsed")?,
        time: decode_u64(&rlp, 11, "time")?,
        extra: decode_extra(&extra_bytes)?,
        mix_hash: decode_bytes(&rlp, 13, "mixHash")?,
        nonce: decode_bytes(&rlp, 14, "nonce")?,
        validator: decode_bytes(&rlp, 15, "validator")?,
        validators: decode_address_list(&rlp, 16, "validators")?,
        next_validators: decode_address_list(&rlp, 17, "nextValidators")?,
        penalties: decode_address_list(&rlp, 18, "penalties")?,
    };

    if encode_header(&header) != bytes {
        return Err(CodecError::NonCanonical);
    }

    Ok(header)
}

/// Decode only the linkage fields of a header.
///
/// Bootstrap headers may carry pre-v2 extra data; their round reads as 0.
pub fn decode_link(bytes: &[u8]) -> CodecResult<HeaderLink> {
    let rlp = open_header_list(bytes)?;
    let round = decode_bytes(&rlp, 12, "extra")
        .and_then(|extra| decode_extra(&extra))
        .map(|extra| extra.round)
        .unwrap_or(0);

    Ok(HeaderLink {
        hash: keccak256(bytes),
        parent_hash: decode_hash(&rlp, 0, "parentHash")?,
        number: decode_u64(&rlp, 8, "number")?,
        round,
    })
}

/// Decode the v2 extra data: `0x02 || RLP([round, qc])`.
pub fn decode_extra(extra: &[u8]) -> CodecResult<ExtraFields> {
    let (&version, body) = extra.split_first().ok_or(CodecError::EmptyExtra)?;
    if version != EXTRA_VERSION {
        return Err(CodecError::UnsupportedExtraVersion(version));
    }

    let rlp = Rlp::new(body);
    ensure_exact(&rlp, body.len(), "extra")?;
    expect_list(&rlp, 2, "extra")?;

    let round = decode_u64(&rlp, 0, "extra.round")?;

    let qc = rlp.at(1).map_err(|e| rlp_error("extra.qc", e))?;
    expect_list(&qc, 3, "extra.qc")?;

    let proposed = qc.at(0).map_err(|e| rlp_error("qc.proposed", e))?;
    expect_list(&proposed, 3, "qc.proposed")?;

    let signatures = qc
        .at(1)
        .and_then(|sigs| sigs.as_list::<Vec<u8>>())
        .map_err(|e| rlp_error("qc.signatures", e))?;

    Ok(ExtraFields {
        round,
        quorum_cert: QuorumCert {
            proposed: BlockInfo {
                hash: decode_hash(&proposed, 0, "qc.proposed.hash")?,
                round: decode_u64(&proposed, 1, "qc.proposed.round")?,
                number: decode_u64(&proposed, 2, "qc.proposed.number")?,
            },
            signatures,
            gap_number: decode_u64(&qc, 2, "qc.gapNumber")?,
        },
    })
}

fn open_header_list(bytes: &[u8]) -> CodecResult<Rlp<'_>> {
    let rlp = Rlp::new(bytes);
    if !rlp.is_list() {
        return Err(CodecError::NotAList);
    }
    ensure_exact(&rlp, bytes.len(), "header")?;

    let count = rlp.item_count().map_err(|e| rlp_error("item count", e))?;
    if count != HEADER_FIELD_COUNT {
        return Err(CodecError::FieldCount {
            expected: HEADER_FIELD_COUNT,
            got: count,
        });
    }
    Ok(rlp)
}

fn expect_list(rlp: &Rlp, expected: usize, field: &str) -> CodecResult<()> {
    if !rlp.is_list() {
        return Err(CodecError::Rlp {
            field: field.to_string(),
            reason: "expected list".to_string(),
        });
    }
    let count = rlp.item_count().map_err(|e| rlp_error(field, e))?;
    if count != expected {
        return Err(CodecError::Rlp {
            field: field.to_string(),
            reason: format!("expected {} items, got {}", expected, count),
        });
    }
    Ok(())
}

fn ensure_exact(rlp: &Rlp, len: usize, what: &'static str) -> CodecResult<()> {
    let info = rlp.payload_info().map_err(|e| rlp_error(what, e))?;
    if info.header_len + info.value_len != len {
        return Err(CodecError::LengthMismatch(what));
    }
    Ok(())
}

fn decode_u64(rlp: &Rlp, index: usize, field: &str) -> CodecResult<u64> {
    rlp.at(index)
        .and_then(|r| r.as_val::<u64>())
        .map_err(|e| rlp_error(field, e))
}

fn decode_bytes(rlp: &Rlp, index: usize, field: &str) -> CodecResult<Vec<u8>> {
    rlp.at(index)
        .and_then(|r| r.as_val::<Vec<u8>>())
        .map_err(|e| rlp_error(field, e))
}

fn decode_hash(rlp: &Rlp, index: usize, field: &'static str) -> CodecResult<Hash> {
    let bytes = decode_bytes(rlp, index, field)?;
    if bytes.len() != 32 {
        return Err(CodecError::InvalidLength {
            field,
            expected: 32,
            got: bytes.len(),
        });
    }
    let mut hash = [0u8; 32];
    hash.copy_from_slice(&bytes);
    Ok(hash)
}

fn decode_address_list(rlp: &Rlp, index: usize, field: &'static str) -> CodecResult<Vec<Address>> {
    let item = rlp.at(index).map_err(|e| rlp_error(field, e))?;
    if !item.is_list() {
        return Err(CodecError::Rlp {
            field: field.to_string(),
            reason: "expected address list".to_string(),
        });
    }
    let raw = item.as_list::<Vec<u8>>().map_err(|e| rlp_error(field, e))?;

    raw.into_iter()
        .map(|bytes| {
            if bytes.len() != 20 {
                return Err(CodecError::InvalidLength {
                    field,
                    expected: 20,
                    got: bytes.len(),
                });
            }
            let mut address = [0u8; 20];
            address.copy_from_slice(&bytes);
            Ok(address)
        })
        .collect()
}

fn rlp_error(field: &str, e: DecoderError) -> CodecError {
    CodecError::Rlp {
        field: field.to_string(),
        reason: format!("{:?}", e),
    }
}

// =============================================================================
// ENCODING
// =============================================================================

/// Encode a header. Left inverse of [`decode_header`].
pub fn encode_header(header: &Header) -> Vec<u8> {
    encode_with_extra(header, &encode_extra(&header.extra))
}

/// Encode extra data in the v2 layout.
pub fn encode_extra(extra: &ExtraFields) -> Vec<u8> {
    let qc = &extra.quorum_cert;

    let mut stream = RlpStream::new_list(2);
    stream.append(&extra.round);
    stream.begin_list(3);
    stream.begin_list(3);
    stream.append(&qc.proposed.hash.to_vec());
    stream.append(&qc.proposed.round);
    stream.append(&qc.proposed.number);
    stream.begin_list(qc.signatures.len());
    for sig in &qc.signatures {
        stream.append(sig);
    }
    stream.append(&qc.gap_number);

    let body = stream.out();
    let mut out = Vec::with_capacity(body.len() + 1);
    out.push(EXTRA_VERSION);
    out.extend_from_slice(&body);
    out
}

fn encode_with_extra(header: &Header, extra: &[u8]) -> Vec<u8> {
    let mut stream = RlpStream::new_list(HEADER_FIELD_COUNT);
    stream.append(&header.parent_hash.to_vec());
    stream.append(&header.uncle_hash);
    stream.append(&header.coinbase);
    stream.append(&header.state_root);
    stream.append(&header.tx_root);
    stream.append(&header.receipt_root);
    stream.append(&header.bloom);
    stream.append(&header.difficulty);
    stream.append(&header.number);
    stream.append(&header.gas_limit);
    stream.append(&header.gas_used);
    stream.append(&header.time);
    stream.append(&extra.to_vec());
    stream.append(&header.mix_hash);
    stream.append(&header.nonce);
    stream.append(&header.validator);
    append_addresses(&mut stream, &header.validators);
    append_addresses(&mut stream, &header.next_validators);
    append_addresses(&mut stream, &header.penalties);
    stream.out().to_vec()
}

fn append_addresses(stream: &mut RlpStream, addresses: &[Address]) {
    stream.begin_list(addresses.len());
    for address in addresses {
        stream.append(&address.to_vec());
    }
}
