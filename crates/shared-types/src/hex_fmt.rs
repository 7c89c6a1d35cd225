//! Hex presentation helpers.

use std::fmt;

use crate::entities::{Address, Hash};
use crate::errors::ParseIdError;

/// Displays a byte slice as `0x`-prefixed lowercase hex.
///
/// Intended for `tracing` fields: `hash = %HexDisplay(&hash)`.
pub struct HexDisplay<'a>(pub &'a [u8]);

impl fmt::Display for HexDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

impl fmt::Debug for HexDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

fn parse_fixed<const N: usize>(input: &str) -> Result<[u8; N], ParseIdError> {
    let trimmed = input.strip_prefix("0x").unwrap_or(input);
    let bytes = hex::decode(trimmed).map_err(|e| ParseIdError::InvalidHex(e.to_string()))?;
    if bytes.len() != N {
        return Err(ParseIdError::InvalidLength {
            expected: N,
            got: bytes.len(),
        });
    }
    let mut out = [0u8; N];
    out.copy_from_slice(&bytes);
    Ok(out)
}

/// Parse a 32-byte hash from hex, with or without `0x`.
pub fn parse_hash(input: &str) -> Result<Hash, ParseIdError> {
    parse_fixed::<32>(input)
}

/// Parse a 20-byte address from hex, with or without `0x`.
pub fn parse_address(input: &str) -> Result<Address, ParseIdError> {
    parse_fixed::<20>(input)
}
