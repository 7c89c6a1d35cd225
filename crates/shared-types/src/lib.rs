//! # Shared Types Crate
//!
//! Primitive identifiers used across the relay subsystems.
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: `Hash`, `Address` and `BlockRef` are defined
//!   once here and imported by every crate.
//! - **Raw bytes in, hex out**: values are fixed-size byte arrays; hex is only
//!   a presentation concern (logs, JSON, fixtures).

pub mod entities;
pub mod errors;
pub mod hex_fmt;

pub use entities::*;
pub use errors::*;
pub use hex_fmt::{parse_address, parse_hash, HexDisplay};
