//! Domain layer for the header codec.

pub mod entities;
pub mod errors;
