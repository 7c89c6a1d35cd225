//! Domain layer for the chain store.

pub mod entities;
pub mod errors;
