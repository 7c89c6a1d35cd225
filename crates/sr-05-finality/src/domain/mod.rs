//! Domain layer for the finality engine.

pub mod config;
pub mod entities;
pub mod run;

pub use config::{EngineConfig, Retention};
pub use entities::{BatchOutcome, Bootstrap};
pub use run::{UncommittedRun, FINALIZING_SEQUENCE};
