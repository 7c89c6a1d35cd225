//! # Relay Telemetry
//!
//! Logging setup shared by relay binaries and tools.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use relay_telemetry::{init_tracing, TelemetryConfig};
//!
//! fn main() -> anyhow::Result<()> {
//!     init_tracing(&TelemetryConfig::from_env())?;
//!     // Relay code here; tracing events now reach stdout
//!     Ok(())
//! }
//! ```
//!
//! ## Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `RELAY_SERVICE_NAME` | `subnet-relay` | Service name in logs |
//! | `RELAY_LOG_LEVEL` / `RUST_LOG` | `info` | Log level filter |
//! | `RELAY_CONSOLE_OUTPUT` | `true` | Write events to stdout |
//! | `RELAY_JSON_LOGS` | `false` (`true` in containers) | JSON formatted events |
//!
//! With the `metrics` feature, [`encode_metrics`] renders every registered
//! Prometheus collector in text exposition format.

#![warn(missing_docs)]

mod config;
mod tracing_setup;

pub use config::TelemetryConfig;
pub use tracing_setup::init_tracing;

use thiserror::Error;

/// Telemetry initialization errors
#[derive(Error, Debug)]
pub enum TelemetryError {
    /// A global subscriber is already installed, or installing failed.
    #[error("Failed to initialize tracing subscriber: {0}")]
    SubscriberInit(String),

    /// Metrics could not be encoded.
    #[error("Failed to encode metrics: {0}")]
    Metrics(String),

    /// The configuration is unusable.
    #[error("Invalid configuration: {0}")]
    Config(String),
}

/// Encode all registered metrics as Prometheus text format.
#[cfg(feature = "metrics")]
pub fn encode_metrics() -> Result<String, TelemetryError> {
    use prometheus::{Encoder, TextEncoder};

    let encoder = TextEncoder::new();
    let metric_families = prometheus::gather();
    let mut buffer = Vec::new();
    encoder
        .encode(&metric_families, &mut buffer)
        .map_err(|e| TelemetryError::Metrics(e.to_string()))?;
    String::from_utf8(buffer).map_err(|e| TelemetryError::Metrics(e.to_string()))
}
