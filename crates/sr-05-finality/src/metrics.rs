//! # Relay Metrics
//!
//! Prometheus counters for header ingestion and finality.
//!
//! ## Usage
//!
//! Enable with the `metrics` feature:
//! ```toml
//! sr-05-finality = { path = "...", features = ["metrics"] }
//! ```
//!
//! ## Metrics Exported
//!
//! - `relay_headers_accepted_total` - Headers verified and applied
//! - `relay_headers_finalized_total` - Headers marked finalized
//! - `relay_batches_rejected_total` - Rejected batches (by reason)
//! - `relay_signatures_rejected_total` - QC signatures that did not count toward a quorum
//! - `relay_epochs_scheduled_total` - Validator rotations scheduled

#[cfg(feature = "metrics")]
use lazy_static::lazy_static;

#[cfg(feature = "metrics")]
use prometheus::{register_int_counter, register_int_counter_vec, IntCounter, IntCounterVec};

#[cfg(feature = "metrics")]
lazy_static! {
    /// Headers verified and applied
    pub static ref HEADERS_ACCEPTED: IntCounter = register_int_counter!(
        "relay_headers_accepted_total",
        "Total number of subnet headers accepted"
    )
    .expect("Failed to create HEADERS_ACCEPTED metric");

    /// Headers finalized
    pub static ref HEADERS_FINALIZED: IntCounter = register_int_counter!(
        "relay_headers_finalized_total",
        "Total number of subnet headers finalized"
    )
    .expect("Failed to create HEADERS_FINALIZED metric");

    /// Rejected batches, labeled by error kind
    pub static ref BATCHES_REJECTED: IntCounterVec = register_int_counter_vec!(
        "relay_batches_rejected_total",
        "Total number of header batches rejected",
        &["reason"]
    )
    .expect("Failed to create BATCHES_REJECTED metric");

    /// QC signatures that did not count
    pub static ref SIGNATURES_REJECTED: IntCounter = register_int_counter!(
        "relay_signatures_rejected_total",
        "Total number of QC signatures that were unrecoverable, duplicated or from non-members"
    )
    .expect("Failed to create SIGNATURES_REJECTED metric");

    /// Validator rotations scheduled
    pub static ref EPOCHS_SCHEDULED: IntCounter = register_int_counter!(
        "relay_epochs_scheduled_total",
        "Total number of validator rotations scheduled"
    )
    .expect("Failed to create EPOCHS_SCHEDULED metric");
}

// =============================================================================
// METRIC RECORDING FUNCTIONS
// =============================================================================

/// Record headers accepted
#[cfg(feature = "metrics")]
pub fn record_headers_accepted(count: u64) {
    HEADERS_ACCEPTED.inc_by(count);
}

/// Record headers finalized
#[cfg(feature = "metrics")]
pub fn record_headers_finalized(count: u64) {
    HEADERS_FINALIZED.inc_by(count);
}

/// Record a rejected batch
#[cfg(feature = "metrics")]
pub fn record_batch_rejected(reason: &str) {
    BATCHES_REJECTED.with_label_values(&[reason]).inc();
}

/// Record signatures that did not count toward a quorum
#[cfg(feature = "metrics")]
pub fn record_signatures_rejected(count: u64) {
    SIGNATURES_REJECTED.inc_by(count);
}

/// Record a scheduled rotation
#[cfg(feature = "metrics")]
pub fn record_epoch_scheduled() {
    EPOCHS_SCHEDULED.inc();
}

// =============================================================================
// NO-OP IMPLEMENTATIONS (when metrics feature disabled)
// =============================================================================

#[cfg(not(feature = "metrics"))]
pub fn record_headers_accepted(_count: u64) {}

#[cfg(not(feature = "metrics"))]
pub fn record_headers_finalized(_count: u64) {}

#[cfg(not(feature = "metrics"))]
pub fn record_batch_rejected(_reason: &str) {}

#[cfg(not(feature = "metrics"))]
pub fn record_signatures_rejected(_count: u64) {}

#[cfg(not(feature = "metrics"))]
pub fn record_epoch_scheduled() {}
