//! # sr-04-chain-store
//!
//! In-memory store of accepted subnet headers.
//!
//! ## Overview
//!
//! - **Records** by hash: parent, number, round, the header its QC
//!   certified, finalization marker and host-chain submission number.
//! - **Canonical index** by number along the head chain. A competing header
//!   at the same height is stored but not addressable by number.
//! - **Pointers**: `head` and `last_finalized`.
//! - **Bodies and snapshots** (optional): encoded headers and the validator
//!   set at each finalized header.
//!
//! ## Atomic batches
//!
//! All writes go through a [`StagedStore`], an overlay on top of the
//! committed [`ChainStore`]. Reads see the overlay first. The overlay is
//! turned into a [`StoreWriteSet`] and applied in one step, or dropped.
//!
//! ```text
//! let mut staged = store.stage();      // borrow committed state
//! staged.insert(record, body, Linkage::Parent)?;
//! staged.set_finalized(&hash, 17)?;
//! let writes = staged.into_writes();   // release the borrow
//! store.apply(writes);                 // commit everything
//! ```

#![warn(missing_docs)]

pub mod domain;
pub mod staging;
pub mod store;

pub use domain::entities::{Linkage, LatestPointers, StoredHeaderRecord};
pub use domain::errors::{StoreError, StoreResult};
pub use staging::{StagedStore, StoreWriteSet};
pub use store::{ChainStore, HeaderReader};
