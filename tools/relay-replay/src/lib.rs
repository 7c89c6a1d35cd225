//! # relay-replay
//!
//! Replays a recorded relay session (bootstrap state plus hex-encoded
//! header calls) into a fresh checkpoint and reports the resulting state.
//!
//! ## Replay file
//!
//! ```json
//! {
//!   "config": { "epoch_length": 900, "gap": 450 },
//!   "policy": "periodic",
//!   "bootstrap": { "validators": ["0x30f2..."], "header": "0xf9..." },
//!   "steps": [
//!     { "receive": ["0xf9...", "0xf9..."] },
//!     { "replenish": { "root": "0x6e6e...", "headers": ["0xf9..."] } },
//!     { "check": "0xf9..." }
//!   ]
//! }
//! ```

pub mod replay;

pub use replay::{run, PolicyKind, ReplayFile, ReplayOptions, ReplayReport, StepStatus};
