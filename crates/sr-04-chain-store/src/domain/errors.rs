//! Chain store errors.

use shared_types::{BlockNumber, Hash, HexDisplay};
use thiserror::Error;

/// Result alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Chain store failures.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// A header with this hash is already stored.
    #[error("Duplicate header {}", HexDisplay(.0))]
    DuplicateHeader(Hash),

    /// The parent of a linked insertion is not stored.
    #[error("Unknown parent {} for header #{number}", HexDisplay(.parent))]
    UnknownParent {
        /// Missing parent hash
        parent: Hash,
        /// Number of the header being inserted
        number: BlockNumber,
    },

    /// The header number is not parent + 1.
    #[error("Header number {got} does not follow parent number {parent_number}")]
    NonSequentialNumber {
        /// Parent's number
        parent_number: BlockNumber,
        /// Number found
        got: BlockNumber,
    },

    /// No header with this hash is stored.
    #[error("Unknown header {}", HexDisplay(.0))]
    UnknownHeader(Hash),

    /// A finalized height would be re-pointed to a different header.
    #[error("Height {number} is finalized at a different header")]
    FinalizedHeightConflict {
        /// Conflicting height
        number: BlockNumber,
    },
}
