//! # Domain Errors
//!
//! Structural failures of Merkle proofs. Hash mismatches are not errors.

use thiserror::Error;

/// Merkle proof error types.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MerkleError {
    /// Tree height of zero.
    #[error("Tree height must be at least 1")]
    ZeroHeight,

    /// Tree height above the configured maximum.
    #[error("Tree height {height} exceeds maximum {max}")]
    HeightTooLarge {
        /// Requested height
        height: usize,
        /// Configured maximum
        max: usize,
    },

    /// Proof is not exactly `height` hashes long.
    #[error("Invalid proof length: expected {expected} bytes, got {actual}")]
    InvalidProofLength {
        /// `height * 32`
        expected: usize,
        /// Bytes supplied
        actual: usize,
    },

    /// More leaves than a tree of this height can hold.
    #[error("Too many leaves: {count} exceeds capacity {capacity}")]
    TooManyLeaves {
        /// Leaves supplied
        count: usize,
        /// `2^height`
        capacity: u64,
    },

    /// Proof requested for a leaf slot outside the tree.
    #[error("Leaf index {index} outside tree of capacity {capacity}")]
    IndexOutOfRange {
        /// Requested index
        index: u64,
        /// `2^height`
        capacity: u64,
    },
}
