//! # Value Objects
//!
//! Constants and configuration for Merkle verification.

use serde::{Deserialize, Serialize};
use shared_types::Hash;

/// Width of one proof element (Keccak-256 output).
pub const HASH_WIDTH: usize = 32;

/// Hard ceiling on tree height. Leaf indices are 64-bit.
pub const MAX_TREE_HEIGHT: usize = 63;

/// Value of an unused leaf slot.
pub const EMPTY_LEAF: Hash = [0u8; 32];

/// Verifier configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MerkleConfig {
    /// Largest height a proof may claim.
    pub max_height: usize,
}

impl Default for MerkleConfig {
    fn default() -> Self {
        Self { max_height: 32 }
    }
}

impl MerkleConfig {
    /// Create a configuration, clamping to [`MAX_TREE_HEIGHT`].
    pub fn with_max_height(max_height: usize) -> Self {
        Self {
            max_height: max_height.min(MAX_TREE_HEIGHT),
        }
    }
}
