//! # Inbound Ports (Driving Ports / API)
//!
//! Traits that define the public API of this subsystem.

use crate::domain::errors::MerkleError;
use shared_types::Hash;

/// Merkle Proof Verification API.
///
/// Implementations must be thread-safe (`Send + Sync`).
pub trait MerkleProofApi: Send + Sync {
    /// Check that `leaf` is the value at `index` of the tree with `root`.
    ///
    /// # Errors
    /// Malformed proof length or unsupported height. A mismatch is `Ok(false)`.
    fn check_membership(
        &self,
        leaf: &Hash,
        index: u64,
        root: &Hash,
        proof: &[u8],
        height: usize,
    ) -> Result<bool, MerkleError>;

    /// Largest height this verifier accepts.
    fn max_height(&self) -> usize;
}
