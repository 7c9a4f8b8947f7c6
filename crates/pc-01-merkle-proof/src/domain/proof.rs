//! # Membership Verification
//!
//! Walks a proof from the leaf up to the root:
//!
//! ```text
//! round k:  bit k of index == 0  ->  node = H(node || sibling_k)
//!           bit k of index == 1  ->  node = H(sibling_k || node)
//! ```
//!
//! Bit 0 is the leaf's side and bit `height - 1` is the branch under the root,
//! so the index read most-significant-bit first is the path from the root.

use shared_crypto::keccak256_concat;
use shared_types::Hash;

use super::errors::MerkleError;
use super::value_objects::{MerkleConfig, HASH_WIDTH, MAX_TREE_HEIGHT};

/// Parent of two child nodes.
pub fn hash_pair(left: &Hash, right: &Hash) -> Hash {
    keccak256_concat(&[left, right])
}

/// Check that `leaf` sits at `index` in the tree committed to by `root`,
/// bounding `height` by the default [`MerkleConfig`].
pub fn check_membership(
    leaf: &Hash,
    index: u64,
    root: &Hash,
    proof: &[u8],
    height: usize,
) -> Result<bool, MerkleError> {
    check_membership_bounded(leaf, index, root, proof, height, MerkleConfig::default().max_height)
}

/// Check membership with an explicit maximum height.
///
/// `max_height` is capped at [`MAX_TREE_HEIGHT`] so every index bit fits the
/// 64-bit path.
///
/// # Errors
///
/// - [`MerkleError::ZeroHeight`] / [`MerkleError::HeightTooLarge`] for a bad height
/// - [`MerkleError::InvalidProofLength`] unless `proof.len() == height * 32`
///
/// A well-formed proof that does not reproduce `root` returns `Ok(false)`,
/// as does an index that does not fit in `height` bits.
pub fn check_membership_bounded(
    leaf: &Hash,
    index: u64,
    root: &Hash,
    proof: &[u8],
    height: usize,
    max_height: usize,
) -> Result<bool, MerkleError> {
    validate_shape(proof, height, max_height.min(MAX_TREE_HEIGHT))?;

    if index.checked_shr(height as u32).unwrap_or(0) != 0 {
        return Ok(false);
    }

    Ok(compute_root(leaf, index, proof) == *root)
}

fn validate_shape(proof: &[u8], height: usize, max_height: usize) -> Result<(), MerkleError> {
    if height == 0 {
        return Err(MerkleError::ZeroHeight);
    }
    if height > max_height {
        return Err(MerkleError::HeightTooLarge {
            height,
            max: max_height,
        });
    }
    let expected = height * HASH_WIDTH;
    if proof.len() != expected {
        return Err(MerkleError::InvalidProofLength {
            expected,
            actual: proof.len(),
        });
    }
    Ok(())
}

/// Fold the proof into a root. Caller guarantees the proof shape.
fn compute_root(leaf: &Hash, index: u64, proof: &[u8]) -> Hash {
    let mut node = *leaf;
    let mut path = index;

    for chunk in proof.chunks_exact(HASH_WIDTH) {
        let mut sibling = [0u8; HASH_WIDTH];
        sibling.copy_from_slice(chunk);

        node = if path & 1 == 0 {
            hash_pair(&node, &sibling)
        } else {
            hash_pair(&sibling, &node)
        };
        path >>= 1;
    }

    node
}
