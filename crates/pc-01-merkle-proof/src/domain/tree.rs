//! # Fixed-Height Merkle Tree
//!
//! Builds the tree a block root commits to and produces proofs in the format
//! [`check_membership`](super::proof::check_membership) consumes.
//!
//! Leaves fill slots `0..n` from the left; every other slot holds
//! [`EMPTY_LEAF`]. Empty subtrees are never materialised: the hash of an empty
//! subtree of each height is precomputed once.

use shared_types::Hash;

use super::errors::MerkleError;
use super::proof::hash_pair;
use super::value_objects::{EMPTY_LEAF, HASH_WIDTH, MAX_TREE_HEIGHT};

/// A binary Merkle tree of fixed height with `2^height` leaf slots.
#[derive(Debug, Clone)]
pub struct FixedMerkleTree {
    height: usize,
    /// `levels[0]` are the leaves, `levels[height]` holds the root. Only the
    /// populated prefix of each level is stored.
    levels: Vec<Vec<Hash>>,
    /// `empty[k]` is the root of an all-empty subtree of height `k`.
    empty: Vec<Hash>,
}

impl FixedMerkleTree {
    /// Build a tree of `height` over `leaves`.
    pub fn build(height: usize, leaves: Vec<Hash>) -> Result<Self, MerkleError> {
        if height == 0 {
            return Err(MerkleError::ZeroHeight);
        }
        if height > MAX_TREE_HEIGHT {
            return Err(MerkleError::HeightTooLarge {
                height,
                max: MAX_TREE_HEIGHT,
            });
        }
        let capacity = 1u64 << height;
        if leaves.len() as u64 > capacity {
            return Err(MerkleError::TooManyLeaves {
                count: leaves.len(),
                capacity,
            });
        }

        let mut empty = Vec::with_capacity(height + 1);
        empty.push(EMPTY_LEAF);
        for k in 0..height {
            empty.push(hash_pair(&empty[k], &empty[k]));
        }

        let mut levels = Vec::with_capacity(height + 1);
        levels.push(leaves);
        for k in 0..height {
            let below = &levels[k];
            let parents: Vec<Hash> = below
                .chunks(2)
                .map(|pair| match pair {
                    [left, right] => hash_pair(left, right),
                    [left] => hash_pair(left, &empty[k]),
                    _ => empty[k + 1],
                })
                .collect();
            levels.push(parents);
        }

        Ok(Self {
            height,
            levels,
            empty,
        })
    }

    /// Tree height.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of populated leaves.
    pub fn leaf_count(&self) -> usize {
        self.levels[0].len()
    }

    /// Committed root.
    pub fn root(&self) -> Hash {
        self.node(self.height, 0)
    }

    /// Leaf at `index` (empty slots return [`EMPTY_LEAF`]).
    pub fn leaf(&self, index: u64) -> Hash {
        self.node(0, index)
    }

    /// Concatenated sibling hashes for the leaf at `index`, leaf level first.
    pub fn proof(&self, index: u64) -> Result<Vec<u8>, MerkleError> {
        let capacity = 1u64 << self.height;
        if index >= capacity {
            return Err(MerkleError::IndexOutOfRange { index, capacity });
        }

        let mut proof = Vec::with_capacity(self.height * HASH_WIDTH);
        for k in 0..self.height {
            let sibling = (index >> k) ^ 1;
            proof.extend_from_slice(&self.node(k, sibling));
        }
        Ok(proof)
    }

    fn node(&self, level: usize, index: u64) -> Hash {
        usize::try_from(index)
            .ok()
            .and_then(|i| self.levels[level].get(i))
            .copied()
            .unwrap_or(self.empty[level])
    }
}
