//! # PC-01 Merkle Proof Verification
//!
//! Membership proofs for the fixed-height binary Keccak trees whose roots the
//! operator commits for every child-chain block.
//!
//! **Subsystem ID:** 1  
//! **Architecture:** Hexagonal (DDD + Ports/Adapters)
//!
//! ## Proof Format
//!
//! | Field | Description |
//! |-------|-------------|
//! | `proof` | `height` sibling hashes, 32 bytes each, leaf level first |
//! | `index` | Leaf position; bit `k` picks the side at leaf-distance `k` |
//! | `root` | Committed block root |
//!
//! Reading the index as a root-to-leaf path, its most significant bit picks
//! the first branch under the root and bit 0 picks the leaf's side, which is
//! the convention the tree builder uses when it lays leaves out.
//!
//! ## Revert vs False
//!
//! A proof of the wrong length, or a height of zero or above the configured
//! maximum, is a hard [`MerkleError`]. A well-formed proof that simply does
//! not hash to the root is an ordinary `Ok(false)`.
//!
//! ## Module Structure
//!
//! ```text
//! pc-01-merkle-proof/
//! ├── domain/          # check_membership, FixedMerkleTree, config, errors
//! ├── ports/           # MerkleProofApi
//! └── service.rs       # MerkleProofService (config-bound verifier)
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod domain;
pub mod ports;
pub mod service;

// Re-exports
pub use domain::{
    check_membership, check_membership_bounded, hash_pair, FixedMerkleTree, MerkleConfig,
    MerkleError, EMPTY_LEAF, HASH_WIDTH, MAX_TREE_HEIGHT,
};
pub use ports::MerkleProofApi;
pub use service::MerkleProofService;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
