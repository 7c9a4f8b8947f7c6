//! # Merkle Proof Service
//!
//! Implements [`MerkleProofApi`] with a configured maximum tree height.

use crate::domain::errors::MerkleError;
use crate::domain::proof::check_membership_bounded;
use crate::domain::value_objects::MerkleConfig;
use crate::ports::inbound::MerkleProofApi;
use shared_types::Hash;
use tracing::debug;

/// Merkle Proof Service.
#[derive(Debug, Clone, Default)]
pub struct MerkleProofService {
    config: MerkleConfig,
}

impl MerkleProofService {
    /// Create a service bound to `config`.
    pub fn new(config: MerkleConfig) -> Self {
        Self { config }
    }

    /// Active configuration.
    pub fn config(&self) -> &MerkleConfig {
        &self.config
    }
}

impl MerkleProofApi for MerkleProofService {
    fn check_membership(
        &self,
        leaf: &Hash,
        index: u64,
        root: &Hash,
        proof: &[u8],
        height: usize,
    ) -> Result<bool, MerkleError> {
        let included =
            check_membership_bounded(leaf, index, root, proof, height, self.config.max_height)?;
        if !included {
            debug!(index, height, "[pc-01] Merkle proof did not reproduce root");
        }
        Ok(included)
    }

    fn max_height(&self) -> usize {
        self.config.max_height
    }
}
