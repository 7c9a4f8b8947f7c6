//! # Double-Signature Service
//!
//! Implements [`DoubleSignatureApi`] by delegating to the domain layer.

use crate::domain::check;
use crate::domain::errors::SignatureCheckError;
use crate::ports::inbound::DoubleSignatureApi;
use shared_types::{Address, Hash, RecoverableSignature};

/// Double-Signature Service.
#[derive(Debug, Clone, Copy, Default)]
pub struct DoubleSignatureService;

impl DoubleSignatureService {
    /// Create a new service.
    pub fn new() -> Self {
        Self
    }
}

impl DoubleSignatureApi for DoubleSignatureService {
    fn check_sigs(
        &self,
        tx_hash: &Hash,
        root: &Hash,
        input_count_flag: u8,
        signatures: &[u8],
    ) -> Result<bool, SignatureCheckError> {
        check::check_sigs(tx_hash, root, input_count_flag, signatures)
    }

    fn confirmed_signer(
        &self,
        tx_hash: &Hash,
        root: &Hash,
        spend: &RecoverableSignature,
        confirmation: &RecoverableSignature,
    ) -> Option<Address> {
        check::recover_confirmed_signer(tx_hash, root, spend, confirmation)
    }
}
