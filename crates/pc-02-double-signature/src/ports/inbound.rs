//! # Inbound Ports (Driving Ports / API)

use crate::domain::errors::SignatureCheckError;
use shared_types::{Address, Hash, RecoverableSignature};

/// Double-Signature Validation API.
///
/// Implementations must be thread-safe (`Send + Sync`).
pub trait DoubleSignatureApi: Send + Sync {
    /// Check every spend/confirmation pair of a signature blob.
    fn check_sigs(
        &self,
        tx_hash: &Hash,
        root: &Hash,
        input_count_flag: u8,
        signatures: &[u8],
    ) -> Result<bool, SignatureCheckError>;

    /// Signer of one spend/confirmation pair, if the two agree.
    fn confirmed_signer(
        &self,
        tx_hash: &Hash,
        root: &Hash,
        spend: &RecoverableSignature,
        confirmation: &RecoverableSignature,
    ) -> Option<Address>;
}
