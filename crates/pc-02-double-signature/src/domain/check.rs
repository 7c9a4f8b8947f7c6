//! # Double-Signature Check
//!
//! `check_sigs` pairs the spend and confirmation signature of each input, in
//! order. Cross-assigned or reversed slots fail even when the same keys
//! signed, because each pair is compared in place.

use shared_crypto::{keccak256_concat, recover_signer};
use shared_types::{Address, Hash, RecoverableSignature};
use tracing::debug;

use super::entities::{InputCount, SignatureBlob};
use super::errors::SignatureCheckError;

/// `H(txHash || root)`, the message every confirmation signs.
pub fn confirmation_hash(tx_hash: &Hash, root: &Hash) -> Hash {
    keccak256_concat(&[tx_hash, root])
}

/// Check that every input's spend signer also confirmed inclusion under `root`.
///
/// # Errors
///
/// Structural problems with `signatures` or `input_count_flag`. Any signature
/// that recovers to a different signer, or does not recover at all, yields
/// `Ok(false)`.
pub fn check_sigs(
    tx_hash: &Hash,
    root: &Hash,
    input_count_flag: u8,
    signatures: &[u8],
) -> Result<bool, SignatureCheckError> {
    let inputs = InputCount::from_flag(input_count_flag)?;
    let blob = SignatureBlob::parse(signatures, inputs)?;
    let confirm_hash = confirmation_hash(tx_hash, root);

    for i in 0..inputs.count() {
        let matched = confirmed_signer(tx_hash, &confirm_hash, &blob.spend(i), &blob.confirmation(i));
        if matched.is_none() {
            debug!(input = i, "[pc-02] Spend/confirmation signer mismatch");
            return Ok(false);
        }
    }
    Ok(true)
}

/// Signer of a single spend/confirmation pair, if both recover to the same
/// address.
pub fn recover_confirmed_signer(
    tx_hash: &Hash,
    root: &Hash,
    spend: &RecoverableSignature,
    confirmation: &RecoverableSignature,
) -> Option<Address> {
    confirmed_signer(tx_hash, &confirmation_hash(tx_hash, root), spend, confirmation)
}

fn confirmed_signer(
    tx_hash: &Hash,
    confirm_hash: &Hash,
    spend: &RecoverableSignature,
    confirmation: &RecoverableSignature,
) -> Option<Address> {
    let spender = recover_signer(tx_hash, spend).ok()?;
    let confirmer = recover_signer(confirm_hash, confirmation).ok()?;
    (spender == confirmer).then_some(spender)
}
