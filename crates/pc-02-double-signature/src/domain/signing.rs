//! # Blob Construction
//!
//! Client-side helpers producing blobs in the layout `check_sigs` reads.
//! `keys[i]` signs for input `i`.

use shared_crypto::Secp256k1KeyPair;
use shared_types::{Hash, SIGNATURE_LENGTH};

use super::check::confirmation_hash;
use super::errors::SignatureCheckError;

/// Concatenated spend signatures over `tx_hash`.
pub fn sign_spends(
    keys: &[&Secp256k1KeyPair],
    tx_hash: &Hash,
) -> Result<Vec<u8>, SignatureCheckError> {
    sign_all(keys, tx_hash)
}

/// Concatenated confirmation signatures over `H(tx_hash || root)`.
pub fn sign_confirmations(
    keys: &[&Secp256k1KeyPair],
    tx_hash: &Hash,
    root: &Hash,
) -> Result<Vec<u8>, SignatureCheckError> {
    sign_all(keys, &confirmation_hash(tx_hash, root))
}

/// Full blob: spends followed by confirmations.
pub fn double_sign(
    keys: &[&Secp256k1KeyPair],
    tx_hash: &Hash,
    root: &Hash,
) -> Result<Vec<u8>, SignatureCheckError> {
    let mut blob = sign_spends(keys, tx_hash)?;
    blob.extend(sign_confirmations(keys, tx_hash, root)?);
    Ok(blob)
}

fn sign_all(keys: &[&Secp256k1KeyPair], hash: &Hash) -> Result<Vec<u8>, SignatureCheckError> {
    let mut out = Vec::with_capacity(keys.len() * SIGNATURE_LENGTH);
    for key in keys {
        out.extend_from_slice(&key.sign_hash(hash)?);
    }
    Ok(out)
}
