//! # Domain Errors
//!
//! Structural failures of a signature blob. Signer mismatches are not errors.

use shared_crypto::CryptoError;
use thiserror::Error;

/// Double-signature error types.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SignatureCheckError {
    /// Blob length is not a whole number of signatures.
    #[error("Signature blob length {0} is not a multiple of 65")]
    LengthNotMultiple(usize),

    /// Blob holds more than four signatures.
    #[error("Signature blob length {len} exceeds maximum {max}")]
    TooLong {
        /// Bytes supplied
        len: usize,
        /// Maximum accepted
        max: usize,
    },

    /// Blob too short for the declared input count.
    #[error("Signature blob too short: need {expected} bytes for {inputs} input(s), got {actual}")]
    Truncated {
        /// Declared inputs
        inputs: usize,
        /// `2 * inputs * 65`
        expected: usize,
        /// Bytes supplied
        actual: usize,
    },

    /// Input count flag outside `{0, 1}`.
    #[error("Invalid input count flag: {0}")]
    InvalidInputCount(u8),

    /// Producing a signature failed.
    #[error("Signing failed: {0}")]
    Signing(#[from] CryptoError),
}
