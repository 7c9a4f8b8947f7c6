//! # Domain Entities
//!
//! Typed views over a raw signature blob.

use shared_types::{RecoverableSignature, SIGNATURE_LENGTH};

use super::errors::SignatureCheckError;

/// Longest accepted blob: two spend and two confirmation signatures.
pub const MAX_SIGNATURE_BLOB: usize = 4 * SIGNATURE_LENGTH;

/// Number of inputs a transaction spends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputCount {
    /// Flag `0`.
    One,
    /// Flag `1`.
    Two,
}

impl InputCount {
    /// Parse the wire flag (`n - 1`).
    pub fn from_flag(flag: u8) -> Result<Self, SignatureCheckError> {
        match flag {
            0 => Ok(Self::One),
            1 => Ok(Self::Two),
            other => Err(SignatureCheckError::InvalidInputCount(other)),
        }
    }

    /// Wire flag.
    pub fn flag(self) -> u8 {
        match self {
            Self::One => 0,
            Self::Two => 1,
        }
    }

    /// Number of inputs.
    pub fn count(self) -> usize {
        match self {
            Self::One => 1,
            Self::Two => 2,
        }
    }
}

/// A validated signature blob for `n` inputs.
#[derive(Debug, Clone, Copy)]
pub struct SignatureBlob<'a> {
    bytes: &'a [u8],
    inputs: InputCount,
}

impl<'a> SignatureBlob<'a> {
    /// Validate the blob shape for `inputs`.
    ///
    /// Bytes past the `2n` signatures are tolerated and ignored.
    pub fn parse(bytes: &'a [u8], inputs: InputCount) -> Result<Self, SignatureCheckError> {
        if bytes.len() % SIGNATURE_LENGTH != 0 {
            return Err(SignatureCheckError::LengthNotMultiple(bytes.len()));
        }
        if bytes.len() > MAX_SIGNATURE_BLOB {
            return Err(SignatureCheckError::TooLong {
                len: bytes.len(),
                max: MAX_SIGNATURE_BLOB,
            });
        }
        let expected = 2 * inputs.count() * SIGNATURE_LENGTH;
        if bytes.len() < expected {
            return Err(SignatureCheckError::Truncated {
                inputs: inputs.count(),
                expected,
                actual: bytes.len(),
            });
        }
        Ok(Self { bytes, inputs })
    }

    /// Declared inputs.
    pub fn inputs(&self) -> InputCount {
        self.inputs
    }

    /// Spend signature of input `i`.
    pub fn spend(&self, i: usize) -> RecoverableSignature {
        self.slot(i)
    }

    /// Confirmation signature of input `i`.
    pub fn confirmation(&self, i: usize) -> RecoverableSignature {
        self.slot(self.inputs.count() + i)
    }

    /// The spend signatures, as they are committed in a block leaf.
    pub fn spend_portion(&self) -> &'a [u8] {
        &self.bytes[..self.inputs.count() * SIGNATURE_LENGTH]
    }

    fn slot(&self, slot: usize) -> RecoverableSignature {
        let start = slot * SIGNATURE_LENGTH;
        let mut sig = [0u8; SIGNATURE_LENGTH];
        sig.copy_from_slice(&self.bytes[start..start + SIGNATURE_LENGTH]);
        sig
    }
}
