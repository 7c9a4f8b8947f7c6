//! # Error Types
//!
//! Errors raised by the shared codecs.

use thiserror::Error;

/// Errors from encoding a UTXO position.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PositionError {
    /// Transaction index does not fit in its slot.
    #[error("Transaction index {0} out of range (must be < 10000)")]
    TxIndexOutOfRange(u64),

    /// Output index does not fit in its slot.
    #[error("Output index {0} out of range (must be < 10000)")]
    OutputIndexOutOfRange(u64),

    /// Block number too large for the 64-bit key space.
    #[error("Block number {0} overflows the position key")]
    BlockOverflow(u64),
}
