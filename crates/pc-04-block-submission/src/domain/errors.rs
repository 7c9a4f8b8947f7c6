//! # Domain Errors
//!
//! Error types for block submission.

use super::value_objects::BlockType;
use shared_types::{Address, BlockNumber};
use thiserror::Error;

/// Block submission error types.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmissionError {
    /// Caller is not the operator.
    #[error("Access denied: {caller:?} is not the operator")]
    AccessDenied {
        /// Rejected caller
        caller: Address,
    },

    /// Block type not allowed after the current phase, or a direct Deposit.
    #[error("Invalid block type: {to} cannot follow {from}")]
    InvalidBlockType {
        /// Current phase
        from: BlockType,
        /// Attempted type
        to: BlockType,
    },

    /// Every deposit slot before the next operator block is used.
    #[error("Deposit limit reached: at most {limit} deposits per operator block")]
    DepositLimitReached {
        /// Deposits allowed per interval
        limit: u64,
    },

    /// No block recorded at this number.
    #[error("Unknown block: {0}")]
    UnknownBlock(BlockNumber),

    /// Interval too small to leave room for deposit blocks.
    #[error("Invalid child block interval: {0} (must be at least 2)")]
    InvalidInterval(u64),

    /// Bitmap lookup past the end.
    #[error("Bitmap index {index} out of range for length {len}")]
    BitmapIndexOutOfRange {
        /// Requested spot
        index: usize,
        /// Bitmap length
        len: usize,
    },
}
