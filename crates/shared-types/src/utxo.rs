//! # UTXO Position Codec
//!
//! Every child-chain output is addressed by one integer:
//!
//! ```text
//! position = block_number * 10^9 + tx_index * 10^4 + output_index
//! ```
//!
//! `tx_index` and `output_index` each live in `[0, 10^4)`, so the three fields
//! never overlap and `decode(encode(b, t, o)) == (b, t, o)`.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::entities::BlockNumber;
use crate::errors::PositionError;

/// Multiplier applied to the block number.
pub const BLOCK_OFFSET: u64 = 1_000_000_000;

/// Multiplier applied to the transaction index.
pub const TX_OFFSET: u64 = 10_000;

/// Exclusive upper bound of `tx_index` and `output_index`.
pub const MAX_INDEX: u64 = 10_000;

/// Integer key of a child-chain output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UtxoPosition(pub u64);

impl UtxoPosition {
    /// Encode `(block, tx_index, output_index)` into a position.
    pub fn encode(
        block: BlockNumber,
        tx_index: u64,
        output_index: u64,
    ) -> Result<Self, PositionError> {
        if tx_index >= MAX_INDEX {
            return Err(PositionError::TxIndexOutOfRange(tx_index));
        }
        if output_index >= MAX_INDEX {
            return Err(PositionError::OutputIndexOutOfRange(output_index));
        }

        block
            .checked_mul(BLOCK_OFFSET)
            .and_then(|base| base.checked_add(tx_index * TX_OFFSET + output_index))
            .map(Self)
            .ok_or(PositionError::BlockOverflow(block))
    }

    /// Split the position back into `(block, tx_index, output_index)`.
    pub fn decode(self) -> (BlockNumber, u64, u64) {
        (self.block_number(), self.tx_index(), self.output_index())
    }

    /// Block the output lives in.
    pub fn block_number(self) -> BlockNumber {
        self.0 / BLOCK_OFFSET
    }

    /// Index of the transaction inside its block.
    pub fn tx_index(self) -> u64 {
        (self.0 % BLOCK_OFFSET) / TX_OFFSET
    }

    /// Index of the output inside its transaction.
    pub fn output_index(self) -> u64 {
        self.0 % TX_OFFSET
    }

    /// Raw integer key.
    pub fn as_u64(self) -> u64 {
        self.0
    }

    /// Zero is never a real output (block 0 is never created), so it marks
    /// an absent transaction input.
    pub fn is_null(self) -> bool {
        self.0 == 0
    }
}

impl From<u64> for UtxoPosition {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl fmt::Display for UtxoPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (block, tx, output) = self.decode();
        write!(f, "{}({}/{}/{})", self.0, block, tx, output)
    }
}
