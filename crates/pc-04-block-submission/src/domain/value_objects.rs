//! # Value Objects
//!
//! Block types and block records.

use serde::{Deserialize, Serialize};
use shared_types::{Hash, Timestamp};
use std::fmt;

/// Default spacing between operator-submitted block numbers.
pub const DEFAULT_CHILD_BLOCK_INTERVAL: u64 = 1000;

/// Kind of child-chain block. Discriminants are the wire values.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum BlockType {
    /// Ordinary transfers.
    #[default]
    Transaction = 0,
    /// Synthetic single-output block created by a deposit.
    Deposit = 1,
    /// Batch-auction orders.
    Order = 2,
    /// Confirmation signatures over the order block.
    OrderDoubleSign = 3,
    /// Clearing prices of the auction.
    AuctionResult = 4,
    /// Outputs produced by the auction.
    AuctionOutput = 5,
}

impl BlockType {
    /// Whether `next` may be submitted while `self` is the current phase.
    pub fn can_transition_to(&self, next: BlockType) -> bool {
        match (self, next) {
            (Self::Transaction, Self::Transaction) => true,
            (Self::Transaction, Self::Order) => true,
            (Self::Order, Self::OrderDoubleSign) => true,
            (Self::OrderDoubleSign, Self::AuctionResult) => true,
            (Self::AuctionResult, Self::AuctionOutput) => true,
            (Self::AuctionOutput, Self::Transaction) => true,
            (Self::AuctionOutput, Self::Order) => true,
            _ => false,
        }
    }

    /// Whether the operator may submit this type at all.
    pub fn is_submittable(&self) -> bool {
        !matches!(self, Self::Deposit)
    }

    /// All block types, in wire order.
    pub const ALL: [BlockType; 6] = [
        Self::Transaction,
        Self::Deposit,
        Self::Order,
        Self::OrderDoubleSign,
        Self::AuctionResult,
        Self::AuctionOutput,
    ];
}

impl fmt::Display for BlockType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Transaction => "Transaction",
            Self::Deposit => "Deposit",
            Self::Order => "Order",
            Self::OrderDoubleSign => "OrderDoubleSign",
            Self::AuctionResult => "AuctionResult",
            Self::AuctionOutput => "AuctionOutput",
        };
        f.write_str(name)
    }
}

/// An immutable child-chain block commitment.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockRecord {
    /// Merkle root (or deposit hash for deposit blocks).
    pub merkle_root: Hash,
    /// Time the block was recorded.
    pub timestamp: Timestamp,
    /// Kind of block.
    pub block_type: BlockType,
}

impl BlockRecord {
    /// Create a new record.
    pub fn new(merkle_root: Hash, timestamp: Timestamp, block_type: BlockType) -> Self {
        Self {
            merkle_root,
            timestamp,
            block_type,
        }
    }
}
