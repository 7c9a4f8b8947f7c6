//! # PC-04 Block Submission
//!
//! The child-chain block record: operator-submitted Merkle roots, synthetic
//! deposit blocks, and the block-type state machine that sequences the batch
//! auction.
//!
//! **Subsystem ID:** 4  
//! **Architecture:** Hexagonal (DDD + Ports/Adapters)
//!
//! ## Block Numbering
//!
//! | Block kind | Numbers |
//! |------------|---------|
//! | Operator-submitted | multiples of the interval (1000, 2000, ...) |
//! | Deposit | `last operator block + k`, `1 <= k < interval` |
//!
//! ## Block-Type Transitions
//!
//! ```text
//! Transaction     -> Transaction | Order
//! Order           -> OrderDoubleSign
//! OrderDoubleSign -> AuctionResult
//! AuctionResult   -> AuctionOutput
//! AuctionOutput   -> Transaction | Order
//! ```
//!
//! Deposit blocks are never submitted; they are synthesized by deposits and
//! leave the phase untouched.
//!
//! ## Module Structure
//!
//! ```text
//! pc-04-block-submission/
//! ├── domain/          # BlockType, BlockRecord, ChildChain, auction bitmap
//! └── ports/           # BlockSubmissionApi
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod domain;
pub mod ports;

// Re-exports
pub use domain::{
    bitmap_has_one_at_spot, invariant_operator, invariant_submittable, is_deposit_block,
    BlockRecord, BlockType, ChildChain, SubmissionError, DEFAULT_CHILD_BLOCK_INTERVAL,
};
pub use ports::BlockSubmissionApi;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
