//! # Integration Scenarios
//!
//! End-to-end flows through the exit game, driving real Merkle trees,
//! secp256k1 signatures, queues and the block state machine together.

pub mod block_submission;
pub mod deposit_exit;
pub mod transaction_exit;
