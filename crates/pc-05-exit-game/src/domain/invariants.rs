//! # Exit Game Invariants
//!
//! Leaf derivations and the position rules every exit must satisfy.
//!
//! - Deposit exits only address output 0 of transaction 0 of a deposit block.
//! - Transaction exits only address output 0 or 1.
//! - A position holds at most one exit, ever.

use shared_crypto::{keccak256, keccak256_concat};
use shared_types::{Address, Amount, Hash, Timestamp, TokenId, UtxoPosition};

use super::entities::Exit;
use super::errors::ExitGameError;
use pc_04_block_submission::is_deposit_block;
use std::collections::HashMap;

/// Outputs per transaction.
pub const MAX_OUTPUTS: u64 = 2;

/// Root of the single-output deposit block for `(owner, token, amount)`.
///
/// `H(owner[20] || token[32 BE] || amount[32 BE])`.
pub fn deposit_root(owner: &Address, token: TokenId, amount: Amount) -> Hash {
    let mut token_word = [0u8; 32];
    token_word[24..].copy_from_slice(&token.to_be_bytes());
    let mut amount_word = [0u8; 32];
    amount.to_big_endian(&mut amount_word);
    keccak256_concat(&[owner, &token_word, &amount_word])
}

/// Leaf committing to a transaction and its spend signatures.
pub fn transaction_leaf(tx_bytes: &[u8], spend_signatures: &[u8]) -> Hash {
    keccak256_concat(&[tx_bytes, spend_signatures])
}

/// Hash that spend signatures cover.
pub fn transaction_hash(tx_bytes: &[u8]) -> Hash {
    keccak256(tx_bytes)
}

/// Position must be the only output of a deposit block.
pub fn invariant_deposit_position(
    position: UtxoPosition,
    interval: u64,
) -> Result<(), ExitGameError> {
    let (block, tx_index, output_index) = position.decode();
    if !is_deposit_block(block, interval) || tx_index != 0 || output_index != 0 {
        return Err(ExitGameError::InvalidPosition(position));
    }
    Ok(())
}

/// Position must address an existing output slot.
pub fn invariant_transaction_position(position: UtxoPosition) -> Result<(), ExitGameError> {
    if position.block_number() == 0 || position.output_index() >= MAX_OUTPUTS {
        return Err(ExitGameError::InvalidPosition(position));
    }
    Ok(())
}

/// Position must never have been exited.
pub fn invariant_no_exit(
    exits: &HashMap<UtxoPosition, Exit>,
    position: UtxoPosition,
) -> Result<(), ExitGameError> {
    if exits.contains_key(&position) {
        return Err(ExitGameError::DuplicateExit(position));
    }
    Ok(())
}

/// Earliest payout time of an exit started at `now`.
pub fn exitable_at(now: Timestamp, exit_period_secs: u64) -> Timestamp {
    now.saturating_add(exit_period_secs)
}
