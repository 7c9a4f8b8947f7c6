//! # Domain Invariants
//!
//! Business rules for block submission.

use super::errors::SubmissionError;
use super::value_objects::BlockType;
use shared_types::{Address, BlockNumber};

/// Invariant: only the operator commits blocks.
pub fn invariant_operator(caller: &Address, operator: &Address) -> Result<(), SubmissionError> {
    if caller != operator {
        return Err(SubmissionError::AccessDenied { caller: *caller });
    }
    Ok(())
}

/// Invariant: `next` is submittable and follows `current` in the transition table.
pub fn invariant_submittable(current: BlockType, next: BlockType) -> Result<(), SubmissionError> {
    if !next.is_submittable() || !current.can_transition_to(next) {
        return Err(SubmissionError::InvalidBlockType {
            from: current,
            to: next,
        });
    }
    Ok(())
}

/// Deposit blocks are exactly the numbers that are not multiples of the interval.
pub fn is_deposit_block(block: BlockNumber, interval: u64) -> bool {
    block % interval != 0
}
