//! # Domain Entities
//!
//! The child-chain block record.

use serde::{Deserialize, Serialize};
use shared_types::{Address, BlockNumber, Hash, Timestamp};
use std::collections::BTreeMap;
use tracing::info;

use super::errors::SubmissionError;
use super::invariants::{invariant_operator, invariant_submittable};
use super::value_objects::{BlockRecord, BlockType};

/// Block commitments of the child chain plus the submission phase.
///
/// ## Numbering
///
/// - `current_child_block` is the number of the last operator block (0 before
///   the first submission). The next operator block is
///   `current_child_block + interval`.
/// - `deposit_counter` starts at 1 and resets on every operator submission.
///   The next deposit block is `current_child_block + deposit_counter`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChildChain {
    operator: Address,
    interval: u64,
    blocks: BTreeMap<BlockNumber, BlockRecord>,
    current_child_block: BlockNumber,
    deposit_counter: u64,
    phase: BlockType,
}

impl ChildChain {
    /// Create an empty chain in the `Transaction` phase.
    pub fn new(operator: Address, interval: u64) -> Result<Self, SubmissionError> {
        if interval < 2 {
            return Err(SubmissionError::InvalidInterval(interval));
        }
        Ok(Self {
            operator,
            interval,
            blocks: BTreeMap::new(),
            current_child_block: 0,
            deposit_counter: 1,
            phase: BlockType::Transaction,
        })
    }

    /// Commit an operator block.
    ///
    /// Rejects non-operator callers, direct Deposit submissions, and types
    /// outside the transition table. Returns the new block's number.
    pub fn submit_block(
        &mut self,
        caller: &Address,
        merkle_root: Hash,
        block_type: BlockType,
        now: Timestamp,
    ) -> Result<BlockNumber, SubmissionError> {
        invariant_operator(caller, &self.operator)?;
        invariant_submittable(self.phase, block_type)?;

        let number = self.next_child_block();
        self.blocks
            .insert(number, BlockRecord::new(merkle_root, now, block_type));
        self.current_child_block = number;
        self.deposit_counter = 1;
        self.phase = block_type;

        info!(
            block = number,
            block_type = %block_type,
            "[pc-04] Child block submitted"
        );
        Ok(number)
    }

    /// Record a synthetic deposit block whose root is `deposit_root`.
    ///
    /// The phase is left unchanged.
    pub fn record_deposit(
        &mut self,
        deposit_root: Hash,
        now: Timestamp,
    ) -> Result<BlockNumber, SubmissionError> {
        if self.deposit_counter >= self.interval {
            return Err(SubmissionError::DepositLimitReached {
                limit: self.interval - 1,
            });
        }

        let number = self.next_deposit_block();
        self.blocks
            .insert(number, BlockRecord::new(deposit_root, now, BlockType::Deposit));
        self.deposit_counter += 1;
        Ok(number)
    }

    /// Whether another deposit fits before the next operator block.
    pub fn has_deposit_slot(&self) -> bool {
        self.deposit_counter < self.interval
    }

    /// Block at `number`.
    pub fn block(&self, number: BlockNumber) -> Result<&BlockRecord, SubmissionError> {
        self.blocks
            .get(&number)
            .ok_or(SubmissionError::UnknownBlock(number))
    }

    /// Number the next operator block will receive.
    pub fn next_child_block(&self) -> BlockNumber {
        self.current_child_block + self.interval
    }

    /// Number of the last operator block (0 before the first).
    pub fn current_child_block(&self) -> BlockNumber {
        self.current_child_block
    }

    /// Number the next deposit block will receive.
    pub fn next_deposit_block(&self) -> BlockNumber {
        self.current_child_block + self.deposit_counter
    }

    /// Deposit slot counter within the current interval (starts at 1).
    pub fn current_deposit_block(&self) -> u64 {
        self.deposit_counter
    }

    /// Type of the last operator block; `Transaction` initially.
    pub fn phase(&self) -> BlockType {
        self.phase
    }

    /// Operator block spacing.
    pub fn interval(&self) -> u64 {
        self.interval
    }

    /// The operator address.
    pub fn operator(&self) -> &Address {
        &self.operator
    }

    /// Number of recorded blocks of any kind.
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    /// Whether no block has been recorded.
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}
