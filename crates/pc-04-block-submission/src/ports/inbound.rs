//! # Inbound Ports (Driving Ports / API)

use crate::domain::{BlockRecord, BlockType, SubmissionError};
use shared_types::{Address, BlockNumber, Hash};

/// Block Submission API, as exposed by the contract that owns the chain.
pub trait BlockSubmissionApi {
    /// Commit an operator block. Returns its number.
    fn submit_block(
        &mut self,
        caller: &Address,
        merkle_root: Hash,
        block_type: BlockType,
    ) -> Result<BlockNumber, SubmissionError>;

    /// Block at `number`.
    fn child_block(&self, number: BlockNumber) -> Result<BlockRecord, SubmissionError>;

    /// Number the next operator block will receive.
    fn next_child_block(&self) -> BlockNumber;

    /// Number the next deposit block will receive.
    fn next_deposit_block(&self) -> BlockNumber;

    /// Type of the last operator block.
    fn current_phase(&self) -> BlockType;
}
