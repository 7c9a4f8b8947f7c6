//! # Inbound Ports (Driving Ports / API)

use crate::domain::{Exit, ExitGameResult, FinalizeOutcome, TransactionChallenge};
use pc_03_exit_queue::ExitPriority;
use shared_types::{Address, Amount, BlockNumber, TokenId, UtxoPosition};

/// Exit Game API.
///
/// Every mutating call either commits completely or returns an error and
/// leaves the ledger unchanged.
pub trait ExitGameApi {
    /// Lock `amount` of `token` in custody and credit it to `caller` in a new
    /// deposit block. Returns the block number.
    fn deposit(
        &mut self,
        caller: &Address,
        amount: Amount,
        token: TokenId,
    ) -> ExitGameResult<BlockNumber>;

    /// Exit the output of a deposit block.
    fn start_deposit_exit(
        &mut self,
        caller: &Address,
        position: UtxoPosition,
        token: TokenId,
        amount: Amount,
    ) -> ExitGameResult<()>;

    /// Exit an output of a transaction included in an operator block.
    fn start_transaction_exit(
        &mut self,
        caller: &Address,
        position: UtxoPosition,
        tx_bytes: &[u8],
        proof: &[u8],
        signatures: &[u8],
    ) -> ExitGameResult<()>;

    /// Void an exit by proving its output was spent. Returns the voided
    /// position.
    fn challenge_transaction_exit_with_transaction(
        &mut self,
        challenge: &TransactionChallenge<'_>,
    ) -> ExitGameResult<UtxoPosition>;

    /// Pay every matured exit of `token`, earliest first.
    fn finalize_exits(&mut self, token: TokenId) -> ExitGameResult<FinalizeOutcome>;

    /// Create `token`'s exit queue. Operator only.
    fn register_token(&mut self, caller: &Address, token: TokenId) -> ExitGameResult<()>;

    /// Exit at `position`.
    fn exit(&self, position: UtxoPosition) -> ExitGameResult<Exit>;

    /// Head of `token`'s exit queue.
    fn next_exit(&self, token: TokenId) -> ExitGameResult<ExitPriority>;

    /// Number of the last operator block (0 before the first).
    fn current_child_block(&self) -> BlockNumber;

    /// Deposit slot counter within the current interval.
    fn current_deposit_block(&self) -> u64;
}
