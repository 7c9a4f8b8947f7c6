//! Exit Game Service - the controller
//!
//! Owns the [`LedgerState`] and drives it through deposits, block
//! submissions, exits, challenges and finalization. Every entry point runs
//! all of its checks before it touches state, so a rejected call changes
//! nothing.

use crate::adapters::RlpTransactionCodec;
use crate::domain::{
    deposit_root, exitable_at, invariant_deposit_position, invariant_transaction_position,
    transaction_hash, transaction_leaf, CustodyError, Exit, ExitGameConfig, ExitGameError,
    ExitGameResult, ExitStatus, FinalizeOutcome, LedgerState, TransactionChallenge,
};
use crate::ports::inbound::ExitGameApi;
use crate::ports::outbound::{Custody, TimeSource, TransactionCodec};
use pc_01_merkle_proof::{MerkleConfig, MerkleProofApi, MerkleProofService};
use pc_02_double_signature::{
    DoubleSignatureApi, DoubleSignatureService, InputCount, SignatureBlob, SignatureCheckError,
};
use pc_03_exit_queue::{ExitPriority, ExitQueueApi};
use pc_04_block_submission::{
    invariant_operator, BlockRecord, BlockSubmissionApi, BlockType, SubmissionError,
};
use shared_types::{
    Address, Amount, BlockNumber, Hash, RecoverableSignature, TokenId, UtxoPosition,
    SIGNATURE_LENGTH,
};
use tracing::{debug, info, warn};

/// Exit Game Service implementation
pub struct ExitGameService<C, T, X = RlpTransactionCodec>
where
    C: Custody,
    T: TimeSource,
    X: TransactionCodec,
{
    config: ExitGameConfig,
    state: LedgerState,
    custody: C,
    clock: T,
    codec: X,
    merkle: MerkleProofService,
    signatures: DoubleSignatureService,
}

impl<C, T, X> ExitGameService<C, T, X>
where
    C: Custody,
    T: TimeSource,
    X: TransactionCodec,
{
    /// Create a service with an empty ledger.
    pub fn new(config: ExitGameConfig, custody: C, clock: T, codec: X) -> ExitGameResult<Self> {
        config.validate()?;
        let state = LedgerState::new(&config)?;
        let merkle = MerkleProofService::new(MerkleConfig::with_max_height(
            config.max_merkle_height,
        ));

        info!(
            interval = config.child_block_interval,
            exit_period_secs = config.exit_period_secs,
            merkle_height = config.merkle_height,
            tokens = ?config.registered_tokens,
            "[pc-05] Exit game initialized"
        );

        Ok(Self {
            config,
            state,
            custody,
            clock,
            codec,
            merkle,
            signatures: DoubleSignatureService::new(),
        })
    }

    /// Active configuration.
    pub fn config(&self) -> &ExitGameConfig {
        &self.config
    }

    /// Ledger snapshot.
    pub fn state(&self) -> &LedgerState {
        &self.state
    }

    /// Transaction codec in use.
    pub fn codec(&self) -> &X {
        &self.codec
    }

    /// Custody collaborator.
    pub fn custody(&self) -> &C {
        &self.custody
    }

    /// Check that `leaf` sits at `tx_index` of block `block`. Returns the
    /// block root.
    fn verify_inclusion(
        &self,
        block: BlockNumber,
        tx_index: u64,
        leaf: &Hash,
        proof: &[u8],
    ) -> ExitGameResult<Hash> {
        let root = match self.state.chain.block(block) {
            Ok(record) => record.merkle_root,
            Err(_) => {
                debug!(block, "[pc-05] Inclusion claimed in unknown block");
                return Err(ExitGameError::ProofMismatch);
            }
        };

        let included = self.merkle.check_membership(
            leaf,
            tx_index,
            &root,
            proof,
            self.config.merkle_height,
        )?;
        if !included {
            debug!(block, tx_index, "[pc-05] Inclusion proof rejected");
            return Err(ExitGameError::ProofMismatch);
        }
        Ok(root)
    }

    fn pay(&self, token: TokenId, owner: &Address, amount: Amount) -> ExitGameResult<()> {
        match self.custody.transfer(token, owner, amount) {
            Ok(true) => Ok(()),
            Ok(false) => Err(CustodyError::Refused { token }.into()),
            Err(e) => Err(e.into()),
        }
    }
}

impl<C, T, X> ExitGameApi for ExitGameService<C, T, X>
where
    C: Custody,
    T: TimeSource,
    X: TransactionCodec,
{
    fn deposit(
        &mut self,
        caller: &Address,
        amount: Amount,
        token: TokenId,
    ) -> ExitGameResult<BlockNumber> {
        if amount.is_zero() {
            return Err(ExitGameError::InvalidAmount(amount));
        }
        if !self.state.chain.has_deposit_slot() {
            return Err(ExitGameError::DepositLimitReached {
                limit: self.state.chain.interval() - 1,
            });
        }

        // Pull funds first; nothing is recorded unless custody confirms.
        let custody_address = self.config.custody_address;
        match self
            .custody
            .transfer_from(token, caller, &custody_address, amount)
        {
            Ok(true) => {}
            Ok(false) => return Err(CustodyError::Refused { token }.into()),
            Err(e) => {
                warn!(token, error = %e, "[pc-05] Deposit transfer failed");
                return Err(e.into());
            }
        }

        let now = self.clock.now();
        let block = self
            .state
            .chain
            .record_deposit(deposit_root(caller, token, amount), now)?;
        self.state.queues_mut().ensure_registered(token);

        info!(
            block,
            token,
            amount = %amount,
            "[pc-05] Deposit recorded"
        );
        Ok(block)
    }

    fn start_deposit_exit(
        &mut self,
        caller: &Address,
        position: UtxoPosition,
        token: TokenId,
        amount: Amount,
    ) -> ExitGameResult<()> {
        invariant_deposit_position(position, self.state.chain.interval())?;

        // One root comparison covers owner, token and amount.
        let expected = deposit_root(caller, token, amount);
        let matches = self
            .state
            .chain
            .block(position.block_number())
            .map(|record| record.merkle_root == expected)
            .unwrap_or(false);
        if !matches {
            debug!(position = %position, "[pc-05] Deposit exit does not match block");
            return Err(ExitGameError::ProofMismatch);
        }

        let exitable_at = exitable_at(self.clock.now(), self.config.exit_period_secs);
        self.state
            .open_exit(position, Exit::new(*caller, token, amount, exitable_at))?;

        info!(
            position = %position,
            token,
            amount = %amount,
            exitable_at,
            "[pc-05] Deposit exit started"
        );
        Ok(())
    }

    fn start_transaction_exit(
        &mut self,
        caller: &Address,
        position: UtxoPosition,
        tx_bytes: &[u8],
        proof: &[u8],
        signatures: &[u8],
    ) -> ExitGameResult<()> {
        invariant_transaction_position(position)?;
        let (block, tx_index, output_index) = position.decode();

        // 1. Decode and shape-check the blob
        let tx = self.codec.decode(tx_bytes)?;
        let blob = SignatureBlob::parse(signatures, InputCount::from_flag(tx.input_count_flag())?)?;

        // 2. Inclusion of (tx, spend signatures) at tx_index
        let leaf = transaction_leaf(tx_bytes, blob.spend_portion());
        let root = self.verify_inclusion(block, tx_index, &leaf, proof)?;

        // 3. Caller owns the exited output
        let output = *tx
            .output(output_index as usize)
            .ok_or(ExitGameError::InvalidPosition(position))?;
        if output.owner != *caller {
            debug!(position = %position, "[pc-05] Exit caller is not the output owner");
            return Err(ExitGameError::ProofMismatch);
        }

        // 4. Every input's spend was confirmed under this root
        let confirmed = self.signatures.check_sigs(
            &transaction_hash(tx_bytes),
            &root,
            tx.input_count_flag(),
            signatures,
        )?;
        if !confirmed {
            debug!(position = %position, "[pc-05] Double signature rejected");
            return Err(ExitGameError::SignatureInvalid);
        }

        let exitable_at = exitable_at(self.clock.now(), self.config.exit_period_secs);
        self.state.open_exit(
            position,
            Exit::new(*caller, tx.token, output.amount, exitable_at),
        )?;

        info!(
            position = %position,
            token = tx.token,
            amount = %output.amount,
            exitable_at,
            "[pc-05] Transaction exit started"
        );
        Ok(())
    }

    fn challenge_transaction_exit_with_transaction(
        &mut self,
        challenge: &TransactionChallenge<'_>,
    ) -> ExitGameResult<UtxoPosition> {
        let tx = self.codec.decode(challenge.challenge_tx)?;
        let input_index = challenge.input_index;

        // 1. The spent input is a live exit
        let spent = tx
            .input(input_index)
            .ok_or(ExitGameError::InvalidInputIndex(input_index))?;
        let owner = self.state.active_exit(spent)?.owner;

        // 2. Signature shapes
        let inputs = tx.input_count();
        let spend = signature_slot(challenge.tx_signature, inputs, input_index)?;
        let confirmation = if challenge.confirm_signature.len() == SIGNATURE_LENGTH {
            signature_slot(challenge.confirm_signature, 1, 0)?
        } else {
            signature_slot(challenge.confirm_signature, inputs, input_index)?
        };

        // 3. The spending transaction is in a block
        let (block, tx_index, _) = challenge.challenge_position.decode();
        let leaf = transaction_leaf(challenge.challenge_tx, challenge.tx_signature);
        let root = self.verify_inclusion(block, tx_index, &leaf, challenge.proof)?;

        // 4. The exit owner signed and confirmed the spend
        let signer = self.signatures.confirmed_signer(
            &transaction_hash(challenge.challenge_tx),
            &root,
            &spend,
            &confirmation,
        );
        if signer != Some(owner) {
            debug!(position = %spent, "[pc-05] Challenge signer is not the exit owner");
            return Err(ExitGameError::SignatureInvalid);
        }

        self.state.set_status(spent, ExitStatus::Voided)?;

        info!(
            position = %spent,
            challenge_position = %challenge.challenge_position,
            "[pc-05] Exit challenged"
        );
        Ok(spent)
    }

    fn finalize_exits(&mut self, token: TokenId) -> ExitGameResult<FinalizeOutcome> {
        let now = self.clock.now();
        self.state
            .queues()
            .peek_min(token)
            .map_err(|e| ExitGameError::from_queue(token, e))?;

        let due = self
            .state
            .queues_mut()
            .drain_due(token, now)
            .map_err(|e| ExitGameError::from_queue(token, e))?;
        if due.is_empty() {
            debug!(token, now, "[pc-05] No exit due");
            return Ok(FinalizeOutcome::default());
        }

        // A payment that landed cannot be taken back, so each exit is marked
        // paid as soon as its transfer succeeds. Only unpaid entries go back.
        let mut outcome = FinalizeOutcome::default();
        let mut pending = due.into_iter();
        while let Some(entry) = pending.next() {
            let (owner, amount) = match self.state.exit(entry.position) {
                Ok(exit) if exit.is_active() => (exit.owner, exit.amount),
                _ => {
                    outcome.skipped.push(entry.position);
                    continue;
                }
            };

            if let Err(e) = self.pay(token, &owner, amount) {
                warn!(
                    token,
                    position = %entry.position,
                    paid = outcome.paid.len(),
                    error = %e,
                    "[pc-05] Payout failed, unpaid exits restored"
                );
                self.state
                    .queues_mut()
                    .restore(token, std::iter::once(entry).chain(pending).collect())
                    .map_err(|e| ExitGameError::from_queue(token, e))?;
                return Err(e);
            }
            self.state.set_status(entry.position, ExitStatus::Paid)?;
            outcome.paid.push(entry.position);
        }

        info!(
            token,
            paid = outcome.paid.len(),
            skipped = outcome.skipped.len(),
            "[pc-05] Exits finalized"
        );
        Ok(outcome)
    }

    fn register_token(&mut self, caller: &Address, token: TokenId) -> ExitGameResult<()> {
        invariant_operator(caller, self.state.chain.operator())?;
        self.state
            .queues_mut()
            .register(token)
            .map_err(|e| ExitGameError::from_queue(token, e))?;
        info!(token, "[pc-05] Token registered");
        Ok(())
    }

    fn exit(&self, position: UtxoPosition) -> ExitGameResult<Exit> {
        self.state.exit(position).cloned()
    }

    fn next_exit(&self, token: TokenId) -> ExitGameResult<ExitPriority> {
        self.state
            .queues()
            .peek_min(token)
            .map_err(|e| ExitGameError::from_queue(token, e))
    }

    fn current_child_block(&self) -> BlockNumber {
        self.state.chain.current_child_block()
    }

    fn current_deposit_block(&self) -> u64 {
        self.state.chain.current_deposit_block()
    }
}

impl<C, T, X> BlockSubmissionApi for ExitGameService<C, T, X>
where
    C: Custody,
    T: TimeSource,
    X: TransactionCodec,
{
    fn submit_block(
        &mut self,
        caller: &Address,
        merkle_root: Hash,
        block_type: BlockType,
    ) -> Result<BlockNumber, SubmissionError> {
        let now = self.clock.now();
        self.state
            .chain
            .submit_block(caller, merkle_root, block_type, now)
    }

    fn child_block(&self, number: BlockNumber) -> Result<BlockRecord, SubmissionError> {
        self.state.chain.block(number).cloned()
    }

    fn next_child_block(&self) -> BlockNumber {
        self.state.chain.next_child_block()
    }

    fn next_deposit_block(&self) -> BlockNumber {
        self.state.chain.next_deposit_block()
    }

    fn current_phase(&self) -> BlockType {
        self.state.chain.phase()
    }
}

/// Signature `slot` of a blob that must hold exactly `count` signatures.
fn signature_slot(
    bytes: &[u8],
    count: usize,
    slot: usize,
) -> ExitGameResult<RecoverableSignature> {
    let expected = count * SIGNATURE_LENGTH;
    if bytes.len() % SIGNATURE_LENGTH != 0 {
        return Err(SignatureCheckError::LengthNotMultiple(bytes.len()).into());
    }
    if bytes.len() != expected {
        return Err(SignatureCheckError::Truncated {
            inputs: count,
            expected,
            actual: bytes.len(),
        }
        .into());
    }
    if slot >= count {
        return Err(ExitGameError::InvalidInputIndex(slot));
    }

    let start = slot * SIGNATURE_LENGTH;
    let mut sig = [0u8; SIGNATURE_LENGTH];
    sig.copy_from_slice(&bytes[start..start + SIGNATURE_LENGTH]);
    Ok(sig)
}
