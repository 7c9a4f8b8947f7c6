//! # Test Fixtures
//!
//! A ready-wired exit game plus the client-side work every scenario repeats:
//! funding accounts, depositing, and committing signed transactions to
//! operator blocks with proofs and confirmations.

use std::sync::Arc;

use pc_01_merkle_proof::FixedMerkleTree;
use pc_02_double_signature::{sign_confirmations, sign_spends};
use pc_04_block_submission::{BlockSubmissionApi, BlockType};
use pc_05_exit_game::{
    transaction_hash, transaction_leaf, ExitGameApi, ExitGameConfig, ExitGameService,
    InMemoryCustody, ManualClock, PlasmaTransaction, RlpTransactionCodec, TransactionChallenge,
    TransactionCodec,
};
use shared_crypto::Secp256k1KeyPair;
use shared_types::{Address, Amount, BlockNumber, Hash, TokenId, UtxoPosition};

/// Operator of every harness.
pub const OPERATOR: Address = [0xAA; 20];

/// Custody address of every harness.
pub const CUSTODY: Address = [0xCC; 20];

/// Clock reading at construction.
pub const GENESIS_TIME: u64 = 1_700_000_000;

/// Default exit period (7 days).
pub const EXIT_PERIOD: u64 = 604_800;

/// The service under test.
pub type TestService = ExitGameService<Arc<InMemoryCustody>, Arc<ManualClock>>;

/// A transaction committed to a block, with everything needed to exit or
/// challenge with it.
#[derive(Debug, Clone)]
pub struct SignedTransaction {
    /// Decoded form.
    pub tx: PlasmaTransaction,
    /// Encoded bytes.
    pub tx_bytes: Vec<u8>,
    /// Block holding it.
    pub block: BlockNumber,
    /// Index within the block.
    pub index: u64,
    /// Inclusion proof.
    pub proof: Vec<u8>,
    /// Spend signatures, one per input.
    pub spends: Vec<u8>,
    /// Confirmation signatures, one per input.
    pub confirms: Vec<u8>,
}

impl SignedTransaction {
    /// Position of output `o`.
    pub fn output(&self, o: u64) -> UtxoPosition {
        UtxoPosition::encode(self.block, self.index, o).expect("position in range")
    }

    /// Full double-signature blob.
    pub fn blob(&self) -> Vec<u8> {
        [self.spends.as_slice(), self.confirms.as_slice()].concat()
    }

    /// Challenge voiding the exit of input `input_index`.
    pub fn challenge(&self, input_index: usize) -> TransactionChallenge<'_> {
        TransactionChallenge {
            challenge_position: self.output(0),
            input_index,
            challenge_tx: &self.tx_bytes,
            proof: &self.proof,
            tx_signature: &self.spends,
            confirm_signature: &self.confirms,
        }
    }
}

/// An operator block built by the harness.
#[derive(Debug, Clone)]
pub struct SubmittedBlock {
    /// Block number.
    pub number: BlockNumber,
    /// Committed root.
    pub root: Hash,
    /// Transactions in leaf order.
    pub txs: Vec<SignedTransaction>,
}

/// Exit game wired to in-memory custody and a manual clock.
pub struct PlasmaHarness {
    /// Service under test.
    pub service: TestService,
    /// Custody ledger shared with the service.
    pub custody: Arc<InMemoryCustody>,
    /// Clock shared with the service.
    pub clock: Arc<ManualClock>,
}

impl Default for PlasmaHarness {
    fn default() -> Self {
        Self::new()
    }
}

impl PlasmaHarness {
    /// Harness with the default configuration.
    pub fn new() -> Self {
        Self::with_config(|_| {})
    }

    /// Harness with a configuration tweaked by `adjust`.
    pub fn with_config(adjust: impl FnOnce(&mut ExitGameConfig)) -> Self {
        plasma_telemetry::init_test_tracing();

        let mut config = ExitGameConfig {
            operator: OPERATOR,
            custody_address: CUSTODY,
            ..ExitGameConfig::default()
        };
        adjust(&mut config);

        let custody = Arc::new(InMemoryCustody::new(CUSTODY));
        let clock = Arc::new(ManualClock::new(GENESIS_TIME));
        let service = ExitGameService::new(
            config,
            custody.clone(),
            clock.clone(),
            RlpTransactionCodec::new(),
        )
        .expect("valid config");

        Self {
            service,
            custody,
            clock,
        }
    }

    /// Give `owner` `amount` of `token` and approve custody for it.
    pub fn fund(&self, token: TokenId, owner: Address, amount: u64) {
        self.custody.mint(token, owner, Amount::from(amount));
        self.custody.approve(token, owner, Amount::from(amount));
    }

    /// Fund and deposit; returns the deposit output's position.
    pub fn deposit(&mut self, owner: Address, amount: u64, token: TokenId) -> UtxoPosition {
        self.fund(token, owner, amount);
        let block = self
            .service
            .deposit(&owner, Amount::from(amount), token)
            .expect("deposit accepted");
        UtxoPosition::encode(block, 0, 0).expect("position in range")
    }

    /// Deposit and immediately start its exit.
    pub fn deposit_and_exit(&mut self, owner: Address, amount: u64) -> UtxoPosition {
        let position = self.deposit(owner, amount, 0);
        self.service
            .start_deposit_exit(&owner, position, 0, Amount::from(amount))
            .expect("deposit exit accepted");
        position
    }

    /// Commit `txs` as one Transaction block; `signers[i]` signs input `i`.
    pub fn submit_transactions(
        &mut self,
        txs: &[(PlasmaTransaction, Vec<&Secp256k1KeyPair>)],
    ) -> SubmittedBlock {
        let codec = RlpTransactionCodec::new();
        let height = self.service.config().merkle_height;

        let mut encoded = Vec::with_capacity(txs.len());
        for (tx, signers) in txs {
            let tx_bytes = codec.encode(tx);
            let spends = sign_spends(signers, &transaction_hash(&tx_bytes)).expect("sign");
            encoded.push((tx_bytes, spends));
        }

        let leaves = encoded
            .iter()
            .map(|(bytes, spends)| transaction_leaf(bytes, spends))
            .collect();
        let tree = FixedMerkleTree::build(height, leaves).expect("tree fits");
        let root = tree.root();
        let number = self
            .service
            .submit_block(&OPERATOR, root, BlockType::Transaction)
            .expect("operator block accepted");

        let txs = txs
            .iter()
            .zip(encoded)
            .enumerate()
            .map(|(i, ((tx, signers), (tx_bytes, spends)))| {
                let index = i as u64;
                let confirms =
                    sign_confirmations(signers, &transaction_hash(&tx_bytes), &root).expect("sign");
                SignedTransaction {
                    tx: *tx,
                    tx_bytes,
                    block: number,
                    index,
                    proof: tree.proof(index).expect("index in tree"),
                    spends,
                    confirms,
                }
            })
            .collect();

        SubmittedBlock { number, root, txs }
    }

    /// Commit a single transaction signed by `signer` on every input.
    pub fn submit_transaction(
        &mut self,
        tx: PlasmaTransaction,
        signers: Vec<&Secp256k1KeyPair>,
    ) -> SignedTransaction {
        let mut block = self.submit_transactions(&[(tx, signers)]);
        block.txs.remove(0)
    }

    /// Move the clock past one full exit period.
    pub fn wait_exit_period(&self) {
        self.clock.advance(self.service.config().exit_period_secs);
    }
}
