//! # Domain Entities
//!
//! Exits and the decoded view of a child-chain transaction.

use serde::{Deserialize, Serialize};
use shared_types::{Address, Amount, Timestamp, TokenId, UtxoPosition};
use std::fmt;

/// Lifecycle of an exit. `Voided` and `Paid` are terminal.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExitStatus {
    /// Enqueued and payable once mature.
    #[default]
    Active,
    /// Proven spent by a challenge.
    Voided,
    /// Paid out by finalization.
    Paid,
}

impl ExitStatus {
    /// Check if transition is valid.
    pub fn can_transition_to(&self, next: ExitStatus) -> bool {
        matches!(
            (self, next),
            (Self::Active, Self::Voided) | (Self::Active, Self::Paid)
        )
    }
}

impl fmt::Display for ExitStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Active => "active",
            Self::Voided => "voided",
            Self::Paid => "paid",
        };
        f.write_str(name)
    }
}

/// A claim on a child-chain output.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exit {
    /// Claimant; receives the payout.
    pub owner: Address,
    /// Asset type.
    pub token: TokenId,
    /// Amount to pay.
    pub amount: Amount,
    /// Earliest payout time.
    pub exitable_at: Timestamp,
    /// Lifecycle state.
    pub status: ExitStatus,
}

impl Exit {
    /// Create an active exit.
    pub fn new(owner: Address, token: TokenId, amount: Amount, exitable_at: Timestamp) -> Self {
        Self {
            owner,
            token,
            amount,
            exitable_at,
            status: ExitStatus::Active,
        }
    }

    /// Whether the exit may still be paid.
    pub fn is_active(&self) -> bool {
        self.status == ExitStatus::Active
    }
}

/// One output of a child-chain transaction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionOutput {
    /// Recipient.
    pub owner: Address,
    /// Amount.
    pub amount: Amount,
}

impl TransactionOutput {
    /// Create an output.
    pub fn new(owner: Address, amount: Amount) -> Self {
        Self { owner, amount }
    }
}

/// The fields of a child-chain transaction the exit game reads.
///
/// A null input position (`0`) means the slot is unused.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlasmaTransaction {
    /// Spent outputs.
    pub inputs: [UtxoPosition; 2],
    /// Asset type of every input and output.
    pub token: TokenId,
    /// Created outputs.
    pub outputs: [TransactionOutput; 2],
}

impl PlasmaTransaction {
    /// Transaction with one output and no inputs.
    pub fn with_output(token: TokenId, owner: Address, amount: Amount) -> Self {
        Self {
            inputs: [UtxoPosition::default(); 2],
            token,
            outputs: [TransactionOutput::new(owner, amount), TransactionOutput::default()],
        }
    }

    /// Transaction spending `input` into a single output.
    pub fn spending(input: UtxoPosition, token: TokenId, owner: Address, amount: Amount) -> Self {
        Self {
            inputs: [input, UtxoPosition::default()],
            token,
            outputs: [TransactionOutput::new(owner, amount), TransactionOutput::default()],
        }
    }

    /// `1` if the second input is used, else `0`.
    pub fn input_count_flag(&self) -> u8 {
        u8::from(!self.inputs[1].is_null())
    }

    /// Number of signatures expected per kind (spend, confirmation).
    pub fn input_count(&self) -> usize {
        usize::from(self.input_count_flag()) + 1
    }

    /// Input at `index`, if it exists and is used.
    pub fn input(&self, index: usize) -> Option<UtxoPosition> {
        self.inputs.get(index).copied().filter(|p| !p.is_null())
    }

    /// Output at `index`.
    pub fn output(&self, index: usize) -> Option<&TransactionOutput> {
        self.outputs.get(index)
    }
}

/// Evidence that an exited output was spent.
#[derive(Clone, Copy, Debug)]
pub struct TransactionChallenge<'a> {
    /// Position of an output of the spending transaction; locates its block
    /// and transaction index.
    pub challenge_position: UtxoPosition,
    /// Which input of the spending transaction consumes the exited output.
    pub input_index: usize,
    /// Encoded spending transaction.
    pub challenge_tx: &'a [u8],
    /// Inclusion proof of the spending transaction.
    pub proof: &'a [u8],
    /// Spend signatures of the spending transaction, one per input.
    pub tx_signature: &'a [u8],
    /// Confirmation signature for `input_index`, alone or within the full
    /// confirmation portion.
    pub confirm_signature: &'a [u8],
}

/// What a finalize call did.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinalizeOutcome {
    /// Exits paid, in payout order.
    pub paid: Vec<UtxoPosition>,
    /// Matured entries dropped without payment (voided exits).
    pub skipped: Vec<UtxoPosition>,
}

impl FinalizeOutcome {
    /// Whether nothing was due.
    pub fn is_empty(&self) -> bool {
        self.paid.is_empty() && self.skipped.is_empty()
    }
}
