//! # Domain Errors
//!
//! Every rejection of the exit game. A rejected call leaves the ledger
//! untouched.

use pc_01_merkle_proof::MerkleError;
use pc_02_double_signature::SignatureCheckError;
use pc_03_exit_queue::QueueError;
use pc_04_block_submission::{BlockType, SubmissionError};
use shared_types::{Address, Amount, BlockNumber, TokenId, UtxoPosition};
use thiserror::Error;

use super::config::ConfigError;
use super::entities::ExitStatus;

/// Exit game error types.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExitGameError {
    /// Caller is not the operator.
    #[error("Access denied: {caller:?} is not the operator")]
    AccessDenied {
        /// Rejected caller
        caller: Address,
    },

    /// Block type not allowed in the current phase.
    #[error("Invalid block type: {to} cannot follow {from}")]
    InvalidBlockType {
        /// Current phase
        from: BlockType,
        /// Attempted type
        to: BlockType,
    },

    /// Position does not address an output of the expected kind.
    #[error("Invalid position: {0}")]
    InvalidPosition(UtxoPosition),

    /// A recomputed leaf or root does not match the committed one.
    #[error("Proof mismatch")]
    ProofMismatch,

    /// Spend and confirmation signers disagree, or the wrong party signed.
    #[error("Signature invalid")]
    SignatureInvalid,

    /// An exit already exists at this position.
    #[error("Duplicate exit: {0}")]
    DuplicateExit(UtxoPosition),

    /// Token has no exit queue.
    #[error("Unregistered token: {0}")]
    UnregisteredToken(TokenId),

    /// Token is already registered.
    #[error("Token already registered: {0}")]
    TokenAlreadyRegistered(TokenId),

    /// Token's exit queue is empty.
    #[error("Exit queue for token {0} is empty")]
    EmptyQueue(TokenId),

    /// Custody refused or failed a transfer.
    #[error("Transfer failed: {0}")]
    TransferFailed(#[from] CustodyError),

    /// No exit at this position.
    #[error("Exit not found: {0}")]
    ExitNotFound(UtxoPosition),

    /// Exit is voided or paid.
    #[error("Exit {position} is {status}")]
    ExitNotActive {
        /// Exited position
        position: UtxoPosition,
        /// Current status
        status: ExitStatus,
    },

    /// No block recorded at this number.
    #[error("Unknown block: {0}")]
    UnknownBlock(BlockNumber),

    /// Inclusion proof is structurally invalid.
    #[error("Malformed proof: {0}")]
    MalformedProof(#[from] MerkleError),

    /// Signature blob is structurally invalid.
    #[error("Malformed signatures: {0}")]
    MalformedSignatures(#[from] SignatureCheckError),

    /// Transaction bytes do not decode.
    #[error("Malformed transaction: {0}")]
    MalformedTransaction(#[from] CodecError),

    /// Input index outside the transaction.
    #[error("Invalid input index: {0}")]
    InvalidInputIndex(usize),

    /// Every deposit slot before the next operator block is used.
    #[error("Deposit limit reached: at most {limit} deposits per operator block")]
    DepositLimitReached {
        /// Deposits allowed per interval
        limit: u64,
    },

    /// Zero-valued deposit.
    #[error("Invalid amount: {0}")]
    InvalidAmount(Amount),

    /// Order bitmap lookup past the end.
    #[error("Bitmap index {index} out of range for length {len}")]
    BitmapIndexOutOfRange {
        /// Requested spot
        index: usize,
        /// Bitmap length
        len: usize,
    },

    /// Configuration rejected at construction.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl From<SubmissionError> for ExitGameError {
    fn from(err: SubmissionError) -> Self {
        match err {
            SubmissionError::AccessDenied { caller } => Self::AccessDenied { caller },
            SubmissionError::InvalidBlockType { from, to } => Self::InvalidBlockType { from, to },
            SubmissionError::DepositLimitReached { limit } => Self::DepositLimitReached { limit },
            SubmissionError::UnknownBlock(number) => Self::UnknownBlock(number),
            SubmissionError::InvalidInterval(interval) => {
                Self::Config(ConfigError::InvalidInterval(interval))
            }
            SubmissionError::BitmapIndexOutOfRange { index, len } => {
                Self::BitmapIndexOutOfRange { index, len }
            }
        }
    }
}

impl ExitGameError {
    /// Attach `token` to a queue error.
    pub fn from_queue(token: TokenId, err: QueueError) -> Self {
        match err {
            QueueError::EmptyQueue => Self::EmptyQueue(token),
            QueueError::UnregisteredToken(t) => Self::UnregisteredToken(t),
            QueueError::AlreadyRegistered(t) => Self::TokenAlreadyRegistered(t),
        }
    }
}

/// Result type for exit game operations
pub type ExitGameResult<T> = Result<T, ExitGameError>;

/// Transaction decoding errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    /// Not a list of the expected arity.
    #[error("Invalid structure: {0}")]
    InvalidStructure(String),

    /// A field failed to decode.
    #[error("Invalid field '{field}': {reason}")]
    InvalidField {
        /// Field name
        field: &'static str,
        /// Decoder message
        reason: String,
    },

    /// Bytes left after the transaction.
    #[error("{0} trailing bytes after transaction")]
    TrailingBytes(usize),
}

/// Custody collaborator errors. A refused transfer and a failed one are
/// treated alike by the exit game.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CustodyError {
    /// Custody returned `false`.
    #[error("transfer of token {token} refused")]
    Refused {
        /// Token
        token: TokenId,
    },

    /// Source balance too low.
    #[error("insufficient balance: have {available}, need {required}")]
    InsufficientBalance {
        /// Balance held
        available: Amount,
        /// Amount requested
        required: Amount,
    },

    /// Spender allowance too low.
    #[error("insufficient allowance: have {available}, need {required}")]
    InsufficientAllowance {
        /// Allowance granted
        available: Amount,
        /// Amount requested
        required: Amount,
    },

    /// Custody could not be reached.
    #[error("custody unavailable: {0}")]
    Unavailable(String),
}
