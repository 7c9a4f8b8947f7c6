//! # PC-05 Exit Game
//!
//! The controller of the Plasma bridge: it takes deposits into custody,
//! records the operator's block commitments, lets owners exit child-chain
//! outputs after a challenge period, voids exits proven spent, and pays
//! matured exits in priority order.
//!
//! **Subsystem ID:** 5  
//! **Architecture:** Hexagonal (DDD + Ports/Adapters)
//!
//! ## Operations
//!
//! | Operation | Checks | Effect |
//! |-----------|--------|--------|
//! | `deposit` | amount > 0, free deposit slot, custody pull | deposit block `H(owner, token, amount)` |
//! | `start_deposit_exit` | deposit position, root match, token, no prior exit | exit + queue entry |
//! | `start_transaction_exit` | inclusion, caller owns output, double signature | exit + queue entry |
//! | `challenge_transaction_exit_with_transaction` | inclusion of the spend, owner signed and confirmed it | exit voided |
//! | `finalize_exits` | registered, non-empty queue | matured exits paid, voided ones dropped |
//!
//! A voided or paid exit stays in the exit map forever, so its position can
//! never be exited again.
//!
//! ## Error Mapping
//!
//! | Condition | Error |
//! |-----------|-------|
//! | wrong owner/token/amount/proof | `ProofMismatch` |
//! | signer mismatch | `SignatureInvalid` |
//! | malformed proof, blob or transaction | `Malformed*` |
//! | custody refused or failed | `TransferFailed` (state untouched) |
//!
//! ## Module Structure
//!
//! ```text
//! pc-05-exit-game/
//! ├── domain/          # Exit, PlasmaTransaction, LedgerState, config, invariants
//! ├── ports/
//! │   ├── inbound.rs   # ExitGameApi
//! │   └── outbound.rs  # Custody, TimeSource, TransactionCodec
//! ├── adapters/        # InMemoryCustody, ManualClock, RlpTransactionCodec
//! └── service.rs       # ExitGameService
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod service;

// Re-exports
pub use adapters::{InMemoryCustody, ManualClock, RlpTransactionCodec};
pub use domain::{
    deposit_root, transaction_hash, transaction_leaf, CodecError, ConfigError, CustodyError, Exit,
    ExitGameConfig, ExitGameError, ExitGameResult, ExitStatus, FinalizeOutcome, LedgerState,
    PlasmaTransaction, TransactionChallenge, TransactionOutput,
};
pub use ports::{Custody, ExitGameApi, SystemTimeSource, TimeSource, TransactionCodec};
pub use service::ExitGameService;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
