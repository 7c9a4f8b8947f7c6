//! # Shared Types Crate
//!
//! Primitive aliases and the UTXO addressing scheme used by every Plasma
//! subsystem.
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: hashes, addresses, token ids and amounts are
//!   defined once here.
//! - **One Key Per Output**: every child-chain output is addressed by a single
//!   integer [`UtxoPosition`], so exits, challenges and queue entries all share
//!   one key space.

pub mod entities;
pub mod errors;
pub mod utxo;

pub use entities::*;
pub use errors::*;
pub use utxo::*;
