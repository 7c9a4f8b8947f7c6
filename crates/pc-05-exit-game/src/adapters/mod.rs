//! # Adapters Layer (Hexagonal Architecture)
//!
//! Implements the outbound ports: an in-memory custody ledger, a manual
//! clock and the RLP transaction codec.

mod clock;
mod custody;
mod rlp_codec;

pub use clock::ManualClock;
pub use custody::InMemoryCustody;
pub use rlp_codec::RlpTransactionCodec;
