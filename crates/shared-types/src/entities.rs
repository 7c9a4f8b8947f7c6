//! # Core Primitives
//!
//! Aliases for the values that flow between the Plasma subsystems.
//!
//! ## Clusters
//!
//! - **Cryptography**: `Hash`, `Address`, `RecoverableSignature`
//! - **Ledger**: `TokenId`, `Amount`, `BlockNumber`, `Timestamp`

// Re-export U256 from primitive-types for use across all subsystems
pub use primitive_types::U256;

/// A 32-byte Keccak-256 digest.
pub type Hash = [u8; 32];

/// A 20-byte Ethereum-style address.
pub type Address = [u8; 20];

/// The all-zero address. Used for "no owner" outputs.
pub const ZERO_ADDRESS: Address = [0u8; 20];

/// Width in bytes of a recoverable secp256k1 signature (`r || s || v`).
pub const SIGNATURE_LENGTH: usize = 65;

/// A 65-byte recoverable signature (`r || s || v`).
pub type RecoverableSignature = [u8; SIGNATURE_LENGTH];

/// Identifier of a fungible asset type held in custody.
pub type TokenId = u64;

/// Token amount. Full 256-bit width, like the base-ledger asset it mirrors.
pub type Amount = U256;

/// Child-chain block number.
pub type BlockNumber = u64;

/// Unix timestamp in seconds.
pub type Timestamp = u64;
