//! # PC-02 Double-Signature Validation
//!
//! Every input of a child-chain transaction carries two signatures by the
//! owner of the spent output:
//!
//! 1. a **spend** signature over `txHash`, included in the block leaf
//! 2. a **confirmation** signature over `confirmHash = H(txHash || root)`,
//!    produced once the owner has seen the block root
//!
//! The confirmation proves the spender saw the transaction land, so an exit
//! of an output whose spend was never confirmed cannot be challenged with it.
//!
//! **Subsystem ID:** 2  
//! **Architecture:** Hexagonal (DDD + Ports/Adapters)
//!
//! ## Signature Blob Layout
//!
//! ```text
//! n = input_count_flag + 1
//! [ spend_0 | .. | spend_{n-1} | confirm_0 | .. | confirm_{n-1} ]   (65 bytes each)
//! ```
//!
//! | Condition | Outcome |
//! |-----------|---------|
//! | length not a multiple of 65, above 260, or below `2n * 65` | hard error |
//! | flag not 0 or 1 | hard error |
//! | signer of `spend_i` != signer of `confirm_i` for some `i` | `Ok(false)` |
//! | unrecoverable signature | `Ok(false)` |

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod domain;
pub mod ports;
pub mod service;

// Re-exports
pub use domain::{
    check_sigs, confirmation_hash, double_sign, recover_confirmed_signer, sign_confirmations,
    sign_spends, InputCount, SignatureBlob, SignatureCheckError, MAX_SIGNATURE_BLOB,
};
pub use ports::DoubleSignatureApi;
pub use service::DoubleSignatureService;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
