//! # Domain Module
//!
//! Signature blob parsing, the pairwise signer check, and blob construction.

pub mod check;
pub mod entities;
pub mod errors;
pub mod signing;

pub use check::*;
pub use entities::*;
pub use errors::*;
pub use signing::*;
