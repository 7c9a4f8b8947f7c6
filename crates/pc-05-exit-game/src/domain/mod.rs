//! # Domain Module
//!
//! Core domain types for the exit game.

pub mod config;
pub mod entities;
pub mod errors;
pub mod invariants;
pub mod state;

pub use config::*;
pub use entities::*;
pub use errors::*;
pub use invariants::*;
pub use state::*;
