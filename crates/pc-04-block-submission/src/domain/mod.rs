//! # Domain Module
//!
//! Core domain types for block submission.

pub mod auction;
pub mod entities;
pub mod errors;
pub mod invariants;
pub mod value_objects;

pub use auction::*;
pub use entities::*;
pub use errors::*;
pub use invariants::*;
pub use value_objects::*;
