//! # Domain Module
//!
//! Merkle verification and construction.

pub mod errors;
pub mod proof;
pub mod tree;
pub mod value_objects;

pub use errors::*;
pub use proof::*;
pub use tree::*;
pub use value_objects::*;
