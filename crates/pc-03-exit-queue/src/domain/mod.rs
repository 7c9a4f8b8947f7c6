//! # Domain Module

pub mod errors;
pub mod queue;
pub mod value_objects;

pub use errors::*;
pub use queue::*;
pub use value_objects::*;
