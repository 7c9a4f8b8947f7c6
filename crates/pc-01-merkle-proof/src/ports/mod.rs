//! # Ports Module
//!
//! Hexagonal architecture ports. This subsystem has no outbound dependencies.

pub mod inbound;

pub use inbound::*;
