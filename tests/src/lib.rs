//! # Plasma Exit Game Test Suite
//!
//! Unified test crate containing:
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! ├── fixtures.rs       # PlasmaHarness: service + custody + clock + block builder
//! ├── integration/      # End-to-end scenarios across subsystems
//! └── exploits/         # Attacks on the exit game that must fail
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! # All tests
//! cargo test -p pc-tests
//!
//! # By category
//! cargo test -p pc-tests integration::
//! cargo test -p pc-tests exploits::
//!
//! # Benchmarks
//! cargo bench -p pc-tests
//! ```

#![allow(dead_code)]

pub mod fixtures;
pub mod integration;
