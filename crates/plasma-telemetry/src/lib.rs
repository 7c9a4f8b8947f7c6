//! # Plasma Telemetry
//!
//! Structured logging for the exit game subsystems, built on `tracing` and
//! `tracing-subscriber`.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use plasma_telemetry::{init_tracing, TelemetryConfig};
//!
//! let config = TelemetryConfig::from_env();
//! init_tracing(&config)?;
//! ```
//!
//! ## Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `PLASMA_LOG_LEVEL` / `RUST_LOG` | `info` | Log level filter |
//! | `PLASMA_JSON_LOGS` | `false` (`true` in containers) | JSON lines output |
//! | `PLASMA_CONSOLE_OUTPUT` | `true` | Write logs to stdout |
//! | `PLASMA_SERVICE_NAME` | `plasma-exit-game` | Service name |

#![warn(missing_docs)]

mod config;
mod tracing_setup;

pub use config::TelemetryConfig;
pub use tracing_setup::{init_test_tracing, init_tracing};

use thiserror::Error;

/// Telemetry initialization errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TelemetryError {
    /// Log filter directive did not parse.
    #[error("Invalid log filter: {0}")]
    Filter(String),

    /// A global subscriber is already installed.
    #[error("Subscriber already initialized: {0}")]
    AlreadyInitialized(String),
}
