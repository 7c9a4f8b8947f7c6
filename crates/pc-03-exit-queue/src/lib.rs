//! # PC-03 Exit Priority Queue
//!
//! One min-heap per registered token, ordering pending exits by maturity.
//!
//! **Subsystem ID:** 3  
//! **Architecture:** Hexagonal (DDD + Ports/Adapters)
//!
//! ## Ordering
//!
//! | Key | Direction |
//! |-----|-----------|
//! | `exitable_at` | earliest first |
//! | `position` | lowest first (tie-breaker) |
//!
//! ## Registered vs Empty
//!
//! A token without a queue is [`QueueError::UnregisteredToken`]; a queue with
//! nothing in it is [`QueueError::EmptyQueue`]. Callers rely on telling the
//! two apart.
//!
//! ## Module Structure
//!
//! ```text
//! pc-03-exit-queue/
//! ├── domain/          # ExitPriority, ExitQueue, errors
//! ├── ports/           # ExitQueueApi
//! └── service.rs       # ExitQueueRegistry (token -> queue)
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod domain;
pub mod ports;
pub mod service;

// Re-exports
pub use domain::{ExitPriority, ExitQueue, QueueError};
pub use ports::ExitQueueApi;
pub use service::ExitQueueRegistry;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
