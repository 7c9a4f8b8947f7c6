//! # Inbound Ports (Driving Ports / API)

use crate::domain::{ExitPriority, QueueError};
use shared_types::{Timestamp, TokenId};

/// Per-token exit queue API.
pub trait ExitQueueApi: Send + Sync {
    /// Create the queue for `token`.
    fn register(&mut self, token: TokenId) -> Result<(), QueueError>;

    /// Whether `token` has a queue.
    fn is_registered(&self, token: TokenId) -> bool;

    /// Enqueue an exit on `token`'s queue.
    fn insert(&mut self, token: TokenId, entry: ExitPriority) -> Result<(), QueueError>;

    /// Earliest entry on `token`'s queue.
    fn peek_min(&self, token: TokenId) -> Result<ExitPriority, QueueError>;

    /// Remove the earliest entry on `token`'s queue.
    fn pop_min(&mut self, token: TokenId) -> Result<ExitPriority, QueueError>;

    /// Remove every entry on `token`'s queue that has matured at `now`.
    fn drain_due(
        &mut self,
        token: TokenId,
        now: Timestamp,
    ) -> Result<Vec<ExitPriority>, QueueError>;

    /// Return drained entries to `token`'s queue.
    fn restore(&mut self, token: TokenId, entries: Vec<ExitPriority>) -> Result<(), QueueError>;
}
