//! Value objects for the exit queue.

use serde::{Deserialize, Serialize};
use shared_types::{Timestamp, UtxoPosition};
use std::cmp::Ordering;

/// A pending exit as seen by the queue.
///
/// `Ord` is reversed so that `BinaryHeap` (a max-heap) yields the earliest
/// `exitable_at` first, then the lowest position.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct ExitPriority {
    /// Time at which the exit may be paid.
    pub exitable_at: Timestamp,
    /// Output being exited.
    pub position: UtxoPosition,
}

impl ExitPriority {
    /// Creates a new queue entry.
    pub fn new(exitable_at: Timestamp, position: UtxoPosition) -> Self {
        Self {
            exitable_at,
            position,
        }
    }

    /// Whether the entry has matured at `now`.
    pub fn is_due(&self, now: Timestamp) -> bool {
        self.exitable_at <= now
    }
}

impl Ord for ExitPriority {
    fn cmp(&self, other: &Self) -> Ordering {
        // Earlier maturity = higher priority (so reverse comparison)
        other
            .exitable_at
            .cmp(&self.exitable_at)
            // Lower position = higher priority for same maturity
            .then_with(|| other.position.cmp(&self.position))
    }
}

impl PartialOrd for ExitPriority {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
