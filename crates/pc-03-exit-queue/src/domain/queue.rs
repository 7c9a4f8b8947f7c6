//! # Exit Queue
//!
//! A min-heap of [`ExitPriority`] entries for a single token.

use shared_types::Timestamp;
use std::collections::BinaryHeap;

use super::errors::QueueError;
use super::value_objects::ExitPriority;

/// Min-heap of pending exits for one token.
#[derive(Debug, Clone, Default)]
pub struct ExitQueue {
    heap: BinaryHeap<ExitPriority>,
}

impl ExitQueue {
    /// Create an empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an entry.
    pub fn insert(&mut self, entry: ExitPriority) {
        self.heap.push(entry);
    }

    /// Earliest entry, without removing it.
    pub fn peek_min(&self) -> Result<ExitPriority, QueueError> {
        self.heap.peek().copied().ok_or(QueueError::EmptyQueue)
    }

    /// Remove and return the earliest entry.
    pub fn pop_min(&mut self) -> Result<ExitPriority, QueueError> {
        self.heap.pop().ok_or(QueueError::EmptyQueue)
    }

    /// Pop every entry that has matured at `now`, earliest first.
    pub fn drain_due(&mut self, now: Timestamp) -> Vec<ExitPriority> {
        let mut due = Vec::new();
        while let Some(head) = self.heap.peek() {
            if !head.is_due(now) {
                break;
            }
            due.extend(self.heap.pop());
        }
        due
    }

    /// Put previously drained entries back.
    pub fn restore(&mut self, entries: impl IntoIterator<Item = ExitPriority>) {
        self.heap.extend(entries);
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Whether the queue holds no entries.
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}
