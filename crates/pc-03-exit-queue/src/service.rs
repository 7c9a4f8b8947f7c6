//! # Exit Queue Registry
//!
//! Maps each token to an independently created [`ExitQueue`].

use crate::domain::{ExitPriority, ExitQueue, QueueError};
use crate::ports::inbound::ExitQueueApi;
use shared_types::{Timestamp, TokenId};
use std::collections::HashMap;
use tracing::{debug, info};

/// Token -> queue mapping.
#[derive(Debug, Clone, Default)]
pub struct ExitQueueRegistry {
    queues: HashMap<TokenId, ExitQueue>,
}

impl ExitQueueRegistry {
    /// Create a registry with no tokens.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry with `tokens` already registered.
    pub fn with_tokens(tokens: impl IntoIterator<Item = TokenId>) -> Self {
        Self {
            queues: tokens.into_iter().map(|t| (t, ExitQueue::new())).collect(),
        }
    }

    /// Create `token`'s queue if missing. Returns `true` if it was created.
    pub fn ensure_registered(&mut self, token: TokenId) -> bool {
        if self.queues.contains_key(&token) {
            return false;
        }
        self.queues.insert(token, ExitQueue::new());
        info!(token, "[pc-03] Exit queue created");
        true
    }

    /// Queue for `token`.
    pub fn queue(&self, token: TokenId) -> Result<&ExitQueue, QueueError> {
        self.queues
            .get(&token)
            .ok_or(QueueError::UnregisteredToken(token))
    }

    fn queue_mut(&mut self, token: TokenId) -> Result<&mut ExitQueue, QueueError> {
        self.queues
            .get_mut(&token)
            .ok_or(QueueError::UnregisteredToken(token))
    }

    /// Registered tokens, ascending.
    pub fn tokens(&self) -> Vec<TokenId> {
        let mut tokens: Vec<TokenId> = self.queues.keys().copied().collect();
        tokens.sort_unstable();
        tokens
    }
}

impl ExitQueueApi for ExitQueueRegistry {
    fn register(&mut self, token: TokenId) -> Result<(), QueueError> {
        if self.ensure_registered(token) {
            Ok(())
        } else {
            Err(QueueError::AlreadyRegistered(token))
        }
    }

    fn is_registered(&self, token: TokenId) -> bool {
        self.queues.contains_key(&token)
    }

    fn insert(&mut self, token: TokenId, entry: ExitPriority) -> Result<(), QueueError> {
        self.queue_mut(token)?.insert(entry);
        debug!(
            token,
            position = entry.position.as_u64(),
            exitable_at = entry.exitable_at,
            "[pc-03] Exit enqueued"
        );
        Ok(())
    }

    fn peek_min(&self, token: TokenId) -> Result<ExitPriority, QueueError> {
        self.queue(token)?.peek_min()
    }

    fn pop_min(&mut self, token: TokenId) -> Result<ExitPriority, QueueError> {
        self.queue_mut(token)?.pop_min()
    }

    fn drain_due(
        &mut self,
        token: TokenId,
        now: Timestamp,
    ) -> Result<Vec<ExitPriority>, QueueError> {
        Ok(self.queue_mut(token)?.drain_due(now))
    }

    fn restore(&mut self, token: TokenId, entries: Vec<ExitPriority>) -> Result<(), QueueError> {
        self.queue_mut(token)?.restore(entries);
        Ok(())
    }
}
