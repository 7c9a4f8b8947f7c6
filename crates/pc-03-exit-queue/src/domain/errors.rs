//! Exit queue error types.

use shared_types::TokenId;
use thiserror::Error;

/// Exit queue error type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueueError {
    /// Queue holds no entries.
    #[error("Exit queue is empty")]
    EmptyQueue,

    /// No queue exists for the token.
    #[error("Token {0} has no exit queue")]
    UnregisteredToken(TokenId),

    /// Token already has a queue.
    #[error("Token {0} already has an exit queue")]
    AlreadyRegistered(TokenId),
}
