//! Outbound (Driven) ports for the exit game.
//!
//! Asset custody, wall-clock time and transaction decoding are supplied by
//! the host.

use crate::domain::{CodecError, CustodyError, PlasmaTransaction};
use shared_types::{Address, Amount, Timestamp, TokenId};
use std::sync::Arc;

/// Holder of deposited assets.
///
/// `Ok(false)` and `Err` are both a failed transfer; the exit game commits
/// nothing for a transfer until it sees `Ok(true)`, and never retries one
/// within a call.
pub trait Custody: Send + Sync {
    /// Move `amount` of `token` from `from` to `to` under custody's allowance.
    fn transfer_from(
        &self,
        token: TokenId,
        from: &Address,
        to: &Address,
        amount: Amount,
    ) -> Result<bool, CustodyError>;

    /// Pay `amount` of `token` out of custody to `to`.
    fn transfer(&self, token: TokenId, to: &Address, amount: Amount) -> Result<bool, CustodyError>;
}

impl<C: Custody + ?Sized> Custody for Arc<C> {
    fn transfer_from(
        &self,
        token: TokenId,
        from: &Address,
        to: &Address,
        amount: Amount,
    ) -> Result<bool, CustodyError> {
        (**self).transfer_from(token, from, to, amount)
    }

    fn transfer(&self, token: TokenId, to: &Address, amount: Amount) -> Result<bool, CustodyError> {
        (**self).transfer(token, to, amount)
    }
}

/// Time source for exit maturity.
pub trait TimeSource: Send + Sync {
    /// Current Unix time in seconds.
    fn now(&self) -> Timestamp;
}

impl<T: TimeSource + ?Sized> TimeSource for Arc<T> {
    fn now(&self) -> Timestamp {
        (**self).now()
    }
}

/// Default system time source.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemTimeSource;

impl TimeSource for SystemTimeSource {
    fn now(&self) -> Timestamp {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs()
    }
}

/// Mapping between transaction bytes and the fields the exit game reads.
pub trait TransactionCodec: Send + Sync {
    /// Decode `bytes`.
    fn decode(&self, bytes: &[u8]) -> Result<PlasmaTransaction, CodecError>;

    /// Encode `tx` so that `decode` returns it unchanged.
    fn encode(&self, tx: &PlasmaTransaction) -> Vec<u8>;
}
