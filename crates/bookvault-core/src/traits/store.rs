//! Contract for the durable revocation store.

use std::time::Duration;

use async_trait::async_trait;

use crate::result::AppResult;

/// A durable set of revoked token ids with per-entry TTL.
///
/// Presence of a key is the fact; no value is attached. Entries self-expire
/// once their TTL elapses, which bounds the store to tokens that could still
/// be alive. A single `put` or `contains` must be atomic in the backend —
/// the auth core performs no locking around store calls.
#[async_trait]
pub trait RevocationStore: Send + Sync + std::fmt::Debug + 'static {
    /// Record `key` for `ttl`. Recording an existing key resets its TTL.
    async fn put(&self, key: &str, ttl: Duration) -> AppResult<()>;

    /// Whether `key` is currently recorded and unexpired.
    async fn contains(&self, key: &str) -> AppResult<bool>;

    /// Whether the backing store is reachable.
    async fn ping(&self) -> AppResult<bool>;
}
