//! In-process revocation store.

use std::time::Duration;

use async_trait::async_trait;

use bookvault_core::config::blocklist::MemoryBlocklistConfig;
use bookvault_core::result::AppResult;
use bookvault_core::traits::store::RevocationStore;

/// Revocation store held entirely in process memory.
///
/// Keys map to `()`; membership is the only information. moka applies one
/// retention window to the whole cache, so entries are configured to live
/// for the configured retention rather than the TTL passed to `put` —
/// callers always pass the fixed revocation window anyway, and retention
/// is validated to cover it.
#[derive(Debug, Clone)]
pub struct MemoryBlocklist {
    entries: moka::future::Cache<String, ()>,
}

impl MemoryBlocklist {
    /// Builds a blocklist retaining entries per the given settings.
    pub fn new(config: &MemoryBlocklistConfig) -> Self {
        let entries = moka::future::Cache::builder()
            .max_capacity(config.max_entries)
            .time_to_live(Duration::from_secs(config.retention_seconds))
            .build();

        Self { entries }
    }
}

#[async_trait]
impl RevocationStore for MemoryBlocklist {
    async fn put(&self, key: &str, _ttl: Duration) -> AppResult<()> {
        self.entries.insert(key.to_string(), ()).await;
        Ok(())
    }

    async fn contains(&self, key: &str) -> AppResult<bool> {
        Ok(self.entries.contains_key(key))
    }

    async fn ping(&self) -> AppResult<bool> {
        Ok(true)
    }
}
