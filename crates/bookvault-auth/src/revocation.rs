//! Token revocation list keyed by jti.

use std::sync::Arc;
use std::time::Duration;

use tracing::debug;
use uuid::Uuid;

use bookvault_blocklist::keys;
use bookvault_core::config::auth::AuthConfig;
use bookvault_core::error::AppError;
use bookvault_core::traits::store::RevocationStore;

/// Domain-typed view of the revocation store: jtis in, booleans out.
///
/// Every entry gets the one configured TTL, which configuration validation
/// guarantees covers the longest token lifetime, so no token can outlive
/// its revocation record. A store that cannot be reached propagates its
/// error; a token is never treated as live on a failed lookup.
#[derive(Debug, Clone)]
pub struct TokenRevocationList {
    store: Arc<dyn RevocationStore>,
    ttl: Duration,
}

impl TokenRevocationList {
    /// Wraps the given store with the configured revocation window.
    pub fn new(store: Arc<dyn RevocationStore>, config: &AuthConfig) -> Self {
        Self {
            store,
            ttl: Duration::from_secs(config.revocation_ttl_seconds),
        }
    }

    /// Records a token id as revoked.
    ///
    /// Idempotent: revoking the same jti twice rewrites the same entry.
    pub async fn revoke(&self, jti: Uuid) -> Result<(), AppError> {
        self.store.put(&keys::revoked_jti(jti), self.ttl).await?;
        debug!(%jti, "Token id added to revocation list");
        Ok(())
    }

    /// Whether a token id has been revoked.
    pub async fn is_revoked(&self, jti: Uuid) -> Result<bool, AppError> {
        self.store.contains(&keys::revoked_jti(jti)).await
    }
}
