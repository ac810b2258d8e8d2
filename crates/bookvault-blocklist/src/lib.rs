//! # bookvault-blocklist
//!
//! Revocation store backends for Bookvault. A revoked token id is a key in
//! a TTL'd set; two backends implement the
//! [`RevocationStore`](bookvault_core::traits::store::RevocationStore)
//! contract:
//!
//! - **memory**: in-process, via [moka](https://crates.io/crates/moka).
//!   Revocations die with the process; suitable for a single node.
//! - **redis**: shared and durable, via the
//!   [redis](https://crates.io/crates/redis) crate.
//!
//! [`connect`] picks the backend named in configuration.

use std::sync::Arc;

use tracing::info;

use bookvault_core::config::blocklist::BlocklistConfig;
use bookvault_core::error::AppError;
use bookvault_core::result::AppResult;
use bookvault_core::traits::store::RevocationStore;

pub mod keys;
#[cfg(feature = "memory")]
pub mod memory;
#[cfg(feature = "redis-backend")]
pub mod redis;

#[cfg(feature = "memory")]
pub use memory::MemoryBlocklist;
#[cfg(feature = "redis-backend")]
pub use redis::RedisBlocklist;

/// Opens the revocation store named by `config.backend`.
///
/// The Redis backend is verified reachable before being returned, so a
/// misconfigured URL fails at startup rather than on the first logout.
pub async fn connect(config: &BlocklistConfig) -> AppResult<Arc<dyn RevocationStore>> {
    match config.backend.as_str() {
        #[cfg(feature = "redis-backend")]
        "redis" => {
            let store = redis::RedisBlocklist::connect(&config.redis).await?;
            if !store.ping().await? {
                return Err(AppError::revocation_store(
                    "Redis blocklist did not answer PING",
                ));
            }
            info!("Revocation store backend: redis");
            Ok(Arc::new(store))
        }
        #[cfg(feature = "memory")]
        "memory" => {
            info!("Revocation store backend: in-process memory");
            Ok(Arc::new(memory::MemoryBlocklist::new(&config.memory)))
        }
        other => Err(AppError::configuration(format!(
            "Unknown blocklist backend '{other}'. Supported: memory, redis"
        ))),
    }
}
