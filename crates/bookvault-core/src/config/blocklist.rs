//! Revocation store (blocklist) configuration.

use serde::{Deserialize, Serialize};

/// Selects and parameterizes the revocation store backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlocklistConfig {
    /// Backend: `"memory"` (single process) or `"redis"` (shared, durable).
    #[serde(default = "default_backend")]
    pub backend: String,
    /// Redis backend settings.
    #[serde(default)]
    pub redis: RedisBlocklistConfig,
    /// In-process backend settings.
    #[serde(default)]
    pub memory: MemoryBlocklistConfig,
}

impl Default for BlocklistConfig {
    fn default() -> Self {
        Self {
            backend: default_backend(),
            redis: RedisBlocklistConfig::default(),
            memory: MemoryBlocklistConfig::default(),
        }
    }
}

/// Settings for the Redis-backed blocklist.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RedisBlocklistConfig {
    /// Connection URL, `redis://[user:password@]host:port[/db]`.
    #[serde(default = "default_redis_url")]
    pub url: String,
    /// Namespace prepended to every key. Empty unless the Redis instance
    /// is shared with other applications.
    #[serde(default)]
    pub key_prefix: String,
}

impl Default for RedisBlocklistConfig {
    fn default() -> Self {
        Self {
            url: default_redis_url(),
            key_prefix: String::new(),
        }
    }
}

/// Settings for the in-process blocklist.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemoryBlocklistConfig {
    /// Upper bound on tracked entries before eviction.
    #[serde(default = "default_max_entries")]
    pub max_entries: u64,
    /// How long entries are retained, in seconds. Must cover the refresh
    /// token lifetime, since revocation TTLs never exceed it.
    #[serde(default = "default_retention")]
    pub retention_seconds: u64,
}

impl Default for MemoryBlocklistConfig {
    fn default() -> Self {
        Self {
            max_entries: default_max_entries(),
            retention_seconds: default_retention(),
        }
    }
}

fn default_backend() -> String {
    "memory".to_string()
}

fn default_redis_url() -> String {
    "redis://localhost:6379".to_string()
}

fn default_max_entries() -> u64 {
    100_000
}

fn default_retention() -> u64 {
    // Two days, matching the default refresh token lifetime.
    172_800
}
