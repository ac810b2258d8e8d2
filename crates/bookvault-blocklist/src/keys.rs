//! Builders for every key the blocklist writes.
//!
//! All key construction lives here so the full key population is visible
//! in one place and no call site can misspell a segment.

use uuid::Uuid;

/// Key under which a revoked token id is recorded.
pub fn revoked_jti(jti: Uuid) -> String {
    format!("auth:revoked:{jti}")
}
