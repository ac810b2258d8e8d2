//! User entity and its public projection.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::role::UserRole;

/// A registered account, as the external user directory stores it.
///
/// The auth core treats this record as read-only except for the password
/// hash and the verification flag, which it writes back through the
/// directory.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Stable account identifier.
    pub id: Uuid,
    /// Login name, unique per account.
    pub username: String,
    /// Email address, unique per account.
    pub email: String,
    /// Argon2 digest of the account password. Never serialized.
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// Assigned role.
    pub role: UserRole,
    /// Whether the email address has been confirmed via an action link.
    pub is_verified: bool,
    /// Registration time.
    pub created_at: DateTime<Utc>,
    /// Last modification time.
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Whether this account holds the admin role.
    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }

    /// The projection of this account that is safe to hand to callers.
    pub fn profile(&self) -> UserProfile {
        UserProfile {
            id: self.id,
            username: self.username.clone(),
            email: self.email.clone(),
            role: self.role,
            is_verified: self.is_verified,
        }
    }
}

/// What a login response reveals about an account: everything except the
/// credential material.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    /// Stable account identifier.
    pub id: Uuid,
    /// Login name.
    pub username: String,
    /// Email address.
    pub email: String,
    /// Assigned role.
    pub role: UserRole,
    /// Email confirmation state.
    pub is_verified: bool,
}
