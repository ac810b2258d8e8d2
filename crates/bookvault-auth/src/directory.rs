//! The external user directory contract.

use async_trait::async_trait;
use uuid::Uuid;

use bookvault_core::result::AppResult;
use bookvault_entity::user::User;

/// Trait for the external user directory.
///
/// The directory owns user records; the auth core reads them and writes
/// back only password hashes and the verification flag. Concrete
/// implementations (database-backed in production, in-memory in tests)
/// live outside this crate.
#[async_trait]
pub trait UserDirectory: Send + Sync + std::fmt::Debug + 'static {
    /// Find a user by email address. Returns `None` if no such user exists.
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>>;

    /// Find a user by id. Returns `None` if no such user exists.
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<User>>;

    /// Replace the stored password hash for a user.
    async fn update_password_hash(&self, id: Uuid, password_hash: &str) -> AppResult<()>;

    /// Mark a user's email address as verified.
    async fn mark_verified(&self, id: Uuid) -> AppResult<()>;
}
