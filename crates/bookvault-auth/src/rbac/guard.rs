//! Role guard — checks an authenticated subject against an allow-set.

use bookvault_core::error::AppError;
use bookvault_entity::user::{User, UserRole};

/// Enforces role membership for one operation's allow-set.
///
/// Constructed once per allow-set and reused across requests; the check
/// itself is a stateless membership test.
#[derive(Debug, Clone)]
pub struct RoleGuard {
    /// Roles permitted to perform the guarded operation.
    allowed: Vec<UserRole>,
}

impl RoleGuard {
    /// Creates a guard for the given allow-set.
    pub fn new(allowed: impl IntoIterator<Item = UserRole>) -> Self {
        Self {
            allowed: allowed.into_iter().collect(),
        }
    }

    /// Returns whether the role is a member of the allow-set.
    pub fn allows(&self, role: &UserRole) -> bool {
        self.allowed.contains(role)
    }

    /// Checks an authenticated subject against the allow-set.
    ///
    /// An unverified account is rejected before the role is considered.
    pub fn check(&self, user: &User) -> Result<(), AppError> {
        if !user.is_verified {
            return Err(AppError::not_verified("User account is not verified"));
        }

        if self.allows(&user.role) {
            Ok(())
        } else {
            Err(AppError::insufficient_permission(format!(
                "Role '{}' is not permitted to perform this action",
                user.role
            )))
        }
    }
}
