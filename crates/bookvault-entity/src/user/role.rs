//! Role assigned to a user account.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Coarse-grained permission group, checked against an operation's
/// allow-set. The set is deliberately small; anything finer-grained
/// belongs to the consuming application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    /// May manage content and other accounts.
    Admin,
    /// May read content and submit reviews.
    User,
}

impl UserRole {
    /// Whether this is the admin role.
    pub fn is_admin(&self) -> bool {
        matches!(self, Self::Admin)
    }

    /// The lowercase name used on the wire and in configuration.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::User => "user",
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UserRole {
    type Err = bookvault_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("admin") {
            Ok(Self::Admin)
        } else if s.eq_ignore_ascii_case("user") {
            Ok(Self::User)
        } else {
            Err(bookvault_core::AppError::validation(format!(
                "Unknown role '{s}' (expected admin or user)"
            )))
        }
    }
}
