//! Account maintenance flows driven by email-action tokens.
//!
//! Token transport (the actual email) is out of scope; this service only
//! mints the tokens a sender needs and consumes them when the link is
//! followed.

use std::sync::Arc;

use tracing::info;

use bookvault_core::error::AppError;

use crate::directory::UserDirectory;
use crate::password::hasher::PasswordHasher;
use crate::password::policy::PasswordPolicy;
use crate::token::email::EmailTokenCodec;

/// Email verification and password reset flows.
#[derive(Debug, Clone)]
pub struct AccountService {
    /// External user directory.
    directory: Arc<dyn UserDirectory>,
    /// Password hasher.
    hasher: Arc<PasswordHasher>,
    /// Policy for new passwords.
    policy: PasswordPolicy,
    /// Email-action token codec.
    email_codec: Arc<EmailTokenCodec>,
}

impl AccountService {
    /// Creates a new account service with all required dependencies.
    pub fn new(
        directory: Arc<dyn UserDirectory>,
        hasher: Arc<PasswordHasher>,
        policy: PasswordPolicy,
        email_codec: Arc<EmailTokenCodec>,
    ) -> Self {
        Self {
            directory,
            hasher,
            policy,
            email_codec,
        }
    }

    /// Mints an email-action token for the given address.
    ///
    /// The same token format serves verification and reset links; the
    /// purpose is implied by the endpoint that consumes it.
    pub fn issue_action_token(&self, email: &str) -> Result<String, AppError> {
        self.email_codec.sign(email)
    }

    /// Consumes a verification token and marks the subject as verified.
    ///
    /// Returns the verified email address.
    pub async fn confirm_email(&self, token: &str) -> Result<String, AppError> {
        let email = self.email_codec.decode(token)?;

        let user = self
            .directory
            .find_by_email(&email)
            .await?
            .ok_or_else(|| AppError::not_found("User with given email not found"))?;

        self.directory.mark_verified(user.id).await?;

        info!(user_id = %user.id, "Email address verified");

        Ok(email)
    }

    /// Consumes a reset token and replaces the subject's password hash.
    pub async fn reset_password(&self, token: &str, new_password: &str) -> Result<(), AppError> {
        let email = self.email_codec.decode(token)?;

        self.policy.validate(new_password)?;

        let user = self
            .directory
            .find_by_email(&email)
            .await?
            .ok_or_else(|| AppError::not_found("User with given email not found"))?;

        let password_hash = self.hasher.hash(new_password)?;
        self.directory
            .update_password_hash(user.id, &password_hash)
            .await?;

        info!(user_id = %user.id, "Password reset completed");

        Ok(())
    }
}
