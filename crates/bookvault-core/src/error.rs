//! The single error type shared by every Bookvault crate.
//!
//! Fallible operations return [`AppError`] carrying an [`ErrorKind`], so a
//! boundary layer can map outcomes to responses by matching on the kind
//! while `?` propagation stays uniform underneath.

use std::fmt;
use thiserror::Error;

/// Classifies every failure the auth core can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum ErrorKind {
    /// No bearer credential accompanied the request.
    MissingCredentials,
    /// A token failed signature or structural validation.
    InvalidToken,
    /// A correctly signed token past its expiry.
    TokenExpired,
    /// The token id is on the revocation list.
    Revoked,
    /// A refresh token arrived where an access token is required.
    AccessTokenRequired,
    /// An access token arrived where a refresh token is required.
    RefreshTokenRequired,
    /// Login denied. Unknown email and wrong password intentionally
    /// collapse into this one kind.
    InvalidCredentials,
    /// The subject is authenticated but its role is outside the allow-set.
    InsufficientPermission,
    /// The subject has not confirmed its email address.
    AccountNotVerified,
    /// A referenced record does not exist.
    NotFound,
    /// Rejected input (password policy, malformed role, ...).
    Validation,
    /// The process configuration is unusable.
    Configuration,
    /// The revocation store could not be reached or answered with an error.
    RevocationStore,
    /// An external collaborator (user directory, mailer) is down.
    ServiceUnavailable,
    /// A failure with no better classification.
    Internal,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingCredentials => write!(f, "MISSING_CREDENTIALS"),
            Self::InvalidToken => write!(f, "INVALID_TOKEN"),
            Self::TokenExpired => write!(f, "TOKEN_EXPIRED"),
            Self::Revoked => write!(f, "REVOKED"),
            Self::AccessTokenRequired => write!(f, "ACCESS_TOKEN_REQUIRED"),
            Self::RefreshTokenRequired => write!(f, "REFRESH_TOKEN_REQUIRED"),
            Self::InvalidCredentials => write!(f, "INVALID_CREDENTIALS"),
            Self::InsufficientPermission => write!(f, "INSUFFICIENT_PERMISSION"),
            Self::AccountNotVerified => write!(f, "ACCOUNT_NOT_VERIFIED"),
            Self::NotFound => write!(f, "NOT_FOUND"),
            Self::Validation => write!(f, "VALIDATION"),
            Self::Configuration => write!(f, "CONFIGURATION"),
            Self::RevocationStore => write!(f, "REVOCATION_STORE"),
            Self::ServiceUnavailable => write!(f, "SERVICE_UNAVAILABLE"),
            Self::Internal => write!(f, "INTERNAL"),
        }
    }
}

impl ErrorKind {
    /// True for the kinds a boundary must flatten into one generic
    /// "authentication required / invalid token" response, hiding which
    /// check rejected the credential.
    pub fn is_authentication_denial(&self) -> bool {
        matches!(
            self,
            Self::MissingCredentials
                | Self::InvalidToken
                | Self::TokenExpired
                | Self::Revoked
                | Self::AccessTokenRequired
                | Self::RefreshTokenRequired
        )
    }
}

/// Error value carried through every `AppResult`.
///
/// The message is safe to show operators in logs; boundary layers decide
/// what, if anything, reaches the end user. The source preserves the
/// underlying library error for diagnostics.
#[derive(Debug, Error)]
#[error("{kind}: {message}")]
pub struct AppError {
    /// Failure classification, the part callers match on.
    pub kind: ErrorKind,
    /// Operator-facing description.
    pub message: String,
    /// Underlying cause, when one exists.
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl AppError {
    /// Builds an error of the given kind.
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            source: None,
        }
    }

    /// Builds an error wrapping the library error that caused it.
    pub fn with_source(
        kind: ErrorKind,
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            kind,
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    // Authentication denials.

    /// No bearer credential was presented.
    pub fn missing_credentials(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::MissingCredentials, message)
    }

    /// The token failed signature or structural checks.
    pub fn invalid_token(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidToken, message)
    }

    /// The token is past its expiry.
    pub fn token_expired(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::TokenExpired, message)
    }

    /// The token id is on the revocation list.
    pub fn revoked(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Revoked, message)
    }

    /// A refresh token was presented in an access position.
    pub fn access_token_required(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::AccessTokenRequired, message)
    }

    /// An access token was presented in a refresh position.
    pub fn refresh_token_required(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::RefreshTokenRequired, message)
    }

    // Login and authorization denials.

    /// Login rejected without saying whether the email or password was wrong.
    pub fn invalid_credentials(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidCredentials, message)
    }

    /// The subject's role is outside the operation's allow-set.
    pub fn insufficient_permission(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InsufficientPermission, message)
    }

    /// The subject's email address is unconfirmed.
    pub fn not_verified(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::AccountNotVerified, message)
    }

    // Everything else.

    /// A referenced record is missing.
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::NotFound, message)
    }

    /// Input was rejected by a validation rule.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Validation, message)
    }

    /// The configuration cannot be used as given.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Configuration, message)
    }

    /// The revocation store failed; authentication must fail closed.
    pub fn revocation_store(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::RevocationStore, message)
    }

    /// An external collaborator is unreachable.
    pub fn service_unavailable(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::ServiceUnavailable, message)
    }

    /// A failure with no better classification.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Internal, message)
    }
}

// The boxed source is not Clone; a clone keeps the kind and message and
// drops the cause.
impl Clone for AppError {
    fn clone(&self) -> Self {
        Self {
            kind: self.kind,
            message: self.message.clone(),
            source: None,
        }
    }
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        Self::with_source(ErrorKind::Configuration, err.to_string(), err)
    }
}
