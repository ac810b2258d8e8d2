//! Per-request bearer token authentication.

use std::sync::Arc;

use tracing::debug;

use bookvault_core::error::AppError;

use crate::revocation::TokenRevocationList;
use crate::token::claims::{Claims, TokenKind};
use crate::token::decoder::JwtDecoder;

/// Authenticates bearer tokens of one required kind.
///
/// Two instances exist per process — one access-required, one
/// refresh-required — constructed at startup and shared across requests.
/// There is no per-request state.
#[derive(Debug, Clone)]
pub struct TokenAuthenticator {
    /// Token decoder.
    decoder: Arc<JwtDecoder>,
    /// Revocation list.
    revocations: Arc<TokenRevocationList>,
    /// The token kind this authenticator accepts.
    expected: TokenKind,
}

impl TokenAuthenticator {
    /// Creates an authenticator that only accepts access tokens.
    pub fn access(decoder: Arc<JwtDecoder>, revocations: Arc<TokenRevocationList>) -> Self {
        Self {
            decoder,
            revocations,
            expected: TokenKind::Access,
        }
    }

    /// Creates an authenticator that only accepts refresh tokens.
    pub fn refresh(decoder: Arc<JwtDecoder>, revocations: Arc<TokenRevocationList>) -> Self {
        Self {
            decoder,
            revocations,
            expected: TokenKind::Refresh,
        }
    }

    /// Authenticates the value of an `Authorization` header.
    ///
    /// A missing header or a non-Bearer scheme is a client error
    /// (`MissingCredentials`), not a server fault.
    pub async fn authenticate_header(
        &self,
        authorization: Option<&str>,
    ) -> Result<Claims, AppError> {
        let header = authorization
            .ok_or_else(|| AppError::missing_credentials("Authorization credentials missing"))?;

        let token = header.strip_prefix("Bearer ").ok_or_else(|| {
            AppError::missing_credentials("Invalid authorization header format")
        })?;

        self.authenticate(token).await
    }

    /// Authenticates a raw bearer token.
    ///
    /// Checks, in order: signature and expiry, revocation list membership,
    /// and token kind. Fails closed on any anomaly.
    pub async fn authenticate(&self, token: &str) -> Result<Claims, AppError> {
        let claims = self.decoder.decode(token)?;

        if self.revocations.is_revoked(claims.jti).await? {
            return Err(AppError::revoked("Token has been revoked"));
        }

        match (self.expected, claims.kind()) {
            (TokenKind::Access, TokenKind::Refresh) => {
                debug!(presented = %claims.kind(), "Token kind mismatch");
                Err(AppError::access_token_required(
                    "Please provide a valid access token",
                ))
            }
            (TokenKind::Refresh, TokenKind::Access) => {
                debug!(presented = %claims.kind(), "Token kind mismatch");
                Err(AppError::refresh_token_required(
                    "Please provide a valid refresh token",
                ))
            }
            _ => Ok(claims),
        }
    }
}
