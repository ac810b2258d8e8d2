//! # bookvault-auth
//!
//! The authentication and authorization core of the Bookvault platform:
//! credential verification, bearer token issuance/verification/rotation,
//! token revocation, and role-gated access control.
//!
//! ## Modules
//!
//! - `password` — Argon2id password hashing and policy enforcement
//! - `token` — signed token creation and validation (access, refresh, email-action)
//! - `revocation` — the jti revocation list over the blocklist store
//! - `authenticator` — per-request bearer authentication state machine
//! - `session` — login, refresh, and logout flows
//! - `account` — email verification and password reset flows
//! - `rbac` — role-based access control enforcement
//! - `directory` — the external user directory contract

pub mod account;
pub mod authenticator;
pub mod directory;
pub mod password;
pub mod rbac;
pub mod revocation;
pub mod session;
pub mod token;

pub use account::AccountService;
pub use authenticator::TokenAuthenticator;
pub use directory::UserDirectory;
pub use password::{PasswordHasher, PasswordPolicy};
pub use rbac::RoleGuard;
pub use revocation::TokenRevocationList;
pub use session::{LoginOutcome, SessionIssuer};
pub use token::{Claims, EmailTokenCodec, JwtDecoder, JwtEncoder, TokenKind, TokenPair};
