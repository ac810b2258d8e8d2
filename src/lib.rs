//! # bookvault
//!
//! Facade crate for the Bookvault authentication/authorization core.
//! Re-exports the public surface of the member crates so embedders can
//! depend on a single crate.

pub use bookvault_core::config::AppConfig;
pub use bookvault_core::config::auth::AuthConfig;
pub use bookvault_core::config::blocklist::BlocklistConfig;
pub use bookvault_core::error::{AppError, ErrorKind};
pub use bookvault_core::result::AppResult;
pub use bookvault_core::traits::store::RevocationStore;

pub use bookvault_entity::user::{User, UserProfile, UserRole};

pub use bookvault_blocklist as blocklist;

pub use bookvault_auth::{
    AccountService, Claims, EmailTokenCodec, JwtDecoder, JwtEncoder, LoginOutcome, PasswordHasher,
    PasswordPolicy, RoleGuard, SessionIssuer, TokenAuthenticator, TokenKind, TokenPair,
    TokenRevocationList, UserDirectory,
};
