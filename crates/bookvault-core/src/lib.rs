//! # bookvault-core
//!
//! Foundation crate: configuration schemas, the shared error type, and the
//! revocation store contract. Depends on no other Bookvault crate.

pub mod config;
pub mod error;
pub mod result;
pub mod traits;

pub use error::AppError;
pub use result::AppResult;
