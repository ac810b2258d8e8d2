//! Session lifecycle: login, refresh, logout.

pub mod issuer;

pub use issuer::{LoginOutcome, SessionIssuer};
