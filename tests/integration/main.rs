//! Integration tests for the Bookvault auth core.

mod helpers;

mod auth_flow_test;
mod email_token_test;
mod token_kind_test;
