//! Token kind discrimination and bearer extraction.

use bookvault::{ErrorKind, UserRole};

use crate::helpers::TestHarness;

#[tokio::test]
async fn test_refresh_token_rejected_by_access_authenticator() {
    let h = TestHarness::new().await;
    h.register("pathan", "a@b.com", "secret1", UserRole::User);

    let outcome = h.issuer.login("a@b.com", "secret1").await.unwrap();
    let err = h
        .access_auth
        .authenticate(&outcome.tokens.refresh_token)
        .await
        .unwrap_err();

    assert_eq!(err.kind, ErrorKind::AccessTokenRequired);
}

#[tokio::test]
async fn test_access_token_rejected_by_refresh_authenticator() {
    let h = TestHarness::new().await;
    h.register("pathan", "a@b.com", "secret1", UserRole::User);

    let outcome = h.issuer.login("a@b.com", "secret1").await.unwrap();
    let err = h
        .refresh_auth
        .authenticate(&outcome.tokens.access_token)
        .await
        .unwrap_err();

    assert_eq!(err.kind, ErrorKind::RefreshTokenRequired);
}

#[tokio::test]
async fn test_pair_tokens_never_share_a_jti() {
    let h = TestHarness::new().await;
    h.register("pathan", "a@b.com", "secret1", UserRole::User);

    let outcome = h.issuer.login("a@b.com", "secret1").await.unwrap();

    let access = h.decoder.decode(&outcome.tokens.access_token).unwrap();
    let refresh = h.decoder.decode(&outcome.tokens.refresh_token).unwrap();

    assert_ne!(access.jti, refresh.jti);
}

#[tokio::test]
async fn test_consecutive_logins_mint_fresh_jtis() {
    let h = TestHarness::new().await;
    h.register("pathan", "a@b.com", "secret1", UserRole::User);

    let first = h.issuer.login("a@b.com", "secret1").await.unwrap();
    let second = h.issuer.login("a@b.com", "secret1").await.unwrap();

    let a = h.decoder.decode(&first.tokens.access_token).unwrap();
    let b = h.decoder.decode(&second.tokens.access_token).unwrap();

    assert_ne!(a.jti, b.jti);
}

#[tokio::test]
async fn test_missing_header_is_missing_credentials() {
    let h = TestHarness::new().await;

    let err = h.access_auth.authenticate_header(None).await.unwrap_err();
    assert_eq!(err.kind, ErrorKind::MissingCredentials);
}

#[tokio::test]
async fn test_non_bearer_scheme_is_missing_credentials() {
    let h = TestHarness::new().await;

    let err = h
        .access_auth
        .authenticate_header(Some("Basic cGF0aGFuOnNlY3JldDE="))
        .await
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::MissingCredentials);
}

#[tokio::test]
async fn test_tampered_token_is_invalid() {
    let h = TestHarness::new().await;
    h.register("pathan", "a@b.com", "secret1", UserRole::User);

    let outcome = h.issuer.login("a@b.com", "secret1").await.unwrap();
    let mut tampered = outcome.tokens.access_token.clone();
    tampered.pop();

    let err = h.access_auth.authenticate(&tampered).await.unwrap_err();
    assert_eq!(err.kind, ErrorKind::InvalidToken);
}
