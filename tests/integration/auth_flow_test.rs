//! Login, authentication, and logout flows.

use bookvault::{ErrorKind, UserRole};

use crate::helpers::TestHarness;

#[tokio::test]
async fn test_login_returns_token_pair_and_profile() {
    let h = TestHarness::new().await;
    h.register("pathan", "a@b.com", "secret1", UserRole::User);

    let outcome = h.issuer.login("a@b.com", "secret1").await.unwrap();

    assert!(!outcome.tokens.access_token.is_empty());
    assert!(!outcome.tokens.refresh_token.is_empty());
    assert_eq!(outcome.user.email, "a@b.com");
    assert_eq!(outcome.user.role, UserRole::User);
}

#[tokio::test]
async fn test_access_token_authenticates_as_same_subject() {
    let h = TestHarness::new().await;
    let user = h.register("pathan", "a@b.com", "secret1", UserRole::User);

    let outcome = h.issuer.login("a@b.com", "secret1").await.unwrap();
    let claims = h
        .access_auth
        .authenticate(&outcome.tokens.access_token)
        .await
        .unwrap();

    assert_eq!(claims.sub, user.id);
    assert_eq!(claims.email, "a@b.com");
    assert_eq!(claims.role, Some(UserRole::User));
}

#[tokio::test]
async fn test_unknown_email_and_wrong_password_are_indistinguishable() {
    let h = TestHarness::new().await;
    h.register("pathan", "a@b.com", "secret1", UserRole::User);

    let unknown = h.issuer.login("nobody@b.com", "secret1").await.unwrap_err();
    let mismatch = h.issuer.login("a@b.com", "wrong-password").await.unwrap_err();

    assert_eq!(unknown.kind, ErrorKind::InvalidCredentials);
    assert_eq!(mismatch.kind, ErrorKind::InvalidCredentials);
    assert_eq!(unknown.message, mismatch.message);
}

#[tokio::test]
async fn test_logout_revokes_token_before_natural_expiry() {
    let h = TestHarness::new().await;
    h.register("pathan", "a@b.com", "secret1", UserRole::User);

    let outcome = h.issuer.login("a@b.com", "secret1").await.unwrap();
    let claims = h
        .access_auth
        .authenticate(&outcome.tokens.access_token)
        .await
        .unwrap();

    h.issuer.logout(&claims).await.unwrap();

    let err = h
        .access_auth
        .authenticate(&outcome.tokens.access_token)
        .await
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::Revoked);
}

#[tokio::test]
async fn test_logout_is_idempotent() {
    let h = TestHarness::new().await;
    h.register("pathan", "a@b.com", "secret1", UserRole::User);

    let outcome = h.issuer.login("a@b.com", "secret1").await.unwrap();
    let claims = h.decoder.decode(&outcome.tokens.access_token).unwrap();

    h.issuer.logout(&claims).await.unwrap();
    h.issuer.logout(&claims).await.unwrap();

    assert!(h.revocations.is_revoked(claims.jti).await.unwrap());
}

#[tokio::test]
async fn test_logout_does_not_affect_other_tokens() {
    let h = TestHarness::new().await;
    h.register("pathan", "a@b.com", "secret1", UserRole::User);

    let first = h.issuer.login("a@b.com", "secret1").await.unwrap();
    let second = h.issuer.login("a@b.com", "secret1").await.unwrap();

    let claims = h.decoder.decode(&first.tokens.access_token).unwrap();
    h.issuer.logout(&claims).await.unwrap();

    assert!(
        h.access_auth
            .authenticate(&second.tokens.access_token)
            .await
            .is_ok()
    );
}

/// The full lifecycle: register, login, authenticate, logout, re-authenticate.
#[tokio::test]
async fn test_full_session_lifecycle() {
    let h = TestHarness::new().await;
    h.register("pathan", "a@b.com", "secret1", UserRole::User);

    let outcome = h.issuer.login("a@b.com", "secret1").await.unwrap();

    let header = TestHarness::bearer(&outcome.tokens.access_token);
    let claims = h
        .access_auth
        .authenticate_header(Some(&header))
        .await
        .unwrap();
    assert_eq!(claims.email, "a@b.com");

    h.issuer.logout(&claims).await.unwrap();

    let err = h
        .access_auth
        .authenticate_header(Some(&header))
        .await
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::Revoked);
}
