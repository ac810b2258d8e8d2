//! Email verification and password reset flows.

use bookvault::{ErrorKind, UserRole};

use crate::helpers::TestHarness;

#[tokio::test]
async fn test_confirm_email_marks_subject_verified() {
    let h = TestHarness::new().await;
    let user = h.register_with_verified("pathan", "a@b.com", "secret1", UserRole::User, false);

    let token = h.accounts.issue_action_token("a@b.com").unwrap();
    let email = h.accounts.confirm_email(&token).await.unwrap();

    assert_eq!(email, "a@b.com");
    assert!(h.directory.get(user.id).unwrap().is_verified);
}

#[tokio::test]
async fn test_confirm_email_for_unknown_subject_fails() {
    let h = TestHarness::new().await;

    let token = h.accounts.issue_action_token("nobody@b.com").unwrap();
    let err = h.accounts.confirm_email(&token).await.unwrap_err();

    assert_eq!(err.kind, ErrorKind::NotFound);
}

#[tokio::test]
async fn test_elapsed_email_token_fails_with_expiry() {
    let h = TestHarness::new().await;
    h.register("pathan", "a@b.com", "secret1", UserRole::User);

    // A one-hour token decoded two hours later.
    let codec = bookvault::EmailTokenCodec::new(&h.config).unwrap();
    let token = codec
        .sign_with_ttl("a@b.com", chrono::Duration::hours(-1))
        .unwrap();

    let err = h.accounts.confirm_email(&token).await.unwrap_err();
    assert_eq!(err.kind, ErrorKind::TokenExpired);
}

#[tokio::test]
async fn test_reset_password_replaces_credential() {
    let h = TestHarness::new().await;
    h.register("pathan", "a@b.com", "secret1", UserRole::User);

    let token = h.accounts.issue_action_token("a@b.com").unwrap();
    h.accounts
        .reset_password(&token, "mangrove-thicket-91-lantern")
        .await
        .unwrap();

    assert!(
        h.issuer
            .login("a@b.com", "mangrove-thicket-91-lantern")
            .await
            .is_ok()
    );
    let err = h.issuer.login("a@b.com", "secret1").await.unwrap_err();
    assert_eq!(err.kind, ErrorKind::InvalidCredentials);
}

#[tokio::test]
async fn test_reset_password_enforces_policy() {
    let h = TestHarness::new().await;
    h.register("pathan", "a@b.com", "secret1", UserRole::User);

    let token = h.accounts.issue_action_token("a@b.com").unwrap();
    let err = h.accounts.reset_password(&token, "abc").await.unwrap_err();

    assert_eq!(err.kind, ErrorKind::Validation);
}

#[tokio::test]
async fn test_session_token_not_accepted_as_email_token() {
    let h = TestHarness::new().await;
    h.register("pathan", "a@b.com", "secret1", UserRole::User);

    let outcome = h.issuer.login("a@b.com", "secret1").await.unwrap();
    let err = h
        .accounts
        .confirm_email(&outcome.tokens.access_token)
        .await
        .unwrap_err();

    assert_eq!(err.kind, ErrorKind::InvalidToken);
}
