//! Authentication service use-case tests

use std::sync::Arc;

use crate::domain::value_objects::password_hash::{BcryptEncoder, PasswordEncoder};
use crate::errors::{AuthError, DomainError, ValidationError};
use crate::repositories::MockAccountRepository;
use crate::services::auth::{
    AuthService, ChangePasswordCommand, LoginCommand, RefreshCommand, RegisterCommand,
};
use crate::services::token::{TokenService, TokenServiceConfig};

fn service() -> AuthService<MockAccountRepository> {
    let token_service = Arc::new(TokenService::new(TokenServiceConfig {
        secret: "unit-test-secret-key-0123456789abcdef".to_string(),
        access_token_ttl_secs: 3600,
        refresh_token_ttl_secs: 604_800,
    }));
    let encoder: Arc<dyn PasswordEncoder> = Arc::new(BcryptEncoder::with_cost(4));
    AuthService::new(Arc::new(MockAccountRepository::new()), token_service, encoder)
}

async fn register_alice(service: &AuthService<MockAccountRepository>) -> i64 {
    service
        .register(RegisterCommand::new("alice@example.com", "Passw0rd", "alice"))
        .await
        .unwrap()
        .id
}

// -- register --

#[tokio::test]
async fn test_register_returns_summary_with_assigned_id() {
    let service = service();
    let response = service
        .register(RegisterCommand::new(" Alice@Example.COM ", "Passw0rd", "alice"))
        .await
        .unwrap();

    assert_eq!(response.id, 1);
    assert_eq!(response.email, "alice@example.com");
    assert_eq!(response.username, "alice");
}

#[tokio::test]
async fn test_register_rejects_duplicate_email() {
    let service = service();
    register_alice(&service).await;

    let result = service
        .register(RegisterCommand::new("alice@example.com", "Passw0rd", "bob"))
        .await;

    assert!(matches!(
        result,
        Err(DomainError::Auth(AuthError::DuplicateEmail { .. }))
    ));
}

#[tokio::test]
async fn test_register_rejects_duplicate_username() {
    let service = service();
    register_alice(&service).await;

    let result = service
        .register(RegisterCommand::new("bob@example.com", "Passw0rd", "alice"))
        .await;

    assert!(matches!(
        result,
        Err(DomainError::Auth(AuthError::DuplicateUsername { .. }))
    ));
}

#[tokio::test]
async fn test_register_reports_email_conflict_before_username_conflict() {
    let service = service();
    register_alice(&service).await;

    // Both identifiers are taken; the email conflict wins.
    let result = service
        .register(RegisterCommand::new("alice@example.com", "Passw0rd", "alice"))
        .await;

    assert!(matches!(
        result,
        Err(DomainError::Auth(AuthError::DuplicateEmail { .. }))
    ));
}

#[tokio::test]
async fn test_register_rejects_weak_password() {
    let service = service();
    let result = service
        .register(RegisterCommand::new("alice@example.com", "password", "alice"))
        .await;

    assert!(matches!(
        result,
        Err(DomainError::ValidationErr(ValidationError::WeakPassword))
    ));
}

#[tokio::test]
async fn test_register_rejects_invalid_identifiers() {
    let service = service();

    let bad_email = service
        .register(RegisterCommand::new("not-an-email", "Passw0rd", "alice"))
        .await;
    let bad_username = service
        .register(RegisterCommand::new("alice@example.com", "Passw0rd", "a!"))
        .await;

    assert!(matches!(
        bad_email,
        Err(DomainError::ValidationErr(ValidationError::InvalidEmail { .. }))
    ));
    assert!(matches!(
        bad_username,
        Err(DomainError::ValidationErr(
            ValidationError::InvalidUsername { .. }
        ))
    ));
}

// -- login --

#[tokio::test]
async fn test_login_issues_bearer_token_pair() {
    let service = service();
    register_alice(&service).await;

    let response = service
        .login(LoginCommand::new("alice@example.com", "Passw0rd"))
        .await
        .unwrap();

    assert_eq!(response.token_type, "Bearer");
    assert_eq!(response.expires_in, 3600);
    assert!(!response.access_token.is_empty());
    assert!(!response.refresh_token.is_empty());
    assert_ne!(response.access_token, response.refresh_token);
}

#[tokio::test]
async fn test_login_failures_are_indistinguishable() {
    let service = service();
    register_alice(&service).await;

    let unknown_email = service
        .login(LoginCommand::new("nobody@example.com", "Passw0rd"))
        .await
        .unwrap_err();
    let wrong_password = service
        .login(LoginCommand::new("alice@example.com", "WrongPass1"))
        .await
        .unwrap_err();
    let malformed_email = service
        .login(LoginCommand::new("not-an-email", "Passw0rd"))
        .await
        .unwrap_err();

    // Same variant, same message, regardless of which check failed.
    assert_eq!(unknown_email.to_string(), wrong_password.to_string());
    assert_eq!(unknown_email.to_string(), malformed_email.to_string());
    assert!(matches!(
        unknown_email,
        DomainError::Auth(AuthError::InvalidCredentials)
    ));
}

#[tokio::test]
async fn test_login_accepts_differently_cased_email() {
    let service = service();
    register_alice(&service).await;

    let response = service
        .login(LoginCommand::new("ALICE@EXAMPLE.COM", "Passw0rd"))
        .await;
    assert!(response.is_ok());
}

// -- change_password --

#[tokio::test]
async fn test_change_password_replaces_the_credential() {
    let service = service();
    let id = register_alice(&service).await;

    service
        .change_password(id, ChangePasswordCommand::new("Passw0rd", "NewPass99"))
        .await
        .unwrap();

    assert!(service
        .login(LoginCommand::new("alice@example.com", "Passw0rd"))
        .await
        .is_err());
    assert!(service
        .login(LoginCommand::new("alice@example.com", "NewPass99"))
        .await
        .is_ok());
}

#[tokio::test]
async fn test_change_password_reports_missing_account() {
    let service = service();

    let result = service
        .change_password(99, ChangePasswordCommand::new("Passw0rd", "NewPass99"))
        .await;

    assert!(matches!(
        result,
        Err(DomainError::Auth(AuthError::AccountNotFound))
    ));
}

#[tokio::test]
async fn test_change_password_rejects_wrong_current_password() {
    let service = service();
    let id = register_alice(&service).await;

    let result = service
        .change_password(id, ChangePasswordCommand::new("WrongPass1", "NewPass99"))
        .await;

    assert!(matches!(
        result,
        Err(DomainError::Auth(AuthError::CurrentPasswordMismatch))
    ));
    assert!(service
        .login(LoginCommand::new("alice@example.com", "Passw0rd"))
        .await
        .is_ok());
}

#[tokio::test]
async fn test_weak_new_password_is_reported_before_current_password_check() {
    let service = service();
    let id = register_alice(&service).await;

    // Current password is wrong too, but strength is checked first.
    let result = service
        .change_password(id, ChangePasswordCommand::new("WrongPass1", "weak"))
        .await;

    assert!(matches!(
        result,
        Err(DomainError::ValidationErr(ValidationError::WeakPassword))
    ));
}

#[tokio::test]
async fn test_change_password_rejects_unchanged_password() {
    let service = service();
    let id = register_alice(&service).await;

    let result = service
        .change_password(id, ChangePasswordCommand::new("Passw0rd", "Passw0rd"))
        .await;

    assert!(matches!(
        result,
        Err(DomainError::ValidationErr(ValidationError::PasswordUnchanged))
    ));
}

// -- refresh_token --

#[tokio::test]
async fn test_refresh_issues_a_new_token_pair() {
    let service = service();
    register_alice(&service).await;

    let login = service
        .login(LoginCommand::new("alice@example.com", "Passw0rd"))
        .await
        .unwrap();
    let refreshed = service
        .refresh_token(RefreshCommand::new(login.refresh_token.clone()))
        .await
        .unwrap();

    assert_eq!(refreshed.token_type, "Bearer");
    assert_ne!(refreshed.access_token, login.access_token);
}

#[tokio::test]
async fn test_presented_refresh_token_remains_usable_after_refresh() {
    let service = service();
    register_alice(&service).await;

    let login = service
        .login(LoginCommand::new("alice@example.com", "Passw0rd"))
        .await
        .unwrap();

    service
        .refresh_token(RefreshCommand::new(login.refresh_token.clone()))
        .await
        .unwrap();
    // No rotation-with-invalidation: the old token still works.
    let second = service
        .refresh_token(RefreshCommand::new(login.refresh_token))
        .await;
    assert!(second.is_ok());
}

#[tokio::test]
async fn test_refresh_rejects_garbage_tokens() {
    let service = service();

    let result = service
        .refresh_token(RefreshCommand::new("not-a-token"))
        .await;

    assert!(matches!(
        result,
        Err(DomainError::Auth(AuthError::InvalidRefreshToken))
    ));
}

#[tokio::test]
async fn test_refresh_rejects_token_for_unknown_account() {
    let issuing = service();
    register_alice(&issuing).await;
    let login = issuing
        .login(LoginCommand::new("alice@example.com", "Passw0rd"))
        .await
        .unwrap();

    // Same signing secret, empty repository: the subject resolves to nothing.
    let verifying = service();
    let result = verifying
        .refresh_token(RefreshCommand::new(login.refresh_token))
        .await;

    assert!(matches!(
        result,
        Err(DomainError::Auth(AuthError::InvalidRefreshToken))
    ));
}

#[tokio::test]
async fn test_refresh_failure_modes_share_one_message() {
    let service = service();

    let garbage = service
        .refresh_token(RefreshCommand::new("garbage"))
        .await
        .unwrap_err();

    assert_eq!(garbage.to_string(), "invalid token");
}
