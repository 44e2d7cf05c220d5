//! Main authentication service implementation

use std::sync::Arc;

use crate::domain::entities::account::Account;
use crate::domain::entities::token::TokenPair;
use crate::domain::value_objects::auth_response::{AuthResponse, RegisterResponse};
use crate::domain::value_objects::email::Email;
use crate::domain::value_objects::password_hash::{PasswordEncoder, PasswordHash};
use crate::domain::value_objects::username::Username;
use crate::errors::{AuthError, DomainResult};
use crate::repositories::AccountRepository;
use crate::services::token::TokenService;

use super::commands::{ChangePasswordCommand, LoginCommand, RefreshCommand, RegisterCommand};

/// Authentication service covering the full credential lifecycle
///
/// Register, login, password change and token refresh all live here; the
/// repository and password encoder are injected so that storage and hashing
/// stay swappable.
pub struct AuthService<R>
where
    R: AccountRepository,
{
    /// Account repository for persistence operations
    account_repository: Arc<R>,
    /// Token service for JWT issuance and validation
    token_service: Arc<TokenService>,
    /// One-way password encoder
    password_encoder: Arc<dyn PasswordEncoder>,
}

impl<R> AuthService<R>
where
    R: AccountRepository,
{
    /// Create a new authentication service
    pub fn new(
        account_repository: Arc<R>,
        token_service: Arc<TokenService>,
        password_encoder: Arc<dyn PasswordEncoder>,
    ) -> Self {
        Self {
            account_repository,
            token_service,
            password_encoder,
        }
    }

    /// Register a new account
    ///
    /// This method:
    /// 1. Rejects blank fields
    /// 2. Parses email and username into their value objects
    /// 3. Checks email uniqueness, then username uniqueness
    /// 4. Hashes the password (strength policy enforced by the hash type)
    /// 5. Persists the account and returns its summary
    ///
    /// The email check runs before the username check, so when both are
    /// taken the caller learns about the email first.
    pub async fn register(&self, command: RegisterCommand) -> DomainResult<RegisterResponse> {
        command.validate()?;

        let email = Email::parse(&command.email)?;
        let username = Username::parse(&command.username)?;

        if self.account_repository.find_by_email(&email).await?.is_some() {
            return Err(AuthError::DuplicateEmail {
                email: email.value().to_string(),
            }
            .into());
        }
        if self
            .account_repository
            .find_by_username(&username)
            .await?
            .is_some()
        {
            return Err(AuthError::DuplicateUsername {
                username: username.value().to_string(),
            }
            .into());
        }

        let password_hash =
            PasswordHash::from_plaintext(&command.password, self.password_encoder.as_ref())?;
        let account = self
            .account_repository
            .save(Account::register(email, username, password_hash))
            .await?;

        tracing::info!(account_id = ?account.id, "account registered");
        RegisterResponse::from_account(&account)
    }

    /// Authenticate with email and password and issue a token pair
    ///
    /// Unknown emails, wrong passwords and even malformed email input all
    /// fail with the same credentials error, so a caller probing the
    /// endpoint cannot learn which emails are registered.
    pub async fn login(&self, command: LoginCommand) -> DomainResult<AuthResponse> {
        command.validate()?;

        let email =
            Email::parse(&command.email).map_err(|_| AuthError::InvalidCredentials)?;

        let account = self
            .account_repository
            .find_by_email(&email)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        if !account.login(&command.password, self.password_encoder.as_ref()) {
            tracing::debug!(account_id = ?account.id, "login rejected");
            return Err(AuthError::InvalidCredentials.into());
        }

        tracing::info!(account_id = ?account.id, "login succeeded");
        self.issue_tokens(&account)
    }

    /// Replace the password of an existing account
    ///
    /// The new password is strength-checked and hashed before the current
    /// password is verified, so a weak new password is reported even when
    /// the current password is wrong. Unlike login, a missing account is
    /// reported as such: the caller already holds an authenticated id, so
    /// there is nothing to enumerate.
    pub async fn change_password(
        &self,
        account_id: i64,
        command: ChangePasswordCommand,
    ) -> DomainResult<()> {
        command.validate()?;

        let mut account = self
            .account_repository
            .find_by_id(account_id)
            .await?
            .ok_or(AuthError::AccountNotFound)?;

        let new_hash =
            PasswordHash::from_plaintext(&command.new_password, self.password_encoder.as_ref())?;
        account.change_password(
            &command.current_password,
            new_hash,
            self.password_encoder.as_ref(),
        )?;

        self.account_repository.save(account).await?;
        tracing::info!(account_id, "password changed");
        Ok(())
    }

    /// Exchange a valid refresh token for a fresh token pair
    ///
    /// Every failure mode collapses into one refresh error: bad signature,
    /// expiry, an unparseable subject and a subject with no matching
    /// account are indistinguishable to the caller. The presented token is
    /// not invalidated; it stays usable until it expires.
    pub async fn refresh_token(&self, command: RefreshCommand) -> DomainResult<AuthResponse> {
        command.validate()?;

        if !self.token_service.validate_token(&command.refresh_token) {
            return Err(AuthError::InvalidRefreshToken.into());
        }

        let account_id = self
            .token_service
            .extract_account_id(&command.refresh_token)
            .map_err(|_| AuthError::InvalidRefreshToken)?;

        let account = self
            .account_repository
            .find_by_id(account_id)
            .await?
            .ok_or(AuthError::InvalidRefreshToken)?;

        tracing::debug!(account_id, "refresh token accepted");
        self.issue_tokens(&account)
    }

    fn issue_tokens(&self, account: &Account) -> DomainResult<AuthResponse> {
        let access_token = self.token_service.generate_access_token(account)?;
        let refresh_token = self.token_service.generate_refresh_token(account)?;
        let pair = TokenPair::new(
            access_token,
            refresh_token,
            self.token_service.access_token_ttl_seconds(),
        );
        Ok(AuthResponse::from_token_pair(pair))
    }
}
