//! Input commands for the authentication use cases.
//!
//! Commands carry raw, untrusted strings; parsing into value objects happens
//! inside the service. `validate` only checks for missing input so that the
//! value objects stay the single source of format rules.

use std::fmt;

use crate::errors::{DomainResult, ValidationError};

/// Marker substituted for password fields in `Debug` output
const REDACTED: &str = "[PROTECTED]";

fn require(value: &str, field: &str) -> DomainResult<()> {
    if value.trim().is_empty() {
        return Err(ValidationError::MissingField {
            field: field.to_string(),
        }
        .into());
    }
    Ok(())
}

/// Request to register a new account
#[derive(Clone)]
pub struct RegisterCommand {
    pub email: String,
    pub password: String,
    pub username: String,
}

impl RegisterCommand {
    pub fn new(
        email: impl Into<String>,
        password: impl Into<String>,
        username: impl Into<String>,
    ) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
            username: username.into(),
        }
    }

    /// Reject blank fields before any parsing or repository access
    pub fn validate(&self) -> DomainResult<()> {
        require(&self.email, "email")?;
        require(&self.password, "password")?;
        require(&self.username, "username")
    }
}

impl fmt::Debug for RegisterCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegisterCommand")
            .field("email", &self.email)
            .field("password", &REDACTED)
            .field("username", &self.username)
            .finish()
    }
}

/// Request to authenticate with email and password
#[derive(Clone)]
pub struct LoginCommand {
    pub email: String,
    pub password: String,
}

impl LoginCommand {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    pub fn validate(&self) -> DomainResult<()> {
        require(&self.email, "email")?;
        require(&self.password, "password")
    }
}

impl fmt::Debug for LoginCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginCommand")
            .field("email", &self.email)
            .field("password", &REDACTED)
            .finish()
    }
}

/// Request to replace the password of an authenticated account
#[derive(Clone)]
pub struct ChangePasswordCommand {
    pub current_password: String,
    pub new_password: String,
}

impl ChangePasswordCommand {
    pub fn new(current_password: impl Into<String>, new_password: impl Into<String>) -> Self {
        Self {
            current_password: current_password.into(),
            new_password: new_password.into(),
        }
    }

    /// Reject blank fields and a new password equal to the current one
    pub fn validate(&self) -> DomainResult<()> {
        require(&self.current_password, "currentPassword")?;
        require(&self.new_password, "newPassword")?;

        if self.current_password == self.new_password {
            return Err(ValidationError::PasswordUnchanged.into());
        }
        Ok(())
    }
}

impl fmt::Debug for ChangePasswordCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChangePasswordCommand")
            .field("current_password", &REDACTED)
            .field("new_password", &REDACTED)
            .finish()
    }
}

/// Request to exchange a refresh token for a new token pair
#[derive(Debug, Clone)]
pub struct RefreshCommand {
    pub refresh_token: String,
}

impl RefreshCommand {
    pub fn new(refresh_token: impl Into<String>) -> Self {
        Self {
            refresh_token: refresh_token.into(),
        }
    }

    pub fn validate(&self) -> DomainResult<()> {
        require(&self.refresh_token, "refreshToken")
    }
}
