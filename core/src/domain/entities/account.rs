//! Account aggregate root holding one registered identity and its credentials.

use chrono::{DateTime, Utc};

use crate::domain::value_objects::email::Email;
use crate::domain::value_objects::password_hash::{PasswordEncoder, PasswordHash};
use crate::domain::value_objects::username::Username;
use crate::errors::{AuthError, DomainResult};

/// Account aggregate root
///
/// `id` is absent until the account has been persisted; the repository
/// assigns it on first save. Email, username and password hash are always
/// present, which the type system guarantees.
#[derive(Debug, Clone)]
pub struct Account {
    /// Database identity; `None` until persisted
    pub id: Option<i64>,

    /// Login identifier, unique across all accounts
    pub email: Email,

    /// Display identifier, unique across all accounts
    pub username: Username,

    /// Hashed credential
    pub password_hash: PasswordHash,

    /// Timestamp when the account was created
    pub created_at: DateTime<Utc>,

    /// Timestamp of the last mutation
    pub updated_at: DateTime<Utc>,
}

impl Account {
    /// Factory for a newly registered account (no id yet)
    pub fn register(email: Email, username: Username, password_hash: PasswordHash) -> Self {
        let now = Utc::now();
        Self {
            id: None,
            email,
            username,
            password_hash,
            created_at: now,
            updated_at: now,
        }
    }

    /// Reconstruct a persisted account from storage
    pub fn restore(
        id: i64,
        email: Email,
        username: Username,
        password_hash: PasswordHash,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Some(id),
            email,
            username,
            password_hash,
            created_at,
            updated_at,
        }
    }

    /// Check a login attempt against the stored credential
    ///
    /// No side effects and no lockout counting; just the boolean.
    pub fn login(&self, plain_password: &str, encoder: &dyn PasswordEncoder) -> bool {
        self.password_hash.matches(plain_password, encoder)
    }

    /// Replace the credential after verifying the current password
    ///
    /// The new hash is expected to be constructed (and strength-checked)
    /// by the caller before this verification runs.
    pub fn change_password(
        &mut self,
        current_password: &str,
        new_hash: PasswordHash,
        encoder: &dyn PasswordEncoder,
    ) -> DomainResult<()> {
        if !self.password_hash.matches(current_password, encoder) {
            return Err(AuthError::CurrentPasswordMismatch.into());
        }

        self.password_hash = new_hash;
        self.updated_at = Utc::now();
        Ok(())
    }
}

/// Identity: equal ids when both are persisted, otherwise equal emails
/// (registration-time comparison).
impl PartialEq for Account {
    fn eq(&self, other: &Self) -> bool {
        match (self.id, other.id) {
            (Some(a), Some(b)) => a == b,
            _ => self.email == other.email,
        }
    }
}

impl Eq for Account {}
