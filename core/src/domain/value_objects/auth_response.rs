//! Success payloads returned by the authentication use cases.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entities::account::Account;
use crate::domain::entities::token::TokenPair;
use crate::errors::{DomainError, DomainResult};

/// Fixed token-type marker returned with every token pair
pub const TOKEN_TYPE_BEARER: &str = "Bearer";

/// Authentication response containing tokens
///
/// Returned after a successful login or token refresh. The password hash is
/// never part of any response payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthResponse {
    /// JWT access token for API authentication
    pub access_token: String,

    /// JWT refresh token for obtaining new access tokens
    pub refresh_token: String,

    /// Access token expiration time in seconds
    pub expires_in: i64,

    /// Token type marker, always `Bearer`
    pub token_type: String,
}

impl AuthResponse {
    /// Creates an authentication response from a token pair
    pub fn from_token_pair(pair: TokenPair) -> Self {
        Self {
            access_token: pair.access_token,
            refresh_token: pair.refresh_token,
            expires_in: pair.expires_in,
            token_type: TOKEN_TYPE_BEARER.to_string(),
        }
    }
}

/// Registration summary returned after a successful account registration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterResponse {
    /// Assigned account id
    pub id: i64,

    /// Normalized email address
    pub email: String,

    /// Username as registered
    pub username: String,

    /// Timestamp of registration
    pub created_at: DateTime<Utc>,
}

impl RegisterResponse {
    /// Build a summary from a persisted account
    ///
    /// Fails when the account has not been assigned an id yet.
    pub fn from_account(account: &Account) -> DomainResult<Self> {
        let id = account.id.ok_or_else(|| DomainError::Internal {
            message: "cannot build registration response for an unsaved account".to_string(),
        })?;

        Ok(Self {
            id,
            email: account.email.value().to_string(),
            username: account.username.value().to_string(),
            created_at: account.created_at,
        })
    }
}
