//! Token claims and pair types for JWT-based authentication.
//!
//! Tokens are stateless: nothing here is persisted, and validity is purely
//! a function of signature and expiry at verification time. There is no
//! revoked state; issued tokens stay valid until they expire.

use chrono::{Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::value_objects::email::Email;
use crate::domain::value_objects::username::Username;

/// Claims structure for the JWT payload
///
/// Access tokens carry the profile claims and a unique `jti`; refresh
/// tokens carry the subject only, so a profile change never requires
/// refresh-token invalidation and refresh tokens leak no profile data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (account id, stringified)
    pub sub: String,

    /// Issued at timestamp (unix seconds)
    pub iat: i64,

    /// Expiration timestamp (unix seconds)
    pub exp: i64,

    /// JWT ID, unique per issued access token
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jti: Option<String>,

    /// Email claim (access tokens only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// Username claim (access tokens only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
}

impl Claims {
    /// Creates claims for an access token
    ///
    /// The fresh random `jti` keeps two tokens issued within the same clock
    /// tick for the same account distinguishable.
    pub fn new_access_token(
        account_id: i64,
        email: &Email,
        username: &Username,
        ttl_seconds: i64,
    ) -> Self {
        let now = Utc::now();
        let expiry = now + Duration::seconds(ttl_seconds);

        Self {
            sub: account_id.to_string(),
            iat: now.timestamp(),
            exp: expiry.timestamp(),
            jti: Some(Uuid::new_v4().to_string()),
            email: Some(email.value().to_string()),
            username: Some(username.value().to_string()),
        }
    }

    /// Creates claims for a refresh token (subject only)
    pub fn new_refresh_token(account_id: i64, ttl_seconds: i64) -> Self {
        let now = Utc::now();
        let expiry = now + Duration::seconds(ttl_seconds);

        Self {
            sub: account_id.to_string(),
            iat: now.timestamp(),
            exp: expiry.timestamp(),
            jti: None,
            email: None,
            username: None,
        }
    }

    /// Checks if the claims have expired
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() >= self.exp
    }

    /// Parses the subject claim as an account id
    pub fn account_id(&self) -> Result<i64, std::num::ParseIntError> {
        self.sub.parse::<i64>()
    }
}

/// Token pair returned to the client
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenPair {
    /// JWT access token
    pub access_token: String,

    /// JWT refresh token
    pub refresh_token: String,

    /// Access token expiry time in seconds
    pub expires_in: i64,
}

impl TokenPair {
    /// Creates a new token pair
    pub fn new(access_token: String, refresh_token: String, expires_in: i64) -> Self {
        Self {
            access_token,
            refresh_token,
            expires_in,
        }
    }
}
