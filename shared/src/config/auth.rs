//! Authentication and authorization configuration

use serde::{Deserialize, Serialize};

/// Default access token lifetime: 1 hour
pub const DEFAULT_ACCESS_TOKEN_EXPIRY_SECS: i64 = 3600;

/// Default refresh token lifetime: 7 days
pub const DEFAULT_REFRESH_TOKEN_EXPIRY_SECS: i64 = 604_800;

/// JWT authentication configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct JwtConfig {
    /// JWT secret key for signing tokens.
    ///
    /// Must be at least 256 bits (32 bytes). When absent, the token service
    /// generates an ephemeral key for non-production use and logs a warning.
    #[serde(default)]
    pub secret: Option<String>,

    /// Access token expiry time in seconds
    pub access_token_expiry: i64,

    /// Refresh token expiry time in seconds
    pub refresh_token_expiry: i64,
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            secret: None,
            access_token_expiry: DEFAULT_ACCESS_TOKEN_EXPIRY_SECS,
            refresh_token_expiry: DEFAULT_REFRESH_TOKEN_EXPIRY_SECS,
        }
    }
}

impl JwtConfig {
    /// Create a new JWT configuration with an explicit secret
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: Some(secret.into()),
            ..Default::default()
        }
    }

    /// Set access token expiry in minutes
    pub fn with_access_expiry_minutes(mut self, minutes: i64) -> Self {
        self.access_token_expiry = minutes * 60;
        self
    }

    /// Set refresh token expiry in days
    pub fn with_refresh_expiry_days(mut self, days: i64) -> Self {
        self.refresh_token_expiry = days * 86_400;
        self
    }

    /// Check whether a signing secret was supplied by configuration
    pub fn has_secret(&self) -> bool {
        self.secret.as_deref().is_some_and(|s| !s.trim().is_empty())
    }
}

/// Complete authentication configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AuthConfig {
    /// JWT configuration
    pub jwt: JwtConfig,
}

impl AuthConfig {
    /// Create from environment variables
    ///
    /// Reads `JWT_SECRET`, `JWT_ACCESS_TOKEN_EXPIRY` and
    /// `JWT_REFRESH_TOKEN_EXPIRY` (both expiries in seconds).
    pub fn from_env() -> Self {
        let secret = std::env::var("JWT_SECRET")
            .ok()
            .filter(|s| !s.trim().is_empty());
        let access_token_expiry = std::env::var("JWT_ACCESS_TOKEN_EXPIRY")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_ACCESS_TOKEN_EXPIRY_SECS);
        let refresh_token_expiry = std::env::var("JWT_REFRESH_TOKEN_EXPIRY")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_REFRESH_TOKEN_EXPIRY_SECS);

        Self {
            jwt: JwtConfig {
                secret,
                access_token_expiry,
                refresh_token_expiry,
            },
        }
    }

    /// Get access token expiry in seconds
    pub fn access_token_expiry_seconds(&self) -> i64 {
        self.jwt.access_token_expiry
    }

    /// Get refresh token expiry in seconds
    pub fn refresh_token_expiry_seconds(&self) -> i64 {
        self.jwt.refresh_token_expiry
    }
}
