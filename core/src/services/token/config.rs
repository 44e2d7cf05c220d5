//! Configuration for the token service

use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use rand::RngCore;

use nl_shared::config::auth::AuthConfig;
use nl_shared::config::environment::Environment;

use crate::errors::{DomainError, DomainResult};

/// Minimum signing secret size: 256 bits
const MIN_SECRET_BYTES: usize = 32;

/// Configuration for the token service
#[derive(Debug, Clone)]
pub struct TokenServiceConfig {
    /// Symmetric JWT signing secret
    pub secret: String,
    /// Access token expiry in seconds
    pub access_token_ttl_secs: i64,
    /// Refresh token expiry in seconds
    pub refresh_token_ttl_secs: i64,
}

impl Default for TokenServiceConfig {
    fn default() -> Self {
        Self {
            secret: "development-secret-please-change-in-production".to_string(),
            access_token_ttl_secs: 3600,
            refresh_token_ttl_secs: 604_800,
        }
    }
}

impl TokenServiceConfig {
    /// Resolve a token service configuration from application config
    ///
    /// When no secret is configured, a random ephemeral one is generated
    /// for non-production use and a warning is logged; signed tokens then
    /// stop verifying across restarts. Production refuses to start without
    /// a configured secret.
    pub fn from_auth_config(config: &AuthConfig, environment: Environment) -> DomainResult<Self> {
        let secret = match config.jwt.secret.as_deref().map(str::trim) {
            Some(secret) if !secret.is_empty() => {
                if secret.len() < MIN_SECRET_BYTES {
                    tracing::warn!(
                        secret_bytes = secret.len(),
                        "JWT secret is shorter than 256 bits; use a longer key"
                    );
                }
                secret.to_string()
            }
            _ => {
                if environment.is_production() {
                    return Err(DomainError::Internal {
                        message: "JWT_SECRET must be configured in production".to_string(),
                    });
                }
                let generated = generate_ephemeral_secret();
                tracing::warn!(
                    %environment,
                    "no JWT secret configured; generated an ephemeral key. \
                     Tokens will not verify across restarts. Set JWT_SECRET."
                );
                generated
            }
        };

        Ok(Self {
            secret,
            access_token_ttl_secs: config.access_token_expiry_seconds(),
            refresh_token_ttl_secs: config.refresh_token_expiry_seconds(),
        })
    }
}

/// Generate a random base64-encoded 256-bit secret
fn generate_ephemeral_secret() -> String {
    let mut bytes = [0u8; MIN_SECRET_BYTES];
    rand::thread_rng().fill_bytes(&mut bytes);
    BASE64.encode(bytes)
}
