//! Main token service implementation

use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};

use crate::domain::entities::account::Account;
use crate::domain::entities::token::Claims;
use crate::errors::{DomainError, DomainResult, TokenError};

use super::config::TokenServiceConfig;

/// Service issuing and validating signed bearer tokens
///
/// Validation is a pure function of (secret, token, current time): there is
/// no shared mutable state and no persistence, so concurrent use needs no
/// coordination. Issued tokens cannot be revoked before expiry.
pub struct TokenService {
    config: TokenServiceConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl TokenService {
    /// Creates a new token service instance
    pub fn new(config: TokenServiceConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.secret.as_bytes());

        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.validate_aud = false;
        // Expiry is exact; no clock-skew allowance.
        validation.leeway = 0;

        Self {
            config,
            encoding_key,
            decoding_key,
            validation,
        }
    }

    /// Generates a signed access token for a persisted account
    ///
    /// Claims: subject (account id), email, username, a fresh `jti`,
    /// issued-at and expiry (`now + access TTL`).
    ///
    /// # Returns
    ///
    /// * `Ok(String)` - The compact `header.payload.signature` token
    /// * `Err(DomainError)` - The account has no id or signing failed
    pub fn generate_access_token(&self, account: &Account) -> DomainResult<String> {
        let account_id = require_id(account)?;
        let claims = Claims::new_access_token(
            account_id,
            &account.email,
            &account.username,
            self.config.access_token_ttl_secs,
        );
        self.encode_jwt(&claims)
    }

    /// Generates a signed refresh token for a persisted account
    ///
    /// Subject-only claims: refresh tokens carry no profile data, so a
    /// profile change never requires refresh-token invalidation.
    pub fn generate_refresh_token(&self, account: &Account) -> DomainResult<String> {
        let account_id = require_id(account)?;
        let claims =
            Claims::new_refresh_token(account_id, self.config.refresh_token_ttl_secs);
        self.encode_jwt(&claims)
    }

    /// Verifies a token's signature and expiry
    ///
    /// Returns `false` for blank input, bad signatures, malformed tokens
    /// and expired tokens alike; never errors.
    pub fn validate_token(&self, token: &str) -> bool {
        if token.trim().is_empty() {
            return false;
        }
        self.decode_claims(token).is_ok()
    }

    /// Extracts the account id from a valid token
    ///
    /// The token must pass `validate_token` first. A signed token whose
    /// subject is not a parseable id fails with a distinct format error
    /// (corrupted or forged-but-signed case).
    ///
    /// # Returns
    ///
    /// * `Ok(i64)` - The subject account id
    /// * `Err(DomainError)` - Invalid token or unparseable subject
    pub fn extract_account_id(&self, token: &str) -> DomainResult<i64> {
        if !self.validate_token(token) {
            return Err(TokenError::InvalidToken.into());
        }

        let claims = self
            .decode_claims(token)
            .map_err(|_| DomainError::Token(TokenError::InvalidToken))?;
        claims
            .account_id()
            .map_err(|_| TokenError::InvalidTokenFormat.into())
    }

    /// Configured access-token lifetime in seconds, for response payloads
    pub fn access_token_ttl_seconds(&self) -> i64 {
        self.config.access_token_ttl_secs
    }

    /// Encodes claims into a compact signed JWT
    pub(crate) fn encode_jwt(&self, claims: &Claims) -> DomainResult<String> {
        let header = Header::new(Algorithm::HS256);
        encode(&header, claims, &self.encoding_key)
            .map_err(|_| DomainError::Token(TokenError::TokenGenerationFailed))
    }

    fn decode_claims(&self, token: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
        decode::<Claims>(token, &self.decoding_key, &self.validation).map(|data| data.claims)
    }
}

fn require_id(account: &Account) -> DomainResult<i64> {
    account.id.ok_or_else(|| DomainError::Internal {
        message: "cannot issue tokens for an account without an id".to_string(),
    })
}
