//! Password hashing value object and the encoder abstraction behind it.

use serde::{Deserialize, Serialize};

use crate::errors::{DomainError, DomainResult, ValidationError};

/// Minimum plaintext password length
const MIN_LENGTH: usize = 8;

/// Marker returned instead of the hash by `Display`/`Debug`
const REDACTED: &str = "[PROTECTED]";

/// One-way password encoder
///
/// Injected wherever passwords are hashed or verified so that the algorithm
/// stays swappable and tests can substitute a cheap double.
pub trait PasswordEncoder: Send + Sync {
    /// Compute a salted one-way hash of the plaintext
    fn encode(&self, plain: &str) -> DomainResult<String>;

    /// Check the plaintext against a previously computed hash
    ///
    /// Never fails: malformed hashes and mismatches both yield `false`.
    fn verify(&self, plain: &str, hash: &str) -> bool;
}

/// Bcrypt-backed password encoder
#[derive(Debug, Clone)]
pub struct BcryptEncoder {
    cost: u32,
}

impl BcryptEncoder {
    /// Create an encoder with the default work factor
    pub fn new() -> Self {
        Self {
            cost: bcrypt::DEFAULT_COST,
        }
    }

    /// Create an encoder with an explicit work factor
    ///
    /// Intended for tests, where the default cost is prohibitively slow.
    pub fn with_cost(cost: u32) -> Self {
        Self { cost }
    }
}

impl Default for BcryptEncoder {
    fn default() -> Self {
        Self::new()
    }
}

impl PasswordEncoder for BcryptEncoder {
    fn encode(&self, plain: &str) -> DomainResult<String> {
        bcrypt::hash(plain, self.cost).map_err(|e| DomainError::Internal {
            message: format!("password hashing failed: {}", e),
        })
    }

    fn verify(&self, plain: &str, hash: &str) -> bool {
        bcrypt::verify(plain, hash).unwrap_or(false)
    }
}

/// Irreversible password hash
///
/// Holds only the hashed value; the plaintext never enters this type. The
/// string representation is redacted so hashes cannot leak through logs.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PasswordHash {
    hashed: String,
}

impl PasswordHash {
    /// Hash a plaintext password, enforcing the strength policy first
    ///
    /// The policy requires at least 8 characters with at least one letter
    /// and one digit.
    pub fn from_plaintext(plain: &str, encoder: &dyn PasswordEncoder) -> DomainResult<Self> {
        if !Self::is_strong(plain) {
            return Err(ValidationError::WeakPassword.into());
        }

        let hashed = encoder.encode(plain)?;
        Ok(Self { hashed })
    }

    /// Wrap an already-hashed value reloaded from storage
    ///
    /// Trusted-restore path: no strength check, so legacy hashes keep
    /// verifying. Fails only on a blank input.
    pub fn from_hash(hashed: impl Into<String>) -> DomainResult<Self> {
        let hashed = hashed.into();
        if hashed.trim().is_empty() {
            return Err(DomainError::Validation {
                message: "hashed password cannot be empty".to_string(),
            });
        }

        Ok(Self { hashed })
    }

    /// Check whether a plaintext satisfies the strength policy
    pub fn is_strong(password: &str) -> bool {
        password.chars().count() >= MIN_LENGTH
            && password.chars().any(|c| c.is_ascii_alphabetic())
            && password.chars().any(|c| c.is_ascii_digit())
    }

    /// Check the plaintext against this hash
    ///
    /// Returns a plain boolean; a mismatch is not an error.
    pub fn matches(&self, plain: &str, encoder: &dyn PasswordEncoder) -> bool {
        encoder.verify(plain, &self.hashed)
    }

    /// Get the hashed value (for persistence mapping only)
    pub fn value(&self) -> &str {
        &self.hashed
    }
}

impl std::fmt::Debug for PasswordHash {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(REDACTED)
    }
}

impl std::fmt::Display for PasswordHash {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(REDACTED)
    }
}
