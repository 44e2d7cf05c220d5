//! Email value object used as the login identifier.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::errors::{DomainResult, ValidationError};

/// Maximum accepted email length
const MAX_LENGTH: usize = 255;

/// Conservative email shape: local part, `@`, domain with a dot and a TLD of
/// at least two letters.
static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9]([A-Za-z0-9.-]*[A-Za-z0-9])?\.[A-Za-z]{2,}$")
        .expect("email pattern must compile")
});

/// Normalized email address
///
/// Stored trimmed and lower-cased; two emails differing only in case or
/// surrounding whitespace compare equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Email(String);

impl Email {
    /// Parse and normalize a raw email string
    ///
    /// Fails when the input is empty or whitespace-only, does not match the
    /// email shape, or exceeds 255 characters.
    pub fn parse(raw: &str) -> DomainResult<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::InvalidEmail {
                reason: "email cannot be empty".to_string(),
            }
            .into());
        }
        if !EMAIL_PATTERN.is_match(trimmed) {
            return Err(ValidationError::InvalidEmail {
                reason: format!("not a valid email address: {}", trimmed),
            }
            .into());
        }
        if trimmed.len() > MAX_LENGTH {
            return Err(ValidationError::InvalidEmail {
                reason: format!("email exceeds {} characters", MAX_LENGTH),
            }
            .into());
        }

        Ok(Self(trimmed.to_lowercase()))
    }

    /// Non-failing probe for callers that only need a predicate
    pub fn is_valid(raw: &str) -> bool {
        let trimmed = raw.trim();
        !trimmed.is_empty() && trimmed.len() <= MAX_LENGTH && EMAIL_PATTERN.is_match(trimmed)
    }

    /// Get the normalized email value
    pub fn value(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Email {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
