//! Username value object used as the display identifier.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::errors::{DomainResult, ValidationError};

const MIN_LENGTH: usize = 3;
const MAX_LENGTH: usize = 50;

static USERNAME_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9_-]+$").expect("username pattern must compile"));

/// Validated username
///
/// Trimmed, 3 to 50 characters from `[A-Za-z0-9_-]`. Case is preserved and
/// significant: `Alice` and `alice` are different usernames.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Username(String);

impl Username {
    /// Parse a raw username string
    ///
    /// Fails when the input is empty or whitespace-only, the trimmed length
    /// is outside [3, 50], or any character falls outside `[A-Za-z0-9_-]`.
    pub fn parse(raw: &str) -> DomainResult<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::InvalidUsername {
                reason: "username cannot be empty".to_string(),
            }
            .into());
        }
        if trimmed.len() < MIN_LENGTH || trimmed.len() > MAX_LENGTH {
            return Err(ValidationError::InvalidUsername {
                reason: format!(
                    "username must be between {} and {} characters",
                    MIN_LENGTH, MAX_LENGTH
                ),
            }
            .into());
        }
        if !USERNAME_PATTERN.is_match(trimmed) {
            return Err(ValidationError::InvalidUsername {
                reason: "username may only contain letters, digits, '_' and '-'".to_string(),
            }
            .into());
        }

        Ok(Self(trimmed.to_string()))
    }

    /// Non-failing probe for callers that only need a predicate
    pub fn is_valid(raw: &str) -> bool {
        let trimmed = raw.trim();
        trimmed.len() >= MIN_LENGTH
            && trimmed.len() <= MAX_LENGTH
            && USERNAME_PATTERN.is_match(trimmed)
    }

    /// Get the username value
    pub fn value(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Username {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
