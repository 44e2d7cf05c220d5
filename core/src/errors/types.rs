//! Error types for authentication, token handling and input validation.
//!
//! The presentation layer maps these into transport status codes; every
//! authentication failure shares a single error code so that callers cannot
//! tell an unknown email apart from a wrong password.

use nl_shared::types::response::ErrorResponse;
use thiserror::Error;

/// Authentication-related errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// Registration attempted with an email that is already taken.
    #[error("email already registered: {email}")]
    DuplicateEmail { email: String },

    /// Registration attempted with a username that is already taken.
    #[error("username already registered: {username}")]
    DuplicateUsername { username: String },

    /// Login failed. The message deliberately does not reveal whether the
    /// email exists or the password was wrong.
    #[error("email or password invalid")]
    InvalidCredentials,

    /// Password change rejected because the current password did not match.
    #[error("current password incorrect")]
    CurrentPasswordMismatch,

    /// Token refresh failed. Covers invalid, expired and malformed tokens
    /// as well as unknown subjects, all with the same message.
    #[error("invalid token")]
    InvalidRefreshToken,

    /// Password change targeted an account id with no matching account.
    #[error("account not found")]
    AccountNotFound,
}

/// Token-related errors raised by the token service
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    /// Signature verification or expiry check failed.
    #[error("invalid token")]
    InvalidToken,

    /// The signature checked out but the subject claim is not a parseable
    /// account id.
    #[error("bad token format")]
    InvalidTokenFormat,

    /// Signing the claims failed.
    #[error("token generation failed")]
    TokenGenerationFailed,
}

/// Input validation errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("invalid email: {reason}")]
    InvalidEmail { reason: String },

    #[error("invalid username: {reason}")]
    InvalidUsername { reason: String },

    /// Plaintext password failed the strength policy (at least 8 characters
    /// with at least one letter and one digit).
    #[error("password must be at least 8 characters and contain a letter and a digit")]
    WeakPassword,

    /// Password change where the new password equals the current one.
    #[error("new password must differ from the current password")]
    PasswordUnchanged,

    #[error("required field: {field}")]
    MissingField { field: String },
}

impl From<AuthError> for ErrorResponse {
    fn from(err: AuthError) -> Self {
        let error_code = match &err {
            AuthError::DuplicateEmail { .. } => "DUPLICATE_EMAIL",
            AuthError::DuplicateUsername { .. } => "DUPLICATE_USERNAME",
            // All three share one code on purpose (enumeration resistance).
            AuthError::InvalidCredentials
            | AuthError::CurrentPasswordMismatch
            | AuthError::InvalidRefreshToken => "AUTHENTICATION_FAILED",
            AuthError::AccountNotFound => "ACCOUNT_NOT_FOUND",
        };

        ErrorResponse::new(error_code, err.to_string())
    }
}

impl From<TokenError> for ErrorResponse {
    fn from(err: TokenError) -> Self {
        let error_code = match &err {
            TokenError::InvalidToken => "INVALID_TOKEN",
            TokenError::InvalidTokenFormat => "INVALID_TOKEN_FORMAT",
            TokenError::TokenGenerationFailed => "TOKEN_GENERATION_FAILED",
        };

        ErrorResponse::new(error_code, err.to_string())
    }
}

impl From<ValidationError> for ErrorResponse {
    fn from(err: ValidationError) -> Self {
        let error_code = match &err {
            ValidationError::InvalidEmail { .. } => "INVALID_EMAIL",
            ValidationError::InvalidUsername { .. } => "INVALID_USERNAME",
            ValidationError::WeakPassword => "WEAK_PASSWORD",
            ValidationError::PasswordUnchanged => "PASSWORD_UNCHANGED",
            ValidationError::MissingField { .. } => "MISSING_FIELD",
        };

        ErrorResponse::new(error_code, err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_authentication_failures_share_one_code() {
        let credentials: ErrorResponse = AuthError::InvalidCredentials.into();
        let refresh: ErrorResponse = AuthError::InvalidRefreshToken.into();
        let mismatch: ErrorResponse = AuthError::CurrentPasswordMismatch.into();

        assert_eq!(credentials.error, "AUTHENTICATION_FAILED");
        assert_eq!(refresh.error, "AUTHENTICATION_FAILED");
        assert_eq!(mismatch.error, "AUTHENTICATION_FAILED");
    }

    #[test]
    fn test_account_not_found_is_distinguishable() {
        let response: ErrorResponse = AuthError::AccountNotFound.into();
        assert_eq!(response.error, "ACCOUNT_NOT_FOUND");
    }

    #[test]
    fn test_duplicate_errors_identify_the_field() {
        let email: ErrorResponse = AuthError::DuplicateEmail {
            email: "a@b.com".to_string(),
        }
        .into();
        let username: ErrorResponse = AuthError::DuplicateUsername {
            username: "alice".to_string(),
        }
        .into();

        assert_eq!(email.error, "DUPLICATE_EMAIL");
        assert!(email.message.contains("a@b.com"));
        assert_eq!(username.error, "DUPLICATE_USERNAME");
        assert!(username.message.contains("alice"));
    }

    #[test]
    fn test_token_error_messages() {
        assert_eq!(TokenError::InvalidToken.to_string(), "invalid token");
        assert_eq!(TokenError::InvalidTokenFormat.to_string(), "bad token format");
    }
}
