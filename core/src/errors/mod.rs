//! Domain-specific error types and error handling.

mod types;

// Re-export all error types
pub use types::{AuthError, TokenError, ValidationError};

use nl_shared::types::response::ErrorResponse;
use thiserror::Error;

/// Core domain errors (general purpose)
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },

    // Bridge to specific error types
    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Token(#[from] TokenError),

    #[error(transparent)]
    ValidationErr(#[from] ValidationError),
}

pub type DomainResult<T> = Result<T, DomainError>;

impl From<DomainError> for ErrorResponse {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Auth(e) => e.into(),
            DomainError::Token(e) => e.into(),
            DomainError::ValidationErr(e) => e.into(),
            DomainError::Validation { ref message } => {
                ErrorResponse::new("VALIDATION_ERROR", message)
            }
            DomainError::Internal { ref message } => {
                ErrorResponse::new("INTERNAL_ERROR", message)
            }
        }
    }
}
