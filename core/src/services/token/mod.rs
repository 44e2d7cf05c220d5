//! Token service module for JWT management
//!
//! This module handles issuance and validation of signed bearer tokens:
//! - Access token generation (subject + profile claims + jti)
//! - Refresh token generation (subject only)
//! - Stateless validation and account-id extraction
//!
//! Tokens are never persisted and cannot be revoked; validity is purely a
//! function of signature and expiry.

mod config;
mod service;

#[cfg(test)]
mod tests;

pub use config::TokenServiceConfig;
pub use service::TokenService;
