//! Authentication service module
//!
//! This module provides the credential lifecycle:
//! - Account registration with unique email and username
//! - Email/password login with token issuance
//! - Password change for authenticated accounts
//! - Refresh-token exchange

mod commands;
mod service;

#[cfg(test)]
mod tests;

pub use commands::{ChangePasswordCommand, LoginCommand, RefreshCommand, RegisterCommand};
pub use service::AuthService;
