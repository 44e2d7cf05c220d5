//! Shared utilities and common types for the NutriLog server
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types
//! - Error response structures
//! - Environment detection

pub mod config;
pub mod types;

// Re-export commonly used items at crate root
pub use config::{AuthConfig, Environment, JwtConfig};
pub use types::ErrorResponse;
