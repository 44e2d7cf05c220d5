//! # NutriLog Core
//!
//! Core business logic and domain layer for the NutriLog backend.
//! This crate contains the account aggregate, credential value objects,
//! token services, repository interfaces and error types that form the
//! authentication foundation of the application.

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::*;
pub use errors::*;
pub use repositories::*;
pub use services::*;
