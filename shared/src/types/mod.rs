//! Common type definitions shared across server modules.

pub mod response;

// Re-export commonly used types
pub use response::ErrorResponse;
