//! Value objects representing immutable domain concepts.

pub mod auth_response;
pub mod email;
pub mod password_hash;
pub mod username;

// Re-export commonly used types
pub use auth_response::{AuthResponse, RegisterResponse};
pub use email::Email;
pub use password_hash::{BcryptEncoder, PasswordEncoder, PasswordHash};
pub use username::Username;
