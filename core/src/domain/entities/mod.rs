//! Domain entities representing core business objects.

pub mod account;
pub mod token;

// Re-export commonly used types
pub use account::Account;
pub use token::{Claims, TokenPair};
