//! Repository interfaces for domain persistence.

pub mod account;

pub use account::{AccountRepository, MockAccountRepository};
