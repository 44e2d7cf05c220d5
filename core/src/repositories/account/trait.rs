//! Account repository trait defining the interface for account persistence.
//!
//! The trait is async-first and uses Result types for error handling.
//! Implementations handle the actual storage while keeping the abstraction
//! boundary between domain and infrastructure layers.

use async_trait::async_trait;

use crate::domain::entities::account::Account;
use crate::domain::value_objects::email::Email;
use crate::domain::value_objects::username::Username;
use crate::errors::DomainResult;

/// Repository trait for Account aggregate persistence
///
/// Lookups take value objects, not raw strings, so every key reaching the
/// storage layer has already been validated and normalized.
///
/// Uniqueness of email and username is ultimately enforced by the storage
/// layer; handler-level existence checks only produce friendlier errors.
/// A storage-level conflict must surface as the matching
/// `AuthError::DuplicateEmail` / `AuthError::DuplicateUsername`.
#[async_trait]
pub trait AccountRepository: Send + Sync {
    /// Find an account by its normalized email address
    ///
    /// # Returns
    /// * `Ok(Some(Account))` - Account found
    /// * `Ok(None)` - No account with this email
    /// * `Err(DomainError)` - Storage error occurred
    async fn find_by_email(&self, email: &Email) -> DomainResult<Option<Account>>;

    /// Find an account by its username (case-sensitive)
    async fn find_by_username(&self, username: &Username) -> DomainResult<Option<Account>>;

    /// Find an account by its unique identifier
    async fn find_by_id(&self, id: i64) -> DomainResult<Option<Account>>;

    /// Persist an account
    ///
    /// Inserts when the account has no id yet (the returned account carries
    /// the assigned id); updates in place when it does.
    ///
    /// # Returns
    /// * `Ok(Account)` - The persisted account
    /// * `Err(DomainError)` - Unique-constraint conflict or storage error
    async fn save(&self, account: Account) -> DomainResult<Account>;
}
