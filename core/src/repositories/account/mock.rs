//! In-memory implementation of AccountRepository for testing.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entities::account::Account;
use crate::domain::value_objects::email::Email;
use crate::domain::value_objects::username::Username;
use crate::errors::{AuthError, DomainResult};

use super::trait_::AccountRepository;

/// Mock account repository for testing
///
/// Enforces email/username uniqueness the way a storage layer's unique
/// constraints would, surfacing conflicts as duplicate errors.
pub struct MockAccountRepository {
    accounts: Arc<RwLock<HashMap<i64, Account>>>,
    next_id: AtomicI64,
}

impl MockAccountRepository {
    /// Create a new empty mock repository
    pub fn new() -> Self {
        Self {
            accounts: Arc::new(RwLock::new(HashMap::new())),
            next_id: AtomicI64::new(1),
        }
    }
}

impl Default for MockAccountRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AccountRepository for MockAccountRepository {
    async fn find_by_email(&self, email: &Email) -> DomainResult<Option<Account>> {
        let accounts = self.accounts.read().await;
        Ok(accounts.values().find(|a| &a.email == email).cloned())
    }

    async fn find_by_username(&self, username: &Username) -> DomainResult<Option<Account>> {
        let accounts = self.accounts.read().await;
        Ok(accounts
            .values()
            .find(|a| &a.username == username)
            .cloned())
    }

    async fn find_by_id(&self, id: i64) -> DomainResult<Option<Account>> {
        let accounts = self.accounts.read().await;
        Ok(accounts.get(&id).cloned())
    }

    async fn save(&self, mut account: Account) -> DomainResult<Account> {
        let mut accounts = self.accounts.write().await;

        // Unique-constraint check, excluding the account itself on update.
        for existing in accounts.values() {
            if existing.id == account.id && account.id.is_some() {
                continue;
            }
            if existing.email == account.email {
                return Err(AuthError::DuplicateEmail {
                    email: account.email.value().to_string(),
                }
                .into());
            }
            if existing.username == account.username {
                return Err(AuthError::DuplicateUsername {
                    username: account.username.value().to_string(),
                }
                .into());
            }
        }

        let id = match account.id {
            Some(id) => {
                if !accounts.contains_key(&id) {
                    return Err(AuthError::AccountNotFound.into());
                }
                id
            }
            None => {
                let id = self.next_id.fetch_add(1, Ordering::SeqCst);
                account.id = Some(id);
                id
            }
        };

        accounts.insert(id, account.clone());
        Ok(account)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::password_hash::{BcryptEncoder, PasswordHash};

    fn account(email: &str, username: &str) -> Account {
        let encoder = BcryptEncoder::with_cost(4);
        Account::register(
            Email::parse(email).unwrap(),
            Username::parse(username).unwrap(),
            PasswordHash::from_plaintext("Passw0rd", &encoder).unwrap(),
        )
    }

    #[tokio::test]
    async fn test_save_assigns_sequential_ids() {
        let repo = MockAccountRepository::new();

        let a = repo.save(account("a@example.com", "alice")).await.unwrap();
        let b = repo.save(account("b@example.com", "bob")).await.unwrap();

        assert_eq!(a.id, Some(1));
        assert_eq!(b.id, Some(2));
    }

    #[tokio::test]
    async fn test_lookups_by_email_username_and_id() {
        let repo = MockAccountRepository::new();
        let saved = repo.save(account("a@example.com", "alice")).await.unwrap();

        let by_email = repo
            .find_by_email(&Email::parse("a@example.com").unwrap())
            .await
            .unwrap();
        let by_username = repo
            .find_by_username(&Username::parse("alice").unwrap())
            .await
            .unwrap();
        let by_id = repo.find_by_id(saved.id.unwrap()).await.unwrap();

        assert_eq!(by_email.as_ref().and_then(|a| a.id), saved.id);
        assert_eq!(by_username.as_ref().and_then(|a| a.id), saved.id);
        assert_eq!(by_id.and_then(|a| a.id), saved.id);
    }

    #[tokio::test]
    async fn test_username_lookup_is_case_sensitive() {
        let repo = MockAccountRepository::new();
        repo.save(account("a@example.com", "Alice")).await.unwrap();

        let found = repo
            .find_by_username(&Username::parse("alice").unwrap())
            .await
            .unwrap();
        assert!(found.is_none());
    }

    #[tokio::test]
    async fn test_insert_conflict_surfaces_duplicate_email() {
        let repo = MockAccountRepository::new();
        repo.save(account("a@example.com", "alice")).await.unwrap();

        let result = repo.save(account("a@example.com", "bob")).await;
        assert!(matches!(
            result,
            Err(crate::errors::DomainError::Auth(AuthError::DuplicateEmail { .. }))
        ));
    }

    #[tokio::test]
    async fn test_insert_conflict_surfaces_duplicate_username() {
        let repo = MockAccountRepository::new();
        repo.save(account("a@example.com", "alice")).await.unwrap();

        let result = repo.save(account("b@example.com", "alice")).await;
        assert!(matches!(
            result,
            Err(crate::errors::DomainError::Auth(
                AuthError::DuplicateUsername { .. }
            ))
        ));
    }

    #[tokio::test]
    async fn test_update_does_not_conflict_with_itself() {
        let repo = MockAccountRepository::new();
        let mut saved = repo.save(account("a@example.com", "alice")).await.unwrap();

        let encoder = BcryptEncoder::with_cost(4);
        saved.password_hash = PasswordHash::from_plaintext("NewPass99", &encoder).unwrap();
        let updated = repo.save(saved.clone()).await.unwrap();

        assert_eq!(updated.id, saved.id);
    }

    #[tokio::test]
    async fn test_update_of_unknown_id_fails() {
        let repo = MockAccountRepository::new();
        let mut unsaved = account("a@example.com", "alice");
        unsaved.id = Some(99);

        let result = repo.save(unsaved).await;
        assert!(matches!(
            result,
            Err(crate::errors::DomainError::Auth(AuthError::AccountNotFound))
        ));
    }
}
