//! In-memory account repository for local runs and tests.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::AccountRepository;
use common::AppResult;
use domain::Account;

/// Account store keyed by username.
///
/// Keying by username gives the same one-record-per-username guarantee as the
/// primary key of the SQL store.
#[derive(Default)]
pub struct InMemoryAccountStore {
    accounts: RwLock<HashMap<String, Account>>,
}

impl InMemoryAccountStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with the given accounts
    pub fn with_accounts(accounts: impl IntoIterator<Item = Account>) -> Self {
        let accounts = accounts
            .into_iter()
            .map(|account| (account.username.clone(), account))
            .collect();

        Self {
            accounts: RwLock::new(accounts),
        }
    }

    pub async fn len(&self) -> usize {
        self.accounts.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.accounts.read().await.is_empty()
    }
}

#[async_trait]
impl AccountRepository for InMemoryAccountStore {
    async fn find_by_username(&self, username: &str) -> AppResult<Option<Account>> {
        Ok(self.accounts.read().await.get(username).cloned())
    }

    async fn find_by_activation_code(&self, code: &str) -> AppResult<Option<Account>> {
        let accounts = self.accounts.read().await;
        Ok(accounts
            .values()
            .find(|account| account.activation_code.as_deref() == Some(code))
            .cloned())
    }

    async fn save(&self, account: &Account) -> AppResult<()> {
        self.accounts
            .write()
            .await
            .insert(account.username.clone(), account.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn account(username: &str, code: Option<&str>) -> Account {
        let mut account = Account::new(username.into(), format!("{}@mail", username), "hash".into());
        if let Some(code) = code {
            account.issue_activation_code(code.into());
        }
        account
    }

    #[test]
    fn test_find_by_username() {
        let store = InMemoryAccountStore::with_accounts([account("John", None)]);

        let found = tokio_test::block_on(store.find_by_username("John")).unwrap();
        assert_eq!(found.unwrap().email, "John@mail");

        let missing = tokio_test::block_on(store.find_by_username("Ross")).unwrap();
        assert!(missing.is_none());
    }

    #[test]
    fn test_find_by_activation_code_is_case_sensitive() {
        let store = InMemoryAccountStore::with_accounts([account("John", Some("Activate"))]);

        let found = tokio_test::block_on(store.find_by_activation_code("Activate")).unwrap();
        assert!(found.is_some());

        let missing = tokio_test::block_on(store.find_by_activation_code("activate")).unwrap();
        assert!(missing.is_none());
    }

    #[tokio::test]
    async fn test_save_upserts_by_username() {
        let store = InMemoryAccountStore::new();
        assert!(store.is_empty().await);

        let mut john = account("John", Some("code"));
        store.save(&john).await.unwrap();

        john.confirm();
        store.save(&john).await.unwrap();

        assert_eq!(store.len().await, 1);
        let stored = store.find_by_username("John").await.unwrap().unwrap();
        assert!(stored.is_confirmed());
        assert!(store.find_by_activation_code("code").await.unwrap().is_none());
    }
}
