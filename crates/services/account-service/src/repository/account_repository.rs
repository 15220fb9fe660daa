//! Account repository implementation backed by SeaORM.

use async_trait::async_trait;
use sea_orm::sea_query::OnConflict;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};

use super::entities::account::{self, ActiveModel, Entity as AccountEntity};
use common::{AppError, AppResult};
use domain::Account;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Account repository trait for dependency injection.
///
/// Lookups report a missing record as `Ok(None)`, never as an error.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait AccountRepository: Send + Sync {
    /// Find account by its username
    async fn find_by_username(&self, username: &str) -> AppResult<Option<Account>>;

    /// Find the account holding exactly this activation code (case-sensitive)
    async fn find_by_activation_code(&self, code: &str) -> AppResult<Option<Account>>;

    /// Insert the account, or overwrite the stored record with the same username
    async fn save(&self, account: &Account) -> AppResult<()>;
}

/// Concrete implementation of AccountRepository
pub struct AccountStore {
    db: DatabaseConnection,
}

impl AccountStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl AccountRepository for AccountStore {
    async fn find_by_username(&self, username: &str) -> AppResult<Option<Account>> {
        let result = AccountEntity::find_by_id(username.to_string())
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        result.map(Account::try_from).transpose().map_err(AppError::from)
    }

    async fn find_by_activation_code(&self, code: &str) -> AppResult<Option<Account>> {
        let result = AccountEntity::find()
            .filter(account::Column::ActivationCode.eq(code))
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        result.map(Account::try_from).transpose().map_err(AppError::from)
    }

    async fn save(&self, account: &Account) -> AppResult<()> {
        // The username primary key keeps one row per account; created_at is kept on update
        AccountEntity::insert(ActiveModel::from(account))
            .on_conflict(
                OnConflict::column(account::Column::Username)
                    .update_columns([
                        account::Column::Email,
                        account::Column::PasswordHash,
                        account::Column::ActivationCode,
                        account::Column::Roles,
                        account::Column::UpdatedAt,
                    ])
                    .to_owned(),
            )
            .exec_without_returning(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(())
    }
}
