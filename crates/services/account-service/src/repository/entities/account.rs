//! Account database entity for SeaORM.

use sea_orm::entity::prelude::*;
use sea_orm::Set;

use domain::{join_roles, parse_roles, Account, DomainError};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "accounts")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub username: String,
    pub email: String,
    pub password_hash: String,
    /// NULL once the current email is confirmed
    pub activation_code: Option<String>,
    /// Comma-separated role tags
    pub roles: String,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Convert database model to domain entity
impl TryFrom<Model> for Account {
    type Error = DomainError;

    fn try_from(model: Model) -> Result<Self, Self::Error> {
        Ok(Account {
            roles: parse_roles(&model.roles)?,
            username: model.username,
            email: model.email,
            password_hash: model.password_hash,
            activation_code: model.activation_code,
            created_at: model.created_at,
            updated_at: model.updated_at,
        })
    }
}

/// Convert domain entity to a fully-set active model (used for upserts)
impl From<&Account> for ActiveModel {
    fn from(account: &Account) -> Self {
        ActiveModel {
            username: Set(account.username.clone()),
            email: Set(account.email.clone()),
            password_hash: Set(account.password_hash.clone()),
            activation_code: Set(account.activation_code.clone()),
            roles: Set(join_roles(&account.roles)),
            created_at: Set(account.created_at),
            updated_at: Set(account.updated_at),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain::{default_roles, AccountRole};

    fn model(roles: &str) -> Model {
        let now = chrono::Utc::now();
        Model {
            username: "john".into(),
            email: "john@mail".into(),
            password_hash: "hash".into(),
            activation_code: Some("code".into()),
            roles: roles.into(),
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_model_to_account() {
        let account = Account::try_from(model("user,admin")).unwrap();

        assert_eq!(account.username, "john");
        assert_eq!(account.activation_code.as_deref(), Some("code"));
        assert!(account.has_role(AccountRole::Admin));
        assert!(account.has_role(AccountRole::User));
    }

    #[test]
    fn test_model_with_unknown_role_is_rejected() {
        assert!(Account::try_from(model("superuser")).is_err());
    }

    #[test]
    fn test_account_to_active_model() {
        let mut account = Account::new("john".into(), "john@mail".into(), "hash".into());
        account.assign_roles(default_roles());

        let active = ActiveModel::from(&account);

        assert_eq!(active.roles, Set("user".to_string()));
        assert_eq!(active.activation_code, Set(None));
    }
}
