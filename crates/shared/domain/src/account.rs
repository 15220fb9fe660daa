//! Account domain entity and related types.

use std::collections::BTreeSet;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::{ROLE_ADMIN, ROLE_SEPARATOR, ROLE_USER};
use crate::error::{DomainError, DomainResult};

/// Account roles enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountRole {
    User,
    Admin,
}

impl AccountRole {
    /// Check if this role has admin privileges
    pub fn is_admin(&self) -> bool {
        matches!(self, AccountRole::Admin)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AccountRole::Admin => ROLE_ADMIN,
            AccountRole::User => ROLE_USER,
        }
    }
}

impl FromStr for AccountRole {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            ROLE_USER => Ok(AccountRole::User),
            ROLE_ADMIN => Ok(AccountRole::Admin),
            other => Err(DomainError::UnknownRole(other.to_string())),
        }
    }
}

impl std::fmt::Display for AccountRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Role set assigned to every freshly registered account.
pub fn default_roles() -> BTreeSet<AccountRole> {
    BTreeSet::from([AccountRole::User])
}

/// Flatten a role set into its column form, e.g. `"user,admin"`.
pub fn join_roles(roles: &BTreeSet<AccountRole>) -> String {
    roles
        .iter()
        .map(AccountRole::as_str)
        .collect::<Vec<_>>()
        .join(ROLE_SEPARATOR)
}

/// Parse the column form produced by [`join_roles`]. Empty segments are skipped.
pub fn parse_roles(raw: &str) -> DomainResult<BTreeSet<AccountRole>> {
    raw.split(ROLE_SEPARATOR)
        .filter(|part| !part.trim().is_empty())
        .map(AccountRole::from_str)
        .collect()
}

/// Account domain entity
///
/// An account holding an activation code is unconfirmed; clearing the code
/// confirms it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    pub username: String,
    pub email: String,
    #[serde(skip_serializing, default)]
    pub password_hash: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub activation_code: Option<String>,
    pub roles: BTreeSet<AccountRole>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Account {
    /// Create a confirmed account with no roles.
    ///
    /// Registration assigns the default roles and an activation code on top of this.
    pub fn new(username: String, email: String, password_hash: String) -> Self {
        let now = Utc::now();
        Self {
            username,
            email,
            password_hash,
            activation_code: None,
            roles: BTreeSet::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Check if the owner has proven control of the current email
    pub fn is_confirmed(&self) -> bool {
        self.activation_code.is_none()
    }

    pub fn has_role(&self, role: AccountRole) -> bool {
        self.roles.contains(&role)
    }

    /// Check if account has admin role
    pub fn is_admin(&self) -> bool {
        self.roles.iter().any(AccountRole::is_admin)
    }

    /// Replace the role set
    pub fn assign_roles(&mut self, roles: BTreeSet<AccountRole>) {
        self.roles = roles;
        self.updated_at = Utc::now();
    }

    /// Put the account into the unconfirmed state with the given code
    pub fn issue_activation_code(&mut self, code: String) {
        self.activation_code = Some(code);
        self.updated_at = Utc::now();
    }

    /// Clear the activation code, confirming the account
    pub fn confirm(&mut self) {
        self.activation_code = None;
        self.updated_at = Utc::now();
    }

    /// Update the contact address
    pub fn change_email(&mut self, email: String) {
        self.email = email;
        self.updated_at = Utc::now();
    }

    /// Store a new credential hash
    pub fn change_password_hash(&mut self, password_hash: String) {
        self.password_hash = password_hash;
        self.updated_at = Utc::now();
    }
}

/// Candidate account submitted for registration.
#[derive(Clone, Deserialize)]
pub struct Registration {
    /// Requested unique username
    pub username: String,
    /// Contact address the activation code is sent to
    pub email: String,
    /// Plain text password, replaced by its hash before persisting
    pub password: String,
}

impl Registration {
    pub fn new(
        username: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            email: email.into(),
            password: password.into(),
        }
    }
}

// Don't expose the plain text password in debug output
impl std::fmt::Debug for Registration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Registration")
            .field("username", &self.username)
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn account() -> Account {
        Account::new("john".into(), "john@mail".into(), "hash".into())
    }

    #[test]
    fn test_new_account_is_confirmed_without_roles() {
        let account = account();
        assert!(account.is_confirmed());
        assert!(account.roles.is_empty());
    }

    #[test]
    fn test_activation_code_toggles_confirmation() {
        let mut account = account();

        account.issue_activation_code("code".into());
        assert!(!account.is_confirmed());
        assert_eq!(account.activation_code.as_deref(), Some("code"));

        account.confirm();
        assert!(account.is_confirmed());
    }

    #[test]
    fn test_roles_round_trip_through_column_form() {
        let roles = BTreeSet::from([AccountRole::Admin, AccountRole::User]);
        let joined = join_roles(&roles);

        assert_eq!(joined, "user,admin");
        assert_eq!(parse_roles(&joined).unwrap(), roles);
    }

    #[test]
    fn test_parse_roles_skips_empty_segments() {
        assert!(parse_roles("").unwrap().is_empty());
        assert_eq!(parse_roles("user,").unwrap(), default_roles());
    }

    #[test]
    fn test_parse_roles_rejects_unknown() {
        let err = parse_roles("user,root").unwrap_err();
        assert_eq!(err, DomainError::UnknownRole("root".into()));
    }

    #[test]
    fn test_is_admin() {
        let mut account = account();
        account.assign_roles(default_roles());
        assert!(!account.is_admin());
        assert!(account.has_role(AccountRole::User));

        account.assign_roles(BTreeSet::from([AccountRole::Admin]));
        assert!(account.is_admin());
    }

    #[test]
    fn test_serialization_hides_password_hash() {
        let json = serde_json::to_value(account()).unwrap();
        assert!(json.get("password_hash").is_none());
        assert!(json.get("activation_code").is_none());
        assert_eq!(json["username"], "john");
    }

    #[test]
    fn test_registration_debug_redacts_password() {
        let registration = Registration::new("john", "john@mail", "secret");
        let debug = format!("{:?}", registration);
        assert!(!debug.contains("secret"));
        assert!(debug.contains("[REDACTED]"));
    }
}
