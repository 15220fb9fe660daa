//! Account service - registration, activation and profile self-service.

use async_trait::async_trait;
use std::sync::Arc;

use common::{AppResult, OptionExt};
use domain::{
    default_roles, generate_activation_code, Account, ActivationMail, Registration,
    DEFAULT_ACTIVATION_BASE_URL,
};

use super::PrincipalLoader;
use crate::mail::MailSender;
use crate::repository::AccountRepository;
use crate::security::PasswordEncoder;

/// Account lifecycle service trait for dependency injection.
///
/// Routine negatives (taken username, unknown activation code) come back as
/// `Ok(false)`. Collaborator failures are returned unchanged.
#[async_trait]
pub trait AccountService: PrincipalLoader {
    /// Create an unconfirmed account and mail its activation code.
    ///
    /// Returns `Ok(false)` without touching the store or the mailer when the
    /// username is already taken.
    async fn register(&self, registration: Registration) -> AppResult<bool>;

    /// Confirm the account holding `code`. `Ok(false)` if no account holds it.
    async fn activate(&self, code: &str) -> AppResult<bool>;

    /// Apply a password and/or email change and persist the account.
    ///
    /// Empty or missing values mean "no change". A different email puts the
    /// account back into the unconfirmed state and mails a new code to the new
    /// address. The account is saved exactly once whatever changed, and the
    /// persisted record is returned.
    async fn update_profile(
        &self,
        account: Account,
        password: Option<&str>,
        email: Option<&str>,
    ) -> AppResult<Account>;
}

/// Concrete implementation of AccountService.
pub struct AccountManager {
    repo: Arc<dyn AccountRepository>,
    encoder: Arc<dyn PasswordEncoder>,
    mailer: Arc<dyn MailSender>,
    activation_base_url: String,
}

impl AccountManager {
    /// Create new account service instance with its collaborators
    pub fn new(
        repo: Arc<dyn AccountRepository>,
        encoder: Arc<dyn PasswordEncoder>,
        mailer: Arc<dyn MailSender>,
    ) -> Self {
        Self {
            repo,
            encoder,
            mailer,
            activation_base_url: DEFAULT_ACTIVATION_BASE_URL.to_string(),
        }
    }

    /// Override the base URL activation links point to
    pub fn with_activation_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.activation_base_url = base_url.into();
        self
    }

    async fn send_activation(&self, account: &Account, code: &str) -> AppResult<()> {
        let mail = ActivationMail::render(&account.username, code, &self.activation_base_url);
        self.mailer.send(&account.email, &mail.subject, &mail.body).await
    }
}

#[async_trait]
impl PrincipalLoader for AccountManager {
    async fn load_by_username(&self, username: &str) -> AppResult<Account> {
        self.repo
            .find_by_username(username)
            .await?
            .ok_or_principal_not_found(username)
    }
}

#[async_trait]
impl AccountService for AccountManager {
    async fn register(&self, registration: Registration) -> AppResult<bool> {
        // Best-effort check; the store's username key is the hard guarantee
        if self
            .repo
            .find_by_username(&registration.username)
            .await?
            .is_some()
        {
            tracing::debug!(username = %registration.username, "Username already taken");
            return Ok(false);
        }

        let Registration {
            username,
            email,
            password,
        } = registration;

        let code = generate_activation_code();
        let mut account = Account::new(username, email, String::new());
        account.issue_activation_code(code.clone());
        account.assign_roles(default_roles());
        account.change_password_hash(self.encoder.encode(&password)?);

        self.repo.save(&account).await?;
        self.send_activation(&account, &code).await?;

        tracing::info!(username = %account.username, "Account registered");
        Ok(true)
    }

    async fn activate(&self, code: &str) -> AppResult<bool> {
        let Some(mut account) = self.repo.find_by_activation_code(code).await? else {
            tracing::debug!("Activation code not found");
            return Ok(false);
        };

        account.confirm();
        self.repo.save(&account).await?;

        tracing::info!(username = %account.username, "Account activated");
        Ok(true)
    }

    async fn update_profile(
        &self,
        mut account: Account,
        password: Option<&str>,
        email: Option<&str>,
    ) -> AppResult<Account> {
        if let Some(password) = password.filter(|p| !p.is_empty()) {
            account.change_password_hash(self.encoder.encode(password)?);
        }

        let new_email = email
            .filter(|e| !e.is_empty() && *e != account.email)
            .map(str::to_owned);

        let new_code = match new_email {
            Some(new_email) => {
                let code = generate_activation_code();
                account.change_email(new_email);
                account.issue_activation_code(code.clone());
                Some(code)
            }
            None => None,
        };

        self.repo.save(&account).await?;

        if let Some(code) = new_code {
            self.send_activation(&account, &code).await?;
            tracing::info!(username = %account.username, "Email changed, re-activation required");
        }

        Ok(account)
    }
}
