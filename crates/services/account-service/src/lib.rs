//! Account Service Library
//!
//! Account lifecycle management: registration, email activation, principal
//! lookup for authentication and profile self-service. The core lives in
//! [`service`]; storage, hashing and mail delivery are injected collaborators.

pub mod config;
pub mod infra;
pub mod mail;
pub mod repository;
pub mod security;
pub mod service;

use std::sync::Arc;

use tracing::info;

use crate::config::AccountServiceConfig;
use crate::infra::Database;
use crate::mail::{LogMailSender, MailSender};
use crate::repository::{AccountRepository, AccountStore};
use crate::security::Argon2PasswordEncoder;
use crate::service::AccountManager;

/// Wire the service over `repo` with the Argon2 encoder and the logging mailer.
pub fn build_service(
    repo: Arc<dyn AccountRepository>,
    config: &AccountServiceConfig,
) -> AccountManager {
    build_service_with_mailer(repo, Arc::new(LogMailSender::new(&config.mail)), config)
}

/// Same as [`build_service`], delivering mail through `mailer`.
pub fn build_service_with_mailer(
    repo: Arc<dyn AccountRepository>,
    mailer: Arc<dyn MailSender>,
    config: &AccountServiceConfig,
) -> AccountManager {
    AccountManager::new(repo, Arc::new(Argon2PasswordEncoder::new()), mailer)
        .with_activation_base_url(config.mail.activation_base_url.clone())
}

/// Connect to the database (applying pending migrations) and build the service on top of it.
pub async fn connect_service(
    config: &AccountServiceConfig,
) -> Result<AccountManager, Box<dyn std::error::Error>> {
    let db = Database::connect(&config.database).await?;
    let repo = Arc::new(AccountStore::new(db.get_connection()));
    Ok(build_service(repo, config))
}

/// Run migrations (for CLI commands).
pub async fn run_migrations(action: MigrateAction) -> Result<(), Box<dyn std::error::Error>> {
    let config = AccountServiceConfig::from_env();
    let db = Database::connect_without_migrations(&config.database).await?;

    match action {
        MigrateAction::Up => {
            db.run_migrations().await?;
            info!("Migrations applied successfully");
        }
        MigrateAction::Down => {
            db.rollback_migration().await?;
            info!("Rolled back last migration");
        }
        MigrateAction::Status => {
            let status = db.migration_status().await?;
            for (name, applied) in status {
                let marker = if applied { "[x]" } else { "[ ]" };
                println!("{} {}", marker, name);
            }
        }
        MigrateAction::Fresh => {
            db.fresh_migrations().await?;
            info!("Database reset and migrations applied");
        }
    }

    Ok(())
}

/// Migration action type.
#[derive(Debug, Clone, Copy)]
pub enum MigrateAction {
    Up,
    Down,
    Status,
    Fresh,
}
