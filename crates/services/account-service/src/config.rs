//! Account service configuration.

use std::env;

use common::{DatabaseConfig, MailConfig};

/// Account service configuration.
#[derive(Debug, Clone, Default)]
pub struct AccountServiceConfig {
    /// Database connection settings
    pub database: DatabaseConfig,
    /// Outbound mail settings (sender address, activation link base)
    pub mail: MailConfig,
}

impl AccountServiceConfig {
    /// Load configuration from environment variables, falling back to defaults.
    pub fn from_env() -> Self {
        let database = DatabaseConfig::default();
        let mail = MailConfig::default();

        Self {
            database: DatabaseConfig {
                url: env::var("ACCOUNT_SERVICE_DATABASE_URL")
                    .or_else(|_| env::var("DATABASE_URL"))
                    .unwrap_or(database.url),
                max_connections: env::var("DATABASE_MAX_CONNECTIONS")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(database.max_connections),
                min_connections: env::var("DATABASE_MIN_CONNECTIONS")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(database.min_connections),
            },
            mail: MailConfig {
                from: env::var("SMTP_FROM").unwrap_or(mail.from),
                activation_base_url: env::var("ACTIVATION_BASE_URL")
                    .unwrap_or(mail.activation_base_url),
            },
        }
    }
}
