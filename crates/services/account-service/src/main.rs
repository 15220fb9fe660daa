//! Account Service - command line front end for the account lifecycle.

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use account_service_lib::config::AccountServiceConfig;
use account_service_lib::service::{AccountService, PrincipalLoader};
use account_service_lib::MigrateAction;
use domain::Registration;

#[derive(Parser)]
#[command(name = "account-service")]
#[command(about = "Account registration, activation and profile management")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Database migration commands
    Migrate {
        #[command(subcommand)]
        action: MigrateCommands,
    },
    #[command(flatten)]
    Account(AccountCommands),
}

#[derive(Subcommand)]
enum AccountCommands {
    /// Register a new account and send its activation mail
    Register {
        #[arg(long)]
        username: String,
        #[arg(long)]
        email: String,
        #[arg(long, env = "ACCOUNT_PASSWORD", hide_env_values = true)]
        password: String,
    },
    /// Confirm an account by its activation code
    Activate {
        code: String,
    },
    /// Print an account as the authentication layer sees it
    Lookup {
        username: String,
    },
    /// Change an account's password and/or email
    UpdateProfile {
        username: String,
        #[arg(long)]
        password: Option<String>,
        #[arg(long)]
        email: Option<String>,
    },
}

#[derive(Subcommand)]
enum MigrateCommands {
    /// Run pending migrations
    Up,
    /// Rollback last migration
    Down,
    /// Show migration status
    Status,
    /// Reset database and run all migrations
    Fresh,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Migrate { action } => {
            let migrate_action = match action {
                MigrateCommands::Up => MigrateAction::Up,
                MigrateCommands::Down => MigrateAction::Down,
                MigrateCommands::Status => MigrateAction::Status,
                MigrateCommands::Fresh => MigrateAction::Fresh,
            };
            account_service_lib::run_migrations(migrate_action).await?;
        }
        Commands::Account(command) => run_account_command(command).await?,
    }

    Ok(())
}

async fn run_account_command(command: AccountCommands) -> Result<(), Box<dyn std::error::Error>> {
    let config = AccountServiceConfig::from_env();
    tracing::debug!(?config, "Loaded configuration");
    let service = account_service_lib::connect_service(&config).await?;

    match command {
        AccountCommands::Register {
            username,
            email,
            password,
        } => {
            let registration = Registration::new(username.clone(), email, password);
            if service.register(registration).await? {
                println!("Registered {}; activation mail sent", username);
            } else {
                println!("Username {} is already taken", username);
            }
        }
        AccountCommands::Activate { code } => {
            if service.activate(&code).await? {
                println!("Account activated");
            } else {
                println!("Activation code not found");
            }
        }
        AccountCommands::Lookup { username } => {
            let account = service.load_by_username(&username).await?;
            println!("{}", serde_json::to_string_pretty(&account)?);
        }
        AccountCommands::UpdateProfile {
            username,
            password,
            email,
        } => {
            let account = service.load_by_username(&username).await?;
            let updated = service
                .update_profile(account, password.as_deref(), email.as_deref())
                .await?;
            if updated.is_confirmed() {
                println!("Profile of {} updated", updated.username);
            } else {
                println!(
                    "Profile of {} updated; confirmation pending for {}",
                    updated.username, updated.email
                );
            }
        }
    }

    Ok(())
}
