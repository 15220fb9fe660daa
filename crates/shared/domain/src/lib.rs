//! Domain layer - Core business entities and value objects.
//!
//! This crate contains pure domain logic with no infrastructure dependencies.

pub mod account;
pub mod activation;
pub mod constants;
pub mod error;

pub use account::{default_roles, join_roles, parse_roles, Account, AccountRole, Registration};
pub use activation::{generate_activation_code, ActivationMail};
pub use constants::*;
pub use error::{DomainError, DomainResult};
