//! Service layer - account lifecycle use cases.

mod account_service;
mod principal;

pub use account_service::{AccountManager, AccountService};
pub use principal::PrincipalLoader;
