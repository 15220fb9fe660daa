//! Principal lookup used by an external authentication layer.

use async_trait::async_trait;

use common::AppResult;
use domain::Account;

/// Loads the principal an authentication layer verifies credentials against.
///
/// A missing principal is always `Err(AppError::PrincipalNotFound)`, never a
/// sentinel value, so a login attempt for an unknown user stops here.
#[async_trait]
pub trait PrincipalLoader: Send + Sync {
    /// Load the full account record (credential hash, roles, confirmation state)
    async fn load_by_username(&self, username: &str) -> AppResult<Account>;
}
