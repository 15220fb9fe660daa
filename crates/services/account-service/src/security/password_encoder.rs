//! Password encoder - one-way credential hashing.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

use common::{AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// One-way credential transform.
///
/// `encode` produces the only value ever stored as an account's password hash;
/// `matches` is for the authentication layer that verifies login attempts.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
pub trait PasswordEncoder: Send + Sync {
    /// Hash a plain text password
    fn encode(&self, raw: &str) -> AppResult<String>;

    /// Check a plain text password against a stored hash
    fn matches(&self, raw: &str, hash: &str) -> bool;
}

/// Argon2id encoder producing PHC strings with a random salt per hash.
#[derive(Debug, Clone, Copy, Default)]
pub struct Argon2PasswordEncoder;

impl Argon2PasswordEncoder {
    pub fn new() -> Self {
        Self
    }

    #[inline]
    fn argon2() -> Argon2<'static> {
        Argon2::default()
    }
}

impl PasswordEncoder for Argon2PasswordEncoder {
    fn encode(&self, raw: &str) -> AppResult<String> {
        let salt = SaltString::generate(&mut OsRng);
        let hash = Self::argon2()
            .hash_password(raw.as_bytes(), &salt)
            .map_err(|e| AppError::internal(format!("Password hash failed: {}", e)))?;
        Ok(hash.to_string())
    }

    fn matches(&self, raw: &str, hash: &str) -> bool {
        // A malformed stored hash never matches
        match PasswordHash::new(hash) {
            Ok(parsed) => Self::argon2()
                .verify_password(raw.as_bytes(), &parsed)
                .is_ok(),
            Err(e) => {
                tracing::warn!(error = %e, "Stored password hash is not a valid PHC string");
                false
            }
        }
    }
}
