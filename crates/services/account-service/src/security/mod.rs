//! Credential hashing.

mod password_encoder;

pub use password_encoder::{Argon2PasswordEncoder, PasswordEncoder};

#[cfg(any(test, feature = "test-utils"))]
pub use password_encoder::MockPasswordEncoder;
