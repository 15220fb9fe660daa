//! Domain-level errors.
//!
//! These errors represent domain rule violations. They are independent of
//! infrastructure concerns (database, mail transport).

use thiserror::Error;

/// Domain-specific errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Role tag outside the known set
    #[error("Unknown role: {0}")]
    UnknownRole(String),
}

/// Result type alias for domain operations
pub type DomainResult<T> = Result<T, DomainError>;
