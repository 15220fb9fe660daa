//! Unified error handling.
//!
//! Business negatives (taken username, unknown activation code) are not
//! errors; they are reported as `Ok(false)` by the service. Everything here is
//! either the authentication lookup miss or a collaborator failure.

use domain::DomainError;
use thiserror::Error;

/// Application error types.
#[derive(Error, Debug)]
pub enum AppError {
    // Authentication lookup
    #[error("Principal not found: {0}")]
    PrincipalNotFound(String),

    // External collaborator errors
    #[cfg(feature = "database")]
    #[error("Database error")]
    Database(#[from] sea_orm::DbErr),

    #[error("Mail delivery failed: {0}")]
    Mail(String),

    #[error("Store unavailable: {0}")]
    Store(String),

    // Internal
    #[error("Internal server error")]
    Internal(String),
}

impl AppError {
    /// Get error code for client
    pub fn code(&self) -> &'static str {
        match self {
            AppError::PrincipalNotFound(_) => "PRINCIPAL_NOT_FOUND",
            #[cfg(feature = "database")]
            AppError::Database(_) => "DATABASE_ERROR",
            AppError::Mail(_) => "MAIL_ERROR",
            AppError::Store(_) => "STORE_ERROR",
            AppError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Get user-facing message (hides internal details)
    pub fn user_message(&self) -> String {
        match self {
            // Same text for every unknown principal so usernames cannot be probed
            AppError::PrincipalNotFound(_) => "Invalid credentials".to_string(),

            // Hide details for internal errors
            #[cfg(feature = "database")]
            AppError::Database(e) => {
                tracing::error!("Database error: {:?}", e);
                "A database error occurred".to_string()
            }
            AppError::Mail(msg) => {
                tracing::error!("Mail error: {}", msg);
                "The notification could not be delivered".to_string()
            }
            AppError::Store(msg) => {
                tracing::error!("Store error: {}", msg);
                "A storage error occurred".to_string()
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                "An internal error occurred".to_string()
            }
        }
    }
}

// =============================================================================
// Domain Error Conversion
// =============================================================================

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::UnknownRole(role) => {
                AppError::Internal(format!("Unknown role in stored record: {}", role))
            }
        }
    }
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;

/// Extension trait for Option -> AppError conversion
pub trait OptionExt<T> {
    /// Turn a missing principal into [`AppError::PrincipalNotFound`]
    fn ok_or_principal_not_found(self, username: &str) -> AppResult<T>;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_principal_not_found(self, username: &str) -> AppResult<T> {
        self.ok_or_else(|| AppError::PrincipalNotFound(username.to_string()))
    }
}

/// Convenience constructors
impl AppError {
    pub fn internal(msg: impl Into<String>) -> Self {
        AppError::Internal(msg.into())
    }

    pub fn mail(msg: impl Into<String>) -> Self {
        AppError::Mail(msg.into())
    }

    pub fn store(msg: impl Into<String>) -> Self {
        AppError::Store(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_principal_maps_to_principal_not_found() {
        let err = None::<()>.ok_or_principal_not_found("Ross").unwrap_err();

        assert!(matches!(err, AppError::PrincipalNotFound(ref name) if name == "Ross"));
        assert_eq!(err.code(), "PRINCIPAL_NOT_FOUND");
    }

    #[test]
    fn test_principal_not_found_message_hides_username() {
        let err = AppError::PrincipalNotFound("Ross".into());
        assert!(!err.user_message().contains("Ross"));
    }

    #[test]
    fn test_collaborator_error_codes() {
        assert_eq!(AppError::mail("smtp down").code(), "MAIL_ERROR");
        assert_eq!(AppError::store("timeout").code(), "STORE_ERROR");
        assert_eq!(AppError::internal("hash failed").code(), "INTERNAL_ERROR");
    }

    #[test]
    fn test_internal_message_is_hidden() {
        let err = AppError::internal("secret detail");
        assert_eq!(err.user_message(), "An internal error occurred");
    }

    #[test]
    fn test_domain_error_conversion() {
        let err: AppError = DomainError::UnknownRole("root".into()).into();
        assert!(matches!(err, AppError::Internal(_)));
    }
}
