//! Domain-level constants.
//!
//! These constants define business rules shared by the service and its stores.

// =============================================================================
// Account Roles
// =============================================================================

/// Default role assigned to new accounts
pub const ROLE_USER: &str = "user";

/// Administrator role with elevated privileges
pub const ROLE_ADMIN: &str = "admin";

/// Separator used when a role set is flattened into a single column
pub const ROLE_SEPARATOR: &str = ",";

// =============================================================================
// Activation
// =============================================================================

/// Subject line of activation mails
pub const ACTIVATION_MAIL_SUBJECT: &str = "Activation code";

/// Default base URL activation links are built from
pub const DEFAULT_ACTIVATION_BASE_URL: &str = "http://localhost:8080/activate";
