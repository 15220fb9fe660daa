//! Activation code generation and activation mail content.

use uuid::Uuid;

use crate::constants::ACTIVATION_MAIL_SUBJECT;

/// Generate a fresh activation code.
///
/// Codes are random (v4) UUIDs in their hyphenated textual form.
pub fn generate_activation_code() -> String {
    Uuid::new_v4().to_string()
}

/// Activation mail ready to hand to a mail sender.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivationMail {
    pub subject: String,
    pub body: String,
}

impl ActivationMail {
    /// Render the activation mail for `username` carrying `code`.
    ///
    /// The link is `{base_url}/{code}`; a trailing slash on `base_url` is ignored.
    pub fn render(username: &str, code: &str, base_url: &str) -> Self {
        let link = format!("{}/{}", base_url.trim_end_matches('/'), code);
        let body = format!(
            "Hello, {}!\n\n\
             Welcome. Please confirm your email address by visiting the link below:\n\
             {}\n\n\
             Your activation code: {}",
            username, link, code
        );

        Self {
            subject: ACTIVATION_MAIL_SUBJECT.to_string(),
            body,
        }
    }
}
