//! Mail sender abstraction and a development implementation that logs
//! messages instead of delivering them.

use async_trait::async_trait;
use serde::Serialize;

use common::{AppResult, MailConfig};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Outbound mail collaborator.
///
/// Delivery failures are returned as errors; callers do not retry.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait MailSender: Send + Sync {
    /// Send a plain text message to a single recipient
    async fn send(&self, to: &str, subject: &str, body: &str) -> AppResult<()>;
}

/// Mail payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutgoingMail {
    /// Recipient email address
    pub to: String,
    /// Sender address
    pub from: String,
    /// Email subject line
    pub subject: String,
    /// Email body content (plain text)
    pub body: String,
}

impl OutgoingMail {
    pub fn new(
        from: impl Into<String>,
        to: impl Into<String>,
        subject: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        Self {
            to: to.into(),
            from: from.into(),
            subject: subject.into(),
            body: body.into(),
        }
    }
}

/// Development mailer: every message is written to the log and never leaves the process.
#[derive(Debug, Clone)]
pub struct LogMailSender {
    from: String,
}

impl LogMailSender {
    pub fn new(config: &MailConfig) -> Self {
        Self {
            from: config.from.clone(),
        }
    }
}

#[async_trait]
impl MailSender for LogMailSender {
    async fn send(&self, to: &str, subject: &str, body: &str) -> AppResult<()> {
        let mail = OutgoingMail::new(&self.from, to, subject, body);

        tracing::info!(
            to = %mail.to,
            from = %mail.from,
            subject = %mail.subject,
            "Processing email"
        );
        tracing::warn!("SMTP not configured - logging email instead of sending");
        tracing::info!(
            "=== EMAIL (not sent) ===\n\
             From: {}\n\
             To: {}\n\
             Subject: {}\n\
             Body:\n{}\n\
             ========================",
            mail.from,
            mail.to,
            mail.subject,
            mail.body
        );

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_log_mail_sender_always_succeeds() {
        let sender = LogMailSender::new(&MailConfig::default());

        assert_eq!(sender.from, "noreply@example.com");
        assert!(sender.send("john@mail", "Subject", "Body").await.is_ok());
    }

    #[test]
    fn test_outgoing_mail_serializes() {
        let mail = OutgoingMail::new("noreply@example.com", "john@mail", "Hi", "Body");
        let json = serde_json::to_value(&mail).unwrap();

        assert_eq!(json["to"], "john@mail");
        assert_eq!(json["from"], "noreply@example.com");
    }
}
