//! Outbound notification delivery.

mod mail_sender;

pub use mail_sender::{LogMailSender, MailSender, OutgoingMail};

#[cfg(any(test, feature = "test-utils"))]
pub use mail_sender::MockMailSender;
