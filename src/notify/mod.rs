//! Email digest delivery over SMTP.
//!
//! Delivery is deliberately asymmetric to the fetch path: a missing mail
//! configuration is a quiet `Ok(false)`, but a transport failure during an
//! actual send propagates as a hard error.

use crate::config::MailConfig;
use crate::domain::FeeRecord;
use lettre::message::header::ContentType;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use thiserror::Error;
use tracing::info;

pub const DIGEST_SUBJECT: &str = "DeFi Daily Brief";

/// How many fee leaders make the digest.
const DIGEST_ROWS: usize = 5;

#[derive(Debug, Error)]
pub enum NotifyError {
    #[error("invalid mail address: {0}")]
    Address(#[from] lettre::address::AddressError),
    #[error("invalid message: {0}")]
    Message(#[from] lettre::error::Error),
    #[error("smtp transport error: {0}")]
    Transport(#[from] lettre::transport::smtp::Error),
}

/// Sends plain-text digests to the configured user (From = To).
#[derive(Debug, Clone)]
pub struct Mailer {
    config: Option<MailConfig>,
}

impl Mailer {
    pub fn new(config: Option<MailConfig>) -> Self {
        Self { config }
    }

    pub fn is_configured(&self) -> bool {
        self.config.is_some()
    }

    /// Send a plain-text message. Returns `Ok(false)` without opening a
    /// connection when mail is not configured.
    pub async fn send(&self, subject: &str, body: &str) -> Result<bool, NotifyError> {
        let Some(config) = &self.config else {
            return Ok(false);
        };

        let message = Message::builder()
            .from(config.user.parse()?)
            .to(config.user.parse()?)
            .subject(subject)
            .header(ContentType::TEXT_PLAIN)
            .body(body.to_string())?;

        let transport = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.host)?
            .port(config.port)
            .credentials(Credentials::new(
                config.user.clone(),
                config.password.clone(),
            ))
            .build();

        transport.send(message).await?;
        info!(subject, "digest email sent");
        Ok(true)
    }
}

/// Newline-joined top fee leaders, one `"{name} ({category}): {change}%"`
/// line each. Expects rows already sorted by 7d change descending.
pub fn digest_body(fees: &[FeeRecord]) -> String {
    fees.iter()
        .take(DIGEST_ROWS)
        .map(|row| format!("{} ({}): {:.2}%", row.name, row.category, row.change_7d))
        .collect::<Vec<_>>()
        .join("\n")
}
