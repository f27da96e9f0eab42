// SPDX-FileCopyrightText: 2026 RevShare Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! SMTP mail delivery for the RevShare booking service.
//!
//! [`SmtpMailer`] implements the [`Mailer`] trait over lettre's async
//! SMTP transport (rustls). One attempt per send; callers log failures
//! and continue.

pub mod templates;

use async_trait::async_trait;
use lettre::message::header::ContentType;
use lettre::message::{Attachment, Mailbox, MultiPart, SinglePart};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use tracing::{debug, info};

use revshare_config::model::EmailConfig;
use revshare_core::types::OutgoingEmail;
use revshare_core::{Mailer, RevshareError};

pub use templates::EmailContent;

/// SMTP-backed [`Mailer`].
pub struct SmtpMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: Mailbox,
    /// Operator inbox for booking notifications.
    operator_email: String,
}

impl SmtpMailer {
    /// Creates a mailer from configuration.
    ///
    /// Requires `email.username` and `email.password`; the From address
    /// is `"{from_name}" <username>` and the operator inbox defaults to
    /// the username.
    pub fn new(config: &EmailConfig) -> Result<Self, RevshareError> {
        let Some(username) = config.username.clone() else {
            return Err(RevshareError::Config(
                "email.username is required for SMTP delivery".into(),
            ));
        };
        let Some(password) = config.password.clone() else {
            return Err(RevshareError::Config(
                "email.password is required for SMTP delivery".into(),
            ));
        };

        let transport = AsyncSmtpTransport::<Tokio1Executor>::relay(&config.smtp_host)
            .map_err(|e| RevshareError::Mail {
                message: format!("failed to build SMTP transport for {}: {e}", config.smtp_host),
                source: Some(Box::new(e)),
            })?
            .credentials(Credentials::new(username.clone(), password))
            .build();

        let from = format!("{} <{}>", config.from_name, username)
            .parse::<Mailbox>()
            .map_err(|e| RevshareError::Config(format!("invalid from address: {e}")))?;

        let operator_email = config.operator_email.clone().unwrap_or(username);

        info!(host = config.smtp_host, "SMTP mailer initialized");

        Ok(Self {
            transport,
            from,
            operator_email,
        })
    }

    /// The inbox that receives operator booking notifications.
    pub fn operator_email(&self) -> &str {
        &self.operator_email
    }
}

#[async_trait]
impl Mailer for SmtpMailer {
    async fn send(&self, email: OutgoingEmail) -> Result<(), RevshareError> {
        let to = email
            .to
            .parse::<Mailbox>()
            .map_err(|e| RevshareError::Mail {
                message: format!("invalid recipient address `{}`: {e}", email.to),
                source: None,
            })?;

        let builder = Message::builder()
            .from(self.from.clone())
            .to(to)
            .subject(&email.subject);

        let message = match email.attachment {
            Some(attachment) => {
                let content_type = ContentType::parse(&attachment.content_type).map_err(|e| {
                    RevshareError::Mail {
                        message: format!(
                            "invalid attachment content type `{}`: {e}",
                            attachment.content_type
                        ),
                        source: None,
                    }
                })?;
                builder
                    .multipart(
                        MultiPart::mixed()
                            .singlepart(SinglePart::html(email.html))
                            .singlepart(
                                Attachment::new(attachment.filename)
                                    .body(attachment.body.into_bytes(), content_type),
                            ),
                    )
                    .map_err(|e| RevshareError::Mail {
                        message: format!("failed to build multipart message: {e}"),
                        source: Some(Box::new(e)),
                    })?
            }
            None => builder
                .header(ContentType::TEXT_HTML)
                .body(email.html)
                .map_err(|e| RevshareError::Mail {
                    message: format!("failed to build message: {e}"),
                    source: Some(Box::new(e)),
                })?,
        };

        self.transport
            .send(message)
            .await
            .map_err(|e| RevshareError::Mail {
                message: format!("SMTP send failed: {e}"),
                source: Some(Box::new(e)),
            })?;

        debug!(to = %email.to, subject = %email.subject, "email sent");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_config() -> EmailConfig {
        EmailConfig {
            smtp_host: "smtp.example.com".into(),
            username: Some("bookings@example.com".into()),
            password: Some("app-password".into()),
            from_name: "RevShare".into(),
            operator_email: None,
        }
    }

    #[test]
    fn mailer_requires_username() {
        let mut config = full_config();
        config.username = None;
        let err = SmtpMailer::new(&config).unwrap_err();
        assert!(err.to_string().contains("username"), "got: {err}");
    }

    #[test]
    fn mailer_requires_password() {
        let mut config = full_config();
        config.password = None;
        let err = SmtpMailer::new(&config).unwrap_err();
        assert!(err.to_string().contains("password"), "got: {err}");
    }

    #[test]
    fn operator_email_defaults_to_username() {
        let mailer = SmtpMailer::new(&full_config()).unwrap();
        assert_eq!(mailer.operator_email(), "bookings@example.com");
    }

    #[test]
    fn operator_email_override_is_used() {
        let mut config = full_config();
        config.operator_email = Some("ops@example.com".into());
        let mailer = SmtpMailer::new(&config).unwrap();
        assert_eq!(mailer.operator_email(), "ops@example.com");
    }

    #[tokio::test]
    async fn send_rejects_invalid_recipient() {
        let mailer = SmtpMailer::new(&full_config()).unwrap();
        let err = mailer
            .send(OutgoingEmail {
                to: "not an address".into(),
                subject: "s".into(),
                html: "<p>h</p>".into(),
                attachment: None,
            })
            .await
            .unwrap_err();
        assert!(err.to_string().contains("invalid recipient"), "got: {err}");
    }
}
