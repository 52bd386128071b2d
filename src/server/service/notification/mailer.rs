//! Outgoing email delivery.

use async_trait::async_trait;
use lettre::{
    message::{Mailbox, MultiPart},
    transport::smtp::{
        authentication::Credentials,
        client::{Tls, TlsParameters},
    },
    Address, AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};

use crate::server::{config::SmtpConfig, error::mail::MailError};

/// A rendered email ready to send.
#[derive(Debug, Clone, PartialEq)]
pub struct OutgoingEmail {
    pub to_name: String,
    pub to_email: String,
    pub subject: String,
    /// Plain text alternative.
    pub text: String,
    /// HTML alternative.
    pub html: String,
}

#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, email: OutgoingEmail) -> Result<(), MailError>;
}

/// SMTP delivery through a pooled lettre transport.
pub struct SmtpMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: Mailbox,
}

impl SmtpMailer {
    /// Builds the transport from configuration.
    ///
    /// `secure` selects implicit TLS (usually port 465); otherwise STARTTLS is used
    /// when the server offers it.
    ///
    /// # Returns
    /// - `Ok(SmtpMailer)` - Transport ready; no connection is opened yet
    /// - `Err(MailError::Address)` - `SMTP_FROM` is not a valid mailbox
    /// - `Err(MailError::Transport)` - TLS parameters could not be built for the host
    pub fn from_config(config: &SmtpConfig) -> Result<Self, MailError> {
        let from = config.from.parse::<Mailbox>()?;

        let mut builder = if config.secure {
            AsyncSmtpTransport::<Tokio1Executor>::relay(&config.host)?
        } else {
            AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(&config.host).tls(
                Tls::Opportunistic(TlsParameters::new(config.host.clone())?),
            )
        }
        .port(config.port);

        if let (Some(username), Some(password)) = (&config.username, &config.password) {
            builder = builder.credentials(Credentials::new(username.clone(), password.clone()));
        }

        Ok(Self {
            transport: builder.build(),
            from,
        })
    }
}

#[async_trait]
impl Mailer for SmtpMailer {
    async fn send(&self, email: OutgoingEmail) -> Result<(), MailError> {
        let to = Mailbox::new(Some(email.to_name), email.to_email.parse::<Address>()?);

        let message = Message::builder()
            .from(self.from.clone())
            .to(to)
            .subject(email.subject)
            .multipart(MultiPart::alternative_plain_html(email.text, email.html))?;

        self.transport.send(message).await?;

        Ok(())
    }
}
