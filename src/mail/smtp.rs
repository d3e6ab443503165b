use async_trait::async_trait;
use lettre::message::header::ContentType;
use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};

use super::{MailTransport, OutgoingEmail, TransportFailure};
use crate::config::Config;

/// SMTP relay transport (Gmail by default, authenticated with an app password)
#[derive(Clone)]
pub struct SmtpTransport {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: Mailbox,
    host: String,
}

impl SmtpTransport {
    pub fn new(config: &Config) -> Result<Self, TransportFailure> {
        let from: Mailbox = config.mail_from.parse()?;

        let transport = AsyncSmtpTransport::<Tokio1Executor>::relay(&config.smtp_host)?
            .credentials(Credentials::new(
                config.smtp_username.clone(),
                config.smtp_password.clone(),
            ))
            .build();

        Ok(Self {
            transport,
            from,
            host: config.smtp_host.clone(),
        })
    }

    /// Build the lettre message for `email`. The recipient is parsed here, so a
    /// malformed address fails like any other delivery error.
    fn build_message(&self, email: &OutgoingEmail) -> Result<Message, TransportFailure> {
        let to: Mailbox = email.to.parse()?;

        let message = Message::builder()
            .from(self.from.clone())
            .to(to)
            .subject(email.subject.as_str())
            .header(ContentType::TEXT_PLAIN)
            .body(email.body.clone())?;

        Ok(message)
    }
}

#[async_trait]
impl MailTransport for SmtpTransport {
    async fn send(&self, email: &OutgoingEmail) -> Result<(), TransportFailure> {
        let message = self.build_message(email)?;
        let response = self.transport.send(message).await?;

        tracing::debug!(
            host = %self.host,
            code = %response.code(),
            "Relay accepted message"
        );

        Ok(())
    }

    fn name(&self) -> &str {
        &self.host
    }
}
