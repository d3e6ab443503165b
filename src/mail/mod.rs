pub mod smtp;

use async_trait::async_trait;

pub use smtp::SmtpTransport;

/// A rendered plain-text email, ready to hand to a transport.
///
/// The sender identity is owned by the transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutgoingEmail {
    pub to: String,
    pub subject: String,
    pub body: String,
}

/// Any failure raised while trying to deliver an [`OutgoingEmail`].
///
/// Transient and permanent failures are not distinguished.
#[derive(Debug, thiserror::Error)]
pub enum TransportFailure {
    #[error("{0}")]
    Address(#[from] lettre::address::AddressError),

    #[error("{0}")]
    Message(#[from] lettre::error::Error),

    #[error("{0}")]
    Smtp(#[from] lettre::transport::smtp::Error),

    /// Failure reported by a transport that is not backed by lettre.
    #[error("{0}")]
    Other(String),
}

/// Outbound mail delivery
#[async_trait]
pub trait MailTransport: Send + Sync {
    /// Deliver one email. Resolves once the relay accepts or rejects it.
    async fn send(&self, email: &OutgoingEmail) -> Result<(), TransportFailure>;

    /// Short description for health output
    fn name(&self) -> &str;
}
