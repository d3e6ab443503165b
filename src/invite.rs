//! Trainer invitation dispatch.
//!
//! Renders the fixed invitation message, hands it to the configured
//! [`MailTransport`] and folds the outcome into an [`InviteResult`].

use std::sync::Arc;

use crate::mail::{MailTransport, OutgoingEmail, TransportFailure};
use crate::models::{InviteRequest, InviteResult};

pub const INVITE_SUBJECT: &str = "Trainer Invitation";

const FALLBACK_ERROR: &str = "Mail transport failure";

/// Render the invitation for `request`. `name` and `email` are used verbatim.
pub fn render_invite(request: &InviteRequest) -> OutgoingEmail {
    OutgoingEmail {
        to: request.email.clone(),
        subject: INVITE_SUBJECT.to_string(),
        body: format!(
            "Hello {},\n\n\
             You have been invited as a trainer on our Fitness App!\n\
             Please sign up to get started.",
            request.name
        ),
    }
}

/// Sends trainer invitations through a shared transport
#[derive(Clone)]
pub struct InviteDispatcher {
    transport: Arc<dyn MailTransport>,
}

impl InviteDispatcher {
    pub fn new(transport: Arc<dyn MailTransport>) -> Self {
        Self { transport }
    }

    pub fn transport_name(&self) -> &str {
        self.transport.name()
    }

    /// Render and submit one invitation.
    pub async fn send(&self, request: &InviteRequest) -> Result<(), TransportFailure> {
        let email = render_invite(request);
        self.transport.send(&email).await
    }

    /// Invocation boundary: never fails, transport errors become a
    /// `success: false` result.
    pub async fn dispatch(&self, request: &InviteRequest) -> InviteResult {
        match self.send(request).await {
            Ok(()) => {
                tracing::info!(email = %request.email, "Trainer invite sent");
                InviteResult::sent()
            }
            Err(e) => {
                tracing::error!(error = %e, email = %request.email, "Error sending email");

                let message = e.to_string();
                if message.trim().is_empty() {
                    InviteResult::failed(FALLBACK_ERROR)
                } else {
                    InviteResult::failed(message)
                }
            }
        }
    }
}
