use std::sync::Arc;

use crate::config::Config;
use crate::invite::InviteDispatcher;
use crate::mail::MailTransport;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub dispatcher: InviteDispatcher,
}

impl AppState {
    pub fn new(config: Config, transport: Arc<dyn MailTransport>) -> Self {
        Self {
            config: Arc::new(config),
            dispatcher: InviteDispatcher::new(transport),
        }
    }
}
