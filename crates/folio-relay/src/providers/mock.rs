//! Mock provider for testing and local runs
//!
//! Records messages in memory instead of sending them. Clones share the same
//! outbox, so a test can keep a handle after boxing the mailer into a relay.

use crate::mailer::{MailMessage, Mailer, SendReceipt};
use folio_core::{FolioError, Result};
use std::sync::{Arc, Mutex};

#[derive(Clone, Default)]
pub struct MockMailer {
    outbox: Arc<Mutex<Vec<MailMessage>>>,
    failure: Option<String>,
}

impl MockMailer {
    pub fn new() -> Self {
        Self::default()
    }

    /// A mailer whose every send fails with `reason`
    pub fn failing(reason: impl Into<String>) -> Self {
        Self {
            failure: Some(reason.into()),
            ..Self::default()
        }
    }

    /// Messages accepted so far
    pub fn sent(&self) -> Vec<MailMessage> {
        self.outbox
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }
}

impl Mailer for MockMailer {
    fn name(&self) -> &str {
        "mock"
    }

    fn send(&self, message: &MailMessage) -> Result<SendReceipt> {
        if let Some(reason) = &self.failure {
            return Err(FolioError::Mail(reason.clone()));
        }
        let mut outbox = self
            .outbox
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        outbox.push(message.clone());
        log::info!("[mock] captured mail from '{}': {}", message.from, message.subject);
        Ok(SendReceipt {
            provider: "mock".to_string(),
            response: format!("250 OK mock queued #{}", outbox.len()),
        })
    }
}
