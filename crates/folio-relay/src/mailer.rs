//! Mail provider trait and message composition

use folio_core::{ContactSubmission, Result};
use serde::{Deserialize, Serialize};

/// An outbound email
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MailMessage {
    pub from: String,
    pub to: String,
    pub subject: String,
    pub text: String,
}

impl MailMessage {
    /// Build the mail for a contact submission.
    ///
    /// The submitter is the sender and `recipient` (the relay's own account)
    /// receives it. The plain-text body lists all four form fields.
    pub fn from_submission(submission: &ContactSubmission, recipient: &str) -> Self {
        Self {
            from: submission.email.clone(),
            to: recipient.to_string(),
            subject: submission.subject.clone(),
            text: format!(
                "Name: {}\nEmail: {}\nSubject: {}\nMessage: {}",
                submission.name, submission.email, submission.subject, submission.message
            ),
        }
    }
}

/// What the mail service said about an accepted message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SendReceipt {
    pub provider: String,
    /// Provider response line, echoed back to the submitter
    pub response: String,
}

/// Trait implemented by each mail provider (HTTP API, mock)
pub trait Mailer: Send + Sync {
    /// Provider name (e.g. "http", "mock")
    fn name(&self) -> &str;

    /// Send one message. No retries; a failure is final for this submission.
    fn send(&self, message: &MailMessage) -> Result<SendReceipt>;
}
