//! Contact form payload shared by the page, the relay, and the CLI

use serde::{Deserialize, Serialize};
use std::fmt;

/// Where the page posts contact submissions
pub const DEFAULT_RELAY_ENDPOINT: &str = "http://localhost:3000/send";

/// A contact form submission. Absent fields deserialize as empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactSubmission {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub message: String,
}

impl ContactSubmission {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        subject: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            subject: subject.into(),
            message: message.into(),
        }
    }
}

/// What the visitor is told after submitting the form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    Sent,
    Failed,
}

impl SubmitOutcome {
    /// Map a relay HTTP status to an outcome. Any 2xx counts as sent.
    pub fn from_status(status: u16) -> Self {
        if (200..300).contains(&status) {
            SubmitOutcome::Sent
        } else {
            SubmitOutcome::Failed
        }
    }

    /// The alert text shown to the visitor
    pub fn message(&self) -> &'static str {
        match self {
            SubmitOutcome::Sent => "Message sent successfully!",
            SubmitOutcome::Failed => "Error sending message. Please try again.",
        }
    }

    /// Whether the form should be cleared
    pub fn resets_form(&self) -> bool {
        matches!(self, SubmitOutcome::Sent)
    }
}

impl fmt::Display for SubmitOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}
