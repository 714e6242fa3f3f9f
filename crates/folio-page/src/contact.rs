//! Contact form submission

use folio_core::{ContactSubmission, FolioError, Result, SubmitOutcome, DEFAULT_RELAY_ENDPOINT};

/// Named inputs the form carries
pub const FORM_FIELDS: [&str; 4] = ["name", "email", "subject", "message"];

/// Where and what the contact form submits
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactForm {
    endpoint: String,
}

impl Default for ContactForm {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_RELAY_ENDPOINT.to_string(),
        }
    }
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Collect the form's named fields. Absent inputs become empty strings.
    pub fn collect<F>(&self, field: F) -> ContactSubmission
    where
        F: Fn(&str) -> Option<String>,
    {
        let [name, email, subject, message] =
            FORM_FIELDS.map(|key| field(key).unwrap_or_default());
        ContactSubmission {
            name,
            email,
            subject,
            message,
        }
    }
}

/// JSON body posted to the relay
pub fn request_body(submission: &ContactSubmission) -> Result<String> {
    serde_json::to_string(submission)
        .map_err(|e| FolioError::InvalidSubmission(format!("could not encode form: {}", e)))
}

/// Outcome shown to the visitor for a completed request (its HTTP status)
/// or a request that never completed
pub fn form_outcome<E: std::fmt::Display>(response: std::result::Result<u16, E>) -> SubmitOutcome {
    match response {
        Ok(status) => SubmitOutcome::from_status(status),
        Err(e) => {
            log::error!("contact form request failed: {}", e);
            SubmitOutcome::Failed
        }
    }
}
