//! Submitting the contact form to a relay

use folio_core::{ContactSubmission, FolioError, Result, SubmitOutcome};
use std::time::Duration;

const SUBMIT_TIMEOUT_SECS: u64 = 30;

/// POST `submission` as JSON to `endpoint` and classify the reply.
///
/// Any HTTP status is an outcome. Only transport failures (refused
/// connection, timeout) come back as errors.
pub fn submit(endpoint: &str, submission: &ContactSubmission) -> Result<SubmitOutcome> {
    let config = ureq::Agent::config_builder()
        .timeout_global(Some(Duration::from_secs(SUBMIT_TIMEOUT_SECS)))
        .http_status_as_error(false)
        .build();
    let agent: ureq::Agent = config.into();

    log::debug!("submitting contact form to {}", endpoint);
    let response = agent
        .post(endpoint)
        .send_json(submission)
        .map_err(|e| FolioError::Relay(format!("Could not reach {}: {}", endpoint, e)))?;

    let status = response.status().as_u16();
    let outcome = SubmitOutcome::from_status(status);
    match outcome {
        SubmitOutcome::Sent => log::info!("relay accepted submission ({})", status),
        SubmitOutcome::Failed => log::warn!("relay rejected submission ({})", status),
    }
    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unreachable_relay_is_error() {
        let submission = ContactSubmission::new("A", "a@b.com", "Hi", "Test");
        let err = submit("http://127.0.0.1:9/send", &submission).unwrap_err();
        assert!(matches!(err, FolioError::Relay(_)));
        assert!(err.to_string().contains("127.0.0.1:9"));
    }
}
