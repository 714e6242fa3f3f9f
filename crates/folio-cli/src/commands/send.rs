//! Submit the contact form from the command line

use anyhow::{bail, Context, Result};
use folio_core::{ContactSubmission, SubmitOutcome};

pub fn run(endpoint: &str, name: String, email: String, subject: String, message: String) -> Result<()> {
    let submission = ContactSubmission::new(name, email, subject, message);
    let outcome = folio_relay::submit(endpoint, &submission)
        .with_context(|| format!("Failed to submit to {}", endpoint))?;

    match outcome {
        SubmitOutcome::Sent => {
            println!("{}", outcome);
            Ok(())
        }
        SubmitOutcome::Failed => bail!("{}", outcome),
    }
}
