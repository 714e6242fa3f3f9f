//! HTTP mail API provider
//!
//! Posts each message as JSON to a transactional mail service, authenticated
//! with the account secret as a bearer token.

use crate::config::RelayConfig;
use crate::mailer::{MailMessage, Mailer, SendReceipt};
use folio_core::{FolioError, Result};
use std::time::Duration;

const DEFAULT_MAIL_API_URL: &str = "https://api.resend.com/emails";
const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Mail provider backed by a JSON-over-HTTP send endpoint
pub struct HttpMailer {
    account: String,
    secret: String,
    api_url: String,
}

impl HttpMailer {
    /// Create an HttpMailer from config
    pub fn from_config(config: &RelayConfig) -> Result<Self> {
        let account = config.mail.account.clone().ok_or_else(|| {
            FolioError::Config(
                "Mail account not configured. Set EMAIL or add [mail] account to .folio/relay.toml"
                    .to_string(),
            )
        })?;
        let secret = config.mail.secret.clone().ok_or_else(|| {
            FolioError::Config(
                "Mail secret not configured. Set EMAIL_PASSWORD or add [mail] secret to .folio/relay.toml"
                    .to_string(),
            )
        })?;
        let api_url = config
            .mail
            .api_url
            .as_deref()
            .unwrap_or(DEFAULT_MAIL_API_URL)
            .to_string();

        Ok(Self {
            account,
            secret,
            api_url,
        })
    }

    pub fn account(&self) -> &str {
        &self.account
    }

    /// The account sends; the visitor is the reply target. Mail APIs only
    /// accept senders on domains verified for the account.
    fn payload(&self, message: &MailMessage) -> serde_json::Value {
        serde_json::json!({
            "from": self.account,
            "to": [message.to],
            "reply_to": message.from,
            "subject": message.subject,
            "text": message.text,
        })
    }
}

fn build_agent() -> ureq::Agent {
    let config = ureq::Agent::config_builder()
        .timeout_global(Some(Duration::from_secs(REQUEST_TIMEOUT_SECS)))
        .build();
    config.into()
}

impl Mailer for HttpMailer {
    fn name(&self) -> &str {
        "http"
    }

    fn send(&self, message: &MailMessage) -> Result<SendReceipt> {
        let agent = build_agent();
        let mut response = agent
            .post(&self.api_url)
            .header("Authorization", &format!("Bearer {}", self.secret))
            .header("Content-Type", "application/json")
            .send_json(self.payload(message))
            .map_err(|e| FolioError::Mail(format!("Mail API request failed: {}", e)))?;

        let status = response.status().as_u16();
        // An unreadable body still means the service accepted the message
        let id = response
            .body_mut()
            .read_json::<serde_json::Value>()
            .ok()
            .and_then(|body| body.get("id").and_then(|v| v.as_str()).map(str::to_string));

        Ok(SendReceipt {
            provider: "http".to_string(),
            response: match id {
                Some(id) => format!("{} {}", status, id),
                None => status.to_string(),
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MailConfig;

    fn config(mail: MailConfig) -> RelayConfig {
        RelayConfig {
            mail,
            ..RelayConfig::default()
        }
    }

    #[test]
    fn requires_account_and_secret() {
        let missing_secret = config(MailConfig {
            account: Some("me@example.com".to_string()),
            ..MailConfig::default()
        });
        let err = HttpMailer::from_config(&missing_secret).err().unwrap();
        assert!(err.to_string().contains("EMAIL_PASSWORD"));

        let missing_account = config(MailConfig {
            secret: Some("s".to_string()),
            ..MailConfig::default()
        });
        let err = HttpMailer::from_config(&missing_account).err().unwrap();
        assert!(err.to_string().contains("EMAIL"));
    }

    #[test]
    fn default_api_url() {
        let mailer = HttpMailer::from_config(&config(MailConfig {
            account: Some("me@example.com".to_string()),
            secret: Some("s".to_string()),
            ..MailConfig::default()
        }))
        .unwrap();
        assert_eq!(mailer.api_url, DEFAULT_MAIL_API_URL);
        assert_eq!(mailer.account(), "me@example.com");
    }

    #[test]
    fn payload_sends_as_account_and_replies_to_visitor() {
        let mailer = HttpMailer::from_config(&config(MailConfig {
            account: Some("owner@mydomain.com".to_string()),
            secret: Some("s".to_string()),
            ..MailConfig::default()
        }))
        .unwrap();
        let message = MailMessage {
            from: "visitor@elsewhere.org".to_string(),
            to: "owner@mydomain.com".to_string(),
            subject: "Hi".to_string(),
            text: "Name: A".to_string(),
        };
        let payload = mailer.payload(&message);
        assert_eq!(payload["from"], "owner@mydomain.com");
        assert_eq!(payload["reply_to"], "visitor@elsewhere.org");
        assert_eq!(payload["to"][0], "owner@mydomain.com");
        assert_eq!(payload["subject"], "Hi");
        assert_eq!(payload["text"], "Name: A");
    }

    #[test]
    fn unreachable_service_is_mail_error() {
        let mailer = HttpMailer::from_config(&config(MailConfig {
            account: Some("me@example.com".to_string()),
            secret: Some("s".to_string()),
            api_url: Some("http://127.0.0.1:9/send".to_string()),
            ..MailConfig::default()
        }))
        .unwrap();
        let message = MailMessage {
            from: "a@b.com".to_string(),
            to: "me@example.com".to_string(),
            subject: "Hi".to_string(),
            text: "t".to_string(),
        };
        let err = mailer.send(&message).unwrap_err();
        assert!(matches!(err, FolioError::Mail(_)));
    }
}
