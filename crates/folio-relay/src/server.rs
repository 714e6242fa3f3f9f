//! Contact relay: request handling and the blocking HTTP listener

use crate::config::RelayConfig;
use crate::mailer::{MailMessage, Mailer};
use crate::providers::create_mailer;
use folio_core::{ContactSubmission, FolioError, Result};
use std::io::Read;
use std::net::SocketAddr;

const SEND_PATH: &str = "/send";
/// Largest request body the listener will buffer
pub const MAX_BODY_BYTES: u64 = 64 * 1024;
/// Recipient when the mock provider runs without a configured account
const FALLBACK_RECIPIENT: &str = "owner@localhost";

/// Transport-neutral view of an incoming request
#[derive(Debug, Clone, Default)]
pub struct RelayRequest {
    pub method: String,
    /// Request target; any query string is ignored for routing
    pub path: String,
    pub content_type: Option<String>,
    pub body: Vec<u8>,
}

impl RelayRequest {
    /// A JSON `POST /send`
    pub fn send_json(body: impl Into<Vec<u8>>) -> Self {
        Self {
            method: "POST".to_string(),
            path: SEND_PATH.to_string(),
            content_type: Some("application/json".to_string()),
            body: body.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelayResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl RelayResponse {
    fn text(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            headers: vec![(
                "Content-Type".to_string(),
                "text/plain; charset=utf-8".to_string(),
            )],
            body: body.into(),
        }
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// Turns contact submissions into mail sends
pub struct Relay {
    mailer: Box<dyn Mailer>,
    recipient: String,
    allow_origin: String,
}

impl Relay {
    pub fn new(mailer: Box<dyn Mailer>, recipient: impl Into<String>, allow_origin: impl Into<String>) -> Self {
        Self {
            mailer,
            recipient: recipient.into(),
            allow_origin: allow_origin.into(),
        }
    }

    /// Build the relay's mailer from config. The configured account receives
    /// every submission.
    pub fn from_config(config: &RelayConfig) -> Result<Self> {
        let mailer = create_mailer(config.provider(), config)?;
        let recipient = config
            .mail
            .account
            .clone()
            .unwrap_or_else(|| FALLBACK_RECIPIENT.to_string());
        Ok(Self::new(mailer, recipient, config.server.allow_origin.clone()))
    }

    pub fn recipient(&self) -> &str {
        &self.recipient
    }

    pub fn mailer_name(&self) -> &str {
        self.mailer.name()
    }

    pub fn handle(&self, request: &RelayRequest) -> RelayResponse {
        let path = request.path.split('?').next().unwrap_or_default();
        let mut response = match (request.method.as_str(), path) {
            ("OPTIONS", _) => self.preflight(),
            ("POST", SEND_PATH) => self.send(request),
            (method, path) => {
                log::warn!("no route for {} {}", method, path);
                RelayResponse::text(404, format!("Cannot {} {}", method, path))
            }
        };
        response.headers.push((
            "Access-Control-Allow-Origin".to_string(),
            self.allow_origin.clone(),
        ));
        response
    }

    fn preflight(&self) -> RelayResponse {
        RelayResponse {
            status: 204,
            headers: vec![
                (
                    "Access-Control-Allow-Methods".to_string(),
                    "GET,HEAD,PUT,PATCH,POST,DELETE".to_string(),
                ),
                (
                    "Access-Control-Allow-Headers".to_string(),
                    "Content-Type".to_string(),
                ),
            ],
            body: String::new(),
        }
    }

    fn send(&self, request: &RelayRequest) -> RelayResponse {
        let submission = match parse_submission(request.content_type.as_deref(), &request.body) {
            Ok(s) => s,
            Err(e) => {
                log::warn!("rejected submission: {}", e);
                return RelayResponse::text(400, e.to_string());
            }
        };

        let message = MailMessage::from_submission(&submission, &self.recipient);
        match self.mailer.send(&message) {
            Ok(receipt) => {
                log::info!(
                    "forwarded message from '{}' via {}",
                    submission.email,
                    receipt.provider
                );
                RelayResponse::text(200, format!("Message sent: {}", receipt.response))
            }
            Err(e) => {
                log::error!("mail send failed: {}", e);
                RelayResponse::text(500, e.to_string())
            }
        }
    }
}

/// Decode a submission from a JSON or form-encoded body
pub fn parse_submission(content_type: Option<&str>, body: &[u8]) -> Result<ContactSubmission> {
    let mime = content_type
        .and_then(|ct| ct.split(';').next())
        .map(|m| m.trim().to_ascii_lowercase())
        .unwrap_or_default();

    if mime == "application/x-www-form-urlencoded" {
        serde_urlencoded::from_bytes(body)
            .map_err(|e| FolioError::InvalidSubmission(format!("bad form body: {}", e)))
    } else {
        serde_json::from_slice(body)
            .map_err(|e| FolioError::InvalidSubmission(format!("bad JSON body: {}", e)))
    }
}

/// Read at most [`MAX_BODY_BYTES`]; `None` when the body runs past the cap
fn read_body<R: Read>(reader: R) -> std::io::Result<Option<Vec<u8>>> {
    let mut body = Vec::new();
    reader.take(MAX_BODY_BYTES + 1).read_to_end(&mut body)?;
    if body.len() as u64 > MAX_BODY_BYTES {
        return Ok(None);
    }
    Ok(Some(body))
}

/// Blocking HTTP listener that feeds requests to a [`Relay`] one at a time
pub struct RelayServer {
    server: tiny_http::Server,
    relay: Relay,
}

impl RelayServer {
    pub fn bind(addr: &str, relay: Relay) -> Result<Self> {
        let server = tiny_http::Server::http(addr)
            .map_err(|e| FolioError::Relay(format!("Failed to bind {}: {}", addr, e)))?;
        Ok(Self { server, relay })
    }

    /// The bound socket address (useful after binding port 0)
    pub fn local_addr(&self) -> Option<SocketAddr> {
        self.server.server_addr().to_ip()
    }

    pub fn relay(&self) -> &Relay {
        &self.relay
    }

    /// Serve until [`RelayServer::shutdown`] is called
    pub fn run(&self) {
        if let Some(addr) = self.local_addr() {
            log::info!(
                "relay listening on http://{} (provider: {})",
                addr,
                self.relay.mailer_name()
            );
        }
        for request in self.server.incoming_requests() {
            self.respond(request);
        }
        log::info!("relay stopped");
    }

    /// Unblock [`RelayServer::run`] from another thread
    pub fn shutdown(&self) {
        self.server.unblock();
    }

    fn respond(&self, mut request: tiny_http::Request) {
        let relay_response = match read_body(request.as_reader()) {
            Ok(Some(body)) => {
                let content_type = request
                    .headers()
                    .iter()
                    .find(|h| h.field.equiv("Content-Type"))
                    .map(|h| h.value.as_str().to_string());
                let relay_request = RelayRequest {
                    method: request.method().as_str().to_string(),
                    path: request.url().to_string(),
                    content_type,
                    body,
                };
                self.relay.handle(&relay_request)
            }
            Ok(None) => {
                log::warn!("request body exceeds {} bytes", MAX_BODY_BYTES);
                RelayResponse::text(413, "Request body too large")
            }
            Err(e) => {
                log::warn!("failed to read request body: {}", e);
                RelayResponse::text(400, format!("Failed to read body: {}", e))
            }
        };

        let mut response = tiny_http::Response::from_string(relay_response.body)
            .with_status_code(relay_response.status);
        for (name, value) in &relay_response.headers {
            if let Ok(header) = tiny_http::Header::from_bytes(name.as_bytes(), value.as_bytes()) {
                response.add_header(header);
            }
        }
        if let Err(e) = request.respond(response) {
            log::warn!("failed to write response: {}", e);
        }
    }
}
