//! Folio Relay - contact form to email bridge
//!
//! Accepts `{name, email, subject, message}` submissions over HTTP and
//! forwards each one as a single email through a pluggable mail provider.
//! Also provides the client side the page and CLI use to submit.

pub mod client;
pub mod config;
pub mod mailer;
pub mod providers;
pub mod server;

pub use client::submit;
pub use config::{MailConfig, RelayConfig, ServerConfig};
pub use mailer::{MailMessage, Mailer, SendReceipt};
pub use server::{Relay, RelayRequest, RelayResponse, RelayServer};
