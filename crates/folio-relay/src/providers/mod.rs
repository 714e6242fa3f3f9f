//! Mail provider registry
//!
//! Maps provider names to concrete implementations.

pub mod http;
pub mod mock;

use crate::config::RelayConfig;
use crate::mailer::Mailer;
use folio_core::{FolioError, Result};

/// Create a mailer by name with configuration
pub fn create_mailer(name: &str, config: &RelayConfig) -> Result<Box<dyn Mailer>> {
    match name {
        "mock" => Ok(Box::new(mock::MockMailer::new())),
        "http" => Ok(Box::new(http::HttpMailer::from_config(config)?)),
        _ => Err(FolioError::Config(format!(
            "Unknown mail provider '{}'. Available: http, mock",
            name
        ))),
    }
}
