//! Error types for Folio

use thiserror::Error;

/// The main error type for Folio operations
#[derive(Debug, Error)]
pub enum FolioError {
    #[error("Config error: {0}")]
    Config(String),

    #[error("Mail error: {0}")]
    Mail(String),

    #[error("Relay error: {0}")]
    Relay(String),

    #[error("Invalid submission: {0}")]
    InvalidSubmission(String),

    #[error("Render error: {0}")]
    Render(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(String),
}

/// Result type alias for Folio operations
pub type Result<T> = std::result::Result<T, FolioError>;

impl From<toml::de::Error> for FolioError {
    fn from(err: toml::de::Error) -> Self {
        FolioError::TomlParse(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mail_error_displays_detail() {
        let err = FolioError::Mail("connection refused".to_string());
        assert_eq!(err.to_string(), "Mail error: connection refused");
    }

    #[test]
    fn toml_error_converts() {
        let parsed: std::result::Result<toml::Value, _> = toml::from_str("port = ");
        let err: FolioError = parsed.unwrap_err().into();
        assert!(matches!(err, FolioError::TomlParse(_)));
    }
}
