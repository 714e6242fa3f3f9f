//! Layered relay configuration
//!
//! Config is loaded with three layers of precedence (highest wins):
//! 1. Environment variables: `EMAIL`, `EMAIL_PASSWORD`, `PORT`,
//!    `FOLIO_MAIL_PROVIDER`, `FOLIO_MAIL_API_URL`
//! 2. Project-local: `.folio/relay.toml`
//! 3. Global: `~/.folio/relay.toml`

use folio_core::{FolioError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3000;
const DEFAULT_ALLOW_ORIGIN: &str = "*";
const DEFAULT_PROVIDER: &str = "http";

/// `[server]` table as written in a file; unset keys fall through to lower layers
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServerSection {
    #[serde(default)]
    pub host: Option<String>,
    #[serde(default)]
    pub port: Option<u16>,
    #[serde(default)]
    pub allow_origin: Option<String>,
}

/// Mail provider settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MailConfig {
    /// Provider name: "http" or "mock"
    #[serde(default)]
    pub provider: Option<String>,
    /// Account identity; also the recipient of every submission
    #[serde(default)]
    pub account: Option<String>,
    /// Account secret sent to the mail service
    #[serde(default)]
    pub secret: Option<String>,
    #[serde(default)]
    pub api_url: Option<String>,
}

/// Top-level config file structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RelayConfigFile {
    #[serde(default)]
    pub server: ServerSection,
    #[serde(default)]
    pub mail: MailConfig,
}

/// Resolved listener settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub allow_origin: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            allow_origin: DEFAULT_ALLOW_ORIGIN.to_string(),
        }
    }
}

/// Resolved configuration with environment variable overrides applied
#[derive(Debug, Clone, Default)]
pub struct RelayConfig {
    pub server: ServerConfig,
    pub mail: MailConfig,
}

impl RelayConfig {
    /// Load config with layered precedence: global < project < env vars
    pub fn load() -> Result<Self> {
        let mut paths = Vec::new();
        if let Some(global) = Self::global_config_path() {
            paths.push(global);
        }
        paths.push(PathBuf::from(".folio/relay.toml"));
        Self::load_layers(&paths, env_lookup)
    }

    /// Load config from a specific file path plus env overrides
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let file = Self::load_file(path)?;
        let mut config = RelayConfigFile::default();
        Self::merge_into(&mut config, file);
        Self::apply_env_overrides(&mut config, env_lookup);
        Ok(Self::resolve(config))
    }

    /// Merge every existing file in `paths` (later wins), then apply overrides
    /// from `lookup`. Missing files are skipped.
    pub fn load_layers<F>(paths: &[PathBuf], lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = RelayConfigFile::default();
        for path in paths {
            if path.exists() {
                let layer = Self::load_file(path)?;
                Self::merge_into(&mut config, layer);
            }
        }
        Self::apply_env_overrides(&mut config, lookup);
        Ok(Self::resolve(config))
    }

    /// Mail provider name, defaulting to "http"
    pub fn provider(&self) -> &str {
        self.mail.provider.as_deref().unwrap_or(DEFAULT_PROVIDER)
    }

    /// `host:port` for the listener
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    fn global_config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|h| h.join(".folio").join("relay.toml"))
    }

    fn load_file(path: &Path) -> Result<RelayConfigFile> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| {
            FolioError::Config(format!("Failed to parse config {}: {}", path.display(), e))
        })
    }

    fn merge_into(base: &mut RelayConfigFile, overlay: RelayConfigFile) {
        if overlay.server.host.is_some() {
            base.server.host = overlay.server.host;
        }
        if overlay.server.port.is_some() {
            base.server.port = overlay.server.port;
        }
        if overlay.server.allow_origin.is_some() {
            base.server.allow_origin = overlay.server.allow_origin;
        }

        if overlay.mail.provider.is_some() {
            base.mail.provider = overlay.mail.provider;
        }
        if overlay.mail.account.is_some() {
            base.mail.account = overlay.mail.account;
        }
        if overlay.mail.secret.is_some() {
            base.mail.secret = overlay.mail.secret;
        }
        if overlay.mail.api_url.is_some() {
            base.mail.api_url = overlay.mail.api_url;
        }
    }

    fn apply_env_overrides<F>(config: &mut RelayConfigFile, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(account) = lookup("EMAIL") {
            config.mail.account = Some(account);
        }
        if let Some(secret) = lookup("EMAIL_PASSWORD") {
            config.mail.secret = Some(secret);
        }
        if let Some(provider) = lookup("FOLIO_MAIL_PROVIDER") {
            config.mail.provider = Some(provider);
        }
        if let Some(url) = lookup("FOLIO_MAIL_API_URL") {
            config.mail.api_url = Some(url);
        }
        if let Some(port) = lookup("PORT") {
            match port.trim().parse::<u16>() {
                Ok(p) => config.server.port = Some(p),
                Err(_) => log::warn!("ignoring invalid PORT value '{}'", port),
            }
        }
    }

    fn resolve(file: RelayConfigFile) -> Self {
        let defaults = ServerConfig::default();
        Self {
            server: ServerConfig {
                host: file.server.host.unwrap_or(defaults.host),
                port: file.server.port.unwrap_or(defaults.port),
                allow_origin: file.server.allow_origin.unwrap_or(defaults.allow_origin),
            },
            mail: file.mail,
        }
    }
}

fn env_lookup(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn temp_config(content: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("folio_config_test_{}", uuid::Uuid::new_v4()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("relay.toml");
        std::fs::write(&path, content).unwrap();
        path
    }

    fn cleanup(path: &Path) {
        std::fs::remove_file(path).ok();
        std::fs::remove_dir(path.parent().unwrap()).ok();
    }

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn test_defaults() {
        let config = RelayConfig::load_layers(&[], no_env).unwrap();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.allow_origin, "*");
        assert_eq!(config.provider(), "http");
        assert_eq!(config.mail.account, None);
        assert_eq!(config.bind_addr(), "0.0.0.0:3000");
    }

    #[test]
    fn test_load_config_from_file() {
        let path = temp_config(
            r#"
[server]
host = "127.0.0.1"
port = 8080

[mail]
provider = "mock"
account = "me@example.com"
secret = "file-secret"
api_url = "https://mail.example.com/v1/send"
"#,
        );
        let config = RelayConfig::load_layers(&[path.clone()], no_env).unwrap();

        assert_eq!(config.bind_addr(), "127.0.0.1:8080");
        assert_eq!(config.provider(), "mock");
        assert_eq!(config.mail.account.as_deref(), Some("me@example.com"));
        assert_eq!(
            config.mail.api_url.as_deref(),
            Some("https://mail.example.com/v1/send")
        );

        cleanup(&path);
    }

    #[test]
    fn test_later_layer_wins_per_key() {
        let global = temp_config("[server]\nport = 4000\n\n[mail]\naccount = \"global@example.com\"\nsecret = \"g\"\n");
        let local = temp_config("[mail]\naccount = \"local@example.com\"\n");

        let config = RelayConfig::load_layers(&[global.clone(), local.clone()], no_env).unwrap();
        assert_eq!(config.server.port, 4000);
        assert_eq!(config.mail.account.as_deref(), Some("local@example.com"));
        assert_eq!(config.mail.secret.as_deref(), Some("g"));

        cleanup(&global);
        cleanup(&local);
    }

    #[test]
    fn test_env_var_override() {
        let path = temp_config("[mail]\naccount = \"file@example.com\"\nsecret = \"file\"\n");
        let env: HashMap<&str, &str> = [
            ("EMAIL", "env@example.com"),
            ("EMAIL_PASSWORD", "env-secret"),
            ("PORT", "5050"),
        ]
        .into_iter()
        .collect();

        let config = RelayConfig::load_layers(&[path.clone()], |k| {
            env.get(k).map(|v| v.to_string())
        })
        .unwrap();
        assert_eq!(config.mail.account.as_deref(), Some("env@example.com"));
        assert_eq!(config.mail.secret.as_deref(), Some("env-secret"));
        assert_eq!(config.server.port, 5050);

        cleanup(&path);
    }

    #[test]
    fn test_invalid_port_env_is_ignored() {
        let config = RelayConfig::load_layers(&[], |k| {
            (k == "PORT").then(|| "not-a-port".to_string())
        })
        .unwrap();
        assert_eq!(config.server.port, 3000);
    }

    #[test]
    fn test_missing_layers_are_skipped() {
        let missing = std::env::temp_dir().join("folio_config_test_missing/relay.toml");
        let config = RelayConfig::load_layers(&[missing], no_env).unwrap();
        assert_eq!(config.server.port, 3000);
    }

    #[test]
    fn test_malformed_file_is_config_error() {
        let path = temp_config("[server]\nport = \"eighty\"\n");
        let err = RelayConfig::load_layers(&[path.clone()], no_env).unwrap_err();
        assert!(matches!(err, FolioError::Config(_)));
        cleanup(&path);
    }
}
