//! Run the contact relay in the foreground

use anyhow::{Context, Result};
use folio_relay::{Relay, RelayConfig, RelayServer};
use std::path::Path;

pub struct RelayArgs {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub provider: Option<String>,
    pub config: Option<String>,
}

/// Resolve config, then apply command-line overrides on top of every layer
pub fn resolve_config(args: &RelayArgs) -> Result<RelayConfig> {
    let mut config = match &args.config {
        Some(path) => RelayConfig::load_from_file(Path::new(path))
            .with_context(|| format!("Failed to load relay config from {}", path))?,
        None => RelayConfig::load().context("Failed to load relay config")?,
    };

    if let Some(host) = &args.host {
        config.server.host = host.clone();
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }
    if let Some(provider) = &args.provider {
        config.mail.provider = Some(provider.clone());
    }
    Ok(config)
}

pub fn run(args: RelayArgs) -> Result<()> {
    let config = resolve_config(&args)?;
    let relay = Relay::from_config(&config).context("Failed to set up mail provider")?;
    let addr = config.bind_addr();
    let server = RelayServer::bind(&addr, relay)?;

    println!("Contact relay listening on http://{}/send", addr);
    println!("Mail provider: {}", server.relay().mailer_name());
    println!("Forwarding to: {}", server.relay().recipient());
    server.run();
    Ok(())
}
