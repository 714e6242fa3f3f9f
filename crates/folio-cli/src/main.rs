//! Folio CLI - run the contact relay, render the hero effect, submit the form

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{relay, render, send};
use folio_core::DEFAULT_RELAY_ENDPOINT;

#[derive(Parser)]
#[command(name = "folio")]
#[command(about = "Portfolio hero animation and contact relay", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the contact form mail relay
    Relay {
        /// Interface to listen on
        #[arg(long)]
        host: Option<String>,

        /// Port to listen on (overrides PORT and config files)
        #[arg(long)]
        port: Option<u16>,

        /// Mail provider (http or mock)
        #[arg(long)]
        provider: Option<String>,

        /// Read settings from this file instead of the layered lookup
        #[arg(long)]
        config: Option<String>,
    },

    /// Render the particle web to a PNG image (headless)
    Render {
        /// Output image path
        #[arg(short, long, default_value = "hero.png")]
        output: String,

        /// Image width in pixels
        #[arg(long, default_value = "1280")]
        width: u32,

        /// Image height in pixels
        #[arg(long, default_value = "720")]
        height: u32,

        /// Frames to simulate before capturing
        #[arg(long, default_value = "120")]
        frames: u64,

        /// RNG seed for a reproducible image
        #[arg(long)]
        seed: Option<u32>,

        /// Hold the pointer at this surface position (comma-separated x,y)
        #[arg(long, value_parser = parse_vec2)]
        pointer: Option<[f64; 2]>,

        /// Field settings TOML file
        #[arg(long)]
        config: Option<String>,

        /// Opaque background colour (comma-separated r,g,b)
        #[arg(long, value_parser = parse_rgb)]
        background: Option<[u8; 3]>,
    },

    /// Submit a contact form message to a relay
    Send {
        #[arg(long)]
        name: String,

        #[arg(long)]
        email: String,

        #[arg(long, default_value = "")]
        subject: String,

        #[arg(long)]
        message: String,

        /// Relay endpoint URL
        #[arg(long, default_value = DEFAULT_RELAY_ENDPOINT)]
        endpoint: String,
    },
}

fn parse_vec2(s: &str) -> Result<[f64; 2], String> {
    let parts: Vec<&str> = s.split(',').collect();
    if parts.len() != 2 {
        return Err(format!("expected 2 comma-separated values, got {}", parts.len()));
    }
    let x: f64 = parts[0].trim().parse().map_err(|e| format!("invalid x: {}", e))?;
    let y: f64 = parts[1].trim().parse().map_err(|e| format!("invalid y: {}", e))?;
    Ok([x, y])
}

fn parse_rgb(s: &str) -> Result<[u8; 3], String> {
    let parts: Vec<&str> = s.split(',').collect();
    if parts.len() != 3 {
        return Err(format!("expected 3 comma-separated values, got {}", parts.len()));
    }
    let mut rgb = [0u8; 3];
    for (channel, (part, name)) in rgb.iter_mut().zip(parts.iter().zip(["r", "g", "b"])) {
        *channel = part
            .trim()
            .parse()
            .map_err(|e| format!("invalid {}: {}", name, e))?;
    }
    Ok(rgb)
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Relay {
            host,
            port,
            provider,
            config,
        } => relay::run(relay::RelayArgs {
            host,
            port,
            provider,
            config,
        }),
        Commands::Render {
            output,
            width,
            height,
            frames,
            seed,
            pointer,
            config,
            background,
        } => render::run(render::RenderArgs {
            output,
            width,
            height,
            frames,
            seed,
            pointer,
            config,
            background,
        }),
        Commands::Send {
            name,
            email,
            subject,
            message,
            endpoint,
        } => send::run(&endpoint, name, email, subject, message),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_vec2() {
        assert_eq!(parse_vec2("400, 300").unwrap(), [400.0, 300.0]);
        assert!(parse_vec2("1,2,3").is_err());
        assert!(parse_vec2("a,2").is_err());
    }

    #[test]
    fn parses_rgb() {
        assert_eq!(parse_rgb("10,25,47").unwrap(), [10, 25, 47]);
        assert!(parse_rgb("10,25").is_err());
        assert!(parse_rgb("10,25,300").unwrap_err().contains("invalid b"));
    }

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn render_defaults() {
        let cli = Cli::try_parse_from(["folio", "render"]).unwrap();
        match cli.command {
            Commands::Render {
                output,
                width,
                height,
                frames,
                seed,
                ..
            } => {
                assert_eq!(output, "hero.png");
                assert_eq!((width, height, frames), (1280, 720, 120));
                assert_eq!(seed, None);
            }
            _ => panic!("expected render"),
        }
    }
}
