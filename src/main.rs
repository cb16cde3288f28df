//! Starred Restaurants - Binary entry point

use anyhow::{Context, Result};
use clap::Parser;
use starred_restaurants::{logging, ConfigOverrides, LogFormat, LogLevel, ServerConfig};
use std::path::PathBuf;

/// Starred Restaurants API server
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// TOML configuration file
    #[arg(short, long, env = "STARRED_CONFIG")]
    config: Option<PathBuf>,

    /// Bind address
    #[arg(short = 'b', long, env = "STARRED_HOST")]
    host: Option<String>,

    /// Port to listen on
    #[arg(short, long, env = "PORT")]
    port: Option<u16>,

    /// TOML file with restaurants and starred records
    #[arg(short, long, env = "STARRED_SEED_FILE")]
    seed: Option<PathBuf>,

    /// Log level
    #[arg(long, value_enum, env = "STARRED_LOG_LEVEL")]
    log_level: Option<LogLevel>,

    /// Log output format
    #[arg(long, value_enum, env = "STARRED_LOG_FORMAT")]
    log_format: Option<LogFormat>,
}

impl Cli {
    /// Flags and environment override the file, which overrides defaults
    fn into_config(self) -> Result<ServerConfig> {
        let mut config = match &self.config {
            Some(path) => ServerConfig::from_file(path)?,
            None => ServerConfig::default(),
        };

        config.apply_overrides(ConfigOverrides {
            host: self.host,
            port: self.port,
            seed_file: self.seed,
            log_level: self.log_level,
            log_format: self.log_format,
        });
        Ok(config)
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // A missing .env is fine
    dotenvy::dotenv().ok();

    let config = Cli::parse().into_config()?;
    logging::init_logging(&config.log)?;

    tracing::info!("Starred Restaurants v{}", env!("CARGO_PKG_VERSION"));

    starred_restaurants::start_server(config)
        .await
        .context("Server failed")
}
