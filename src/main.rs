use anyhow::Result;
use chat_relay::{config, server};
use tracing::info;
use tracing_subscriber::{EnvFilter, filter::LevelFilter};

/// Parses a bare log level, or a `RUST_LOG`-style directive list
fn parse_log_filter(level: &str) -> Result<EnvFilter> {
    let invalid = || {
        anyhow::anyhow!(
            "Invalid log level: '{}'. Valid levels: error, warn, info, debug, trace",
            level
        )
    };

    if !level.contains('=') && !level.contains(',') {
        level.parse::<LevelFilter>().map_err(|_| invalid())?;
    }
    EnvFilter::try_new(level).map_err(|_| invalid())
}

#[tokio::main]
async fn main() -> Result<()> {
    // A local .env is optional; real environment variables take precedence
    let dotenv_path = dotenvy::dotenv().ok();

    // Load configuration first (before logging setup)
    let config = match config::load().await {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    // Determine log level: environment variable overrides config
    let log_level = std::env::var("RUST_LOG").unwrap_or_else(|_| config.server.logs.level.clone());

    let filter = match parse_log_filter(&log_level) {
        Ok(filter) => filter,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .json()
        .init();

    info!("Starting chat relay with log level: {}", log_level);
    if let Some(path) = dotenv_path {
        info!("Loaded environment from {}", path.display());
    }
    info!("Configuration loaded successfully");

    server::run(config).await?;

    Ok(())
}
