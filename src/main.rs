//! SmartDevice Rx - guided device diagnosis
//!
//! CLI entry point for the diagnosis wizard.

#![forbid(unsafe_code)]

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod cli;
mod settings;

const DEFAULT_LOG_FILTER: &str = "devicerx=info,devicerx_core=info,devicerx_llm=info";

#[tokio::main]
async fn main() -> Result<()> {
    let _ = dotenvy::dotenv();

    let cli = cli::Cli::parse();

    let mut config = settings::load_config().context("Failed to load configuration")?;
    cli.apply_overrides(&mut config);

    // The TUI owns the terminal, so logs go to a file.
    let _log_guard = init_logging(&config.log_dir())?;

    info!("Starting SmartDevice Rx v{}", env!("CARGO_PKG_VERSION"));

    cli::run(cli, config).await
}

fn init_logging(log_dir: &std::path::Path) -> Result<WorkerGuard> {
    std::fs::create_dir_all(log_dir)
        .with_context(|| format!("Failed to create log directory {}", log_dir.display()))?;

    let appender = tracing_appender::rolling::daily(log_dir, "devicerx.log");
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(writer),
        )
        .init();

    Ok(guard)
}
