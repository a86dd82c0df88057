//! CLI module for SmartDevice Rx
//!
//! Provides interactive commands:
//! - `wizard`: the diagnosis wizard TUI (default)
//! - `doctor`: configuration and credential checks

use clap::{Parser, Subcommand};
use devicerx_core::{DiagnosisGateway, GatewayConfig};
use devicerx_llm::{GeminiConfig, GeminiProvider, LlmProvider};
use std::sync::Arc;
use tracing::{info, warn};

use crate::settings::AppConfig;

pub mod doctor;
pub mod tui;

/// SmartDevice Rx CLI
#[derive(Parser, Debug)]
#[command(name = "devicerx")]
#[command(about = "Diagnose & upgrade your electronics from the terminal")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Gemini model to use (overrides config)
    #[arg(long, global = true)]
    pub model: Option<String>,

    /// Seconds to wait for a diagnosis before falling back (overrides config)
    #[arg(long, global = true)]
    pub timeout_secs: Option<u64>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Run the diagnosis wizard (default)
    Wizard,
    /// Check configuration and credentials
    Doctor,
}

impl Cli {
    /// Apply command-line overrides on top of loaded configuration
    pub fn apply_overrides(&self, config: &mut AppConfig) {
        if let Some(model) = &self.model {
            config.llm.model = model.clone();
        }
        if let Some(secs) = self.timeout_secs {
            config.diagnosis.timeout_secs = secs;
        }
    }
}

/// Run the CLI command
pub async fn run(cli: Cli, config: AppConfig) -> anyhow::Result<()> {
    match cli.command {
        Some(Commands::Doctor) => doctor::run(&config).await,
        Some(Commands::Wizard) | None => tui::run(config).await,
    }
}

/// Build the diagnosis gateway from configuration.
///
/// Without a Gemini key the gateway still works but always falls back.
pub fn build_gateway(config: &AppConfig) -> DiagnosisGateway {
    let gateway_config = GatewayConfig {
        model: Some(config.llm.model.clone()),
        temperature: config.llm.temperature,
        timeout: config.diagnosis_timeout(),
        max_tokens: None,
    };

    let provider = GeminiConfig::from_env().and_then(|gemini| {
        GeminiProvider::new(
            gemini
                .with_base_url(config.llm.base_url.clone())
                .with_model(config.llm.model.clone())
                .with_timeout(config.diagnosis_timeout()),
        )
    });

    match provider {
        Ok(provider) => {
            info!(provider = provider.name(), model = %config.llm.model, "Diagnosis provider ready");
            DiagnosisGateway::new(Arc::new(provider), gateway_config)
        }
        Err(e) => {
            warn!(error = %e, "No diagnosis provider; results will use the fallback");
            DiagnosisGateway::unconfigured(gateway_config)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_command_is_wizard() {
        let cli = Cli::parse_from(["devicerx"]);
        assert!(cli.command.is_none());

        let cli = Cli::parse_from(["devicerx", "doctor"]);
        assert_eq!(cli.command, Some(Commands::Doctor));
    }

    #[test]
    fn test_overrides() {
        let cli = Cli::parse_from([
            "devicerx",
            "wizard",
            "--model",
            "gemini-2.5-flash",
            "--timeout-secs",
            "10",
        ]);
        let mut config: AppConfig = ::config::Config::builder()
            .add_source(::config::File::from_str(
                crate::settings::DEFAULT_CONFIG,
                ::config::FileFormat::Toml,
            ))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        cli.apply_overrides(&mut config);

        assert_eq!(cli.command, Some(Commands::Wizard));
        assert_eq!(config.llm.model, "gemini-2.5-flash");
        assert_eq!(config.diagnosis.timeout_secs, 10);
    }
}
