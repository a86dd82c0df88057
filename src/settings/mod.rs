//! Application configuration types
//!
//! Loaded once at startup by `loader::load_config`.

mod loader;

pub use loader::{load_config, DEFAULT_CONFIG};

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Base directory for logs and reports (default `~/.devicerx`)
    #[serde(default)]
    pub data_dir: Option<String>,
    /// Where exported reports go (default `<data_dir>/reports`)
    #[serde(default)]
    pub report_dir: Option<String>,
    pub llm: LlmConfig,
    pub diagnosis: DiagnosisConfig,
    #[serde(default)]
    pub tui: TuiConfig,
}

/// `[llm]` section
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmConfig {
    pub model: String,
    pub base_url: String,
    #[serde(default = "default_temperature")]
    pub temperature: f32,
}

fn default_temperature() -> f32 {
    devicerx_core::DIAGNOSIS_TEMPERATURE
}

/// `[diagnosis]` section
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiagnosisConfig {
    pub timeout_secs: u64,
}

/// `[tui]` section
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TuiConfig {
    pub tick_rate_ms: u64,
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self { tick_rate_ms: 200 }
    }
}

impl AppConfig {
    /// Resolved data directory
    pub fn data_dir(&self) -> PathBuf {
        self.data_dir
            .as_deref()
            .map(expand_home)
            .unwrap_or_else(default_data_dir)
    }

    /// Resolved log directory
    pub fn log_dir(&self) -> PathBuf {
        self.data_dir().join("logs")
    }

    /// Resolved report directory
    pub fn report_dir(&self) -> PathBuf {
        self.report_dir
            .as_deref()
            .map(expand_home)
            .unwrap_or_else(|| self.data_dir().join("reports"))
    }

    /// Diagnosis timeout
    pub fn diagnosis_timeout(&self) -> Duration {
        Duration::from_secs(self.diagnosis.timeout_secs)
    }

    /// TUI tick rate
    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tui.tick_rate_ms)
    }
}

/// `~/.devicerx`, or `./.devicerx` without a home directory
pub fn default_data_dir() -> PathBuf {
    dirs::home_dir()
        .map(|p| p.join(".devicerx"))
        .unwrap_or_else(|| PathBuf::from(".devicerx"))
}

fn expand_home(path: &str) -> PathBuf {
    match path.strip_prefix("~/") {
        Some(rest) => dirs::home_dir()
            .map(|home| home.join(rest))
            .unwrap_or_else(|| PathBuf::from(path)),
        None => PathBuf::from(path),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(toml: &str) -> AppConfig {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .add_source(config::File::from_str(toml, config::FileFormat::Toml))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap()
    }

    #[test]
    fn test_embedded_defaults() {
        let config = parse("");
        assert_eq!(config.llm.model, "gemini-3-flash-preview");
        assert_eq!(config.llm.temperature, 0.4);
        assert_eq!(config.diagnosis_timeout(), Duration::from_secs(45));
        assert_eq!(config.tick_rate(), Duration::from_millis(200));
        assert!(config.data_dir().ends_with(".devicerx"));
        assert!(config.report_dir().ends_with("reports"));
    }

    #[test]
    fn test_overrides_and_home_expansion() {
        let config = parse(
            r#"
            data_dir = "/tmp/devicerx-test"
            [diagnosis]
            timeout_secs = 5
            "#,
        );
        assert_eq!(config.data_dir(), PathBuf::from("/tmp/devicerx-test"));
        assert_eq!(config.log_dir(), PathBuf::from("/tmp/devicerx-test/logs"));
        assert_eq!(
            config.report_dir(),
            PathBuf::from("/tmp/devicerx-test/reports")
        );
        assert_eq!(config.diagnosis_timeout(), Duration::from_secs(5));

        if let Some(home) = dirs::home_dir() {
            assert_eq!(expand_home("~/reports"), home.join("reports"));
        }
        assert_eq!(expand_home("reports"), PathBuf::from("reports"));
    }
}
