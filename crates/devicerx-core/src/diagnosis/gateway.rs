use super::{build_prompt, response_schema, DiagnosisRequest};
use crate::error::{Error, Result};
use crate::model::DiagnosisResult;

use devicerx_llm::{LlmProvider, StructuredRequest};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, instrument, warn};

/// Sampling temperature for diagnosis requests
pub const DIAGNOSIS_TEMPERATURE: f32 = 0.4;

/// Upper bound on one diagnosis call
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(45);

/// Gateway settings
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// Model override (`None` = provider default)
    pub model: Option<String>,
    /// Sampling temperature
    pub temperature: f32,
    /// Bounded wait for the model
    pub timeout: Duration,
    /// Output token limit (`None` = provider default)
    pub max_tokens: Option<u32>,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            model: None,
            temperature: DIAGNOSIS_TEMPERATURE,
            timeout: DEFAULT_TIMEOUT,
            max_tokens: None,
        }
    }
}

impl GatewayConfig {
    /// Set the model
    #[must_use]
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Set the timeout
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Where a diagnosis came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutcomeSource {
    /// Parsed from the model's answer
    Model,
    /// The fixed fallback, with the reason the model's answer was not used
    Fallback {
        /// Internal description of the failure (not shown to users)
        reason: String,
    },
}

/// Result of one gateway call. `result` is always well-formed.
#[derive(Debug, Clone, PartialEq)]
pub struct DiagnosisOutcome {
    /// Diagnosis to show
    pub result: DiagnosisResult,
    /// Provenance
    pub source: OutcomeSource,
}

impl DiagnosisOutcome {
    /// Outcome carrying a model answer
    #[must_use]
    pub fn from_model(result: DiagnosisResult) -> Self {
        Self {
            result,
            source: OutcomeSource::Model,
        }
    }

    /// Outcome carrying the fallback diagnosis
    #[must_use]
    pub fn fallback(reason: impl Into<String>) -> Self {
        Self {
            result: DiagnosisResult::fallback(),
            source: OutcomeSource::Fallback {
                reason: reason.into(),
            },
        }
    }

    /// Whether the fallback path was taken
    #[must_use]
    pub fn is_fallback(&self) -> bool {
        matches!(self.source, OutcomeSource::Fallback { .. })
    }
}

/// Sends diagnosis requests to the model and absorbs every failure.
///
/// Stateless between calls: no retries, no caching.
#[derive(Clone)]
pub struct DiagnosisGateway {
    provider: Option<Arc<dyn LlmProvider>>,
    config: GatewayConfig,
}

impl std::fmt::Debug for DiagnosisGateway {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DiagnosisGateway")
            .field("provider", &self.provider.as_ref().map(|p| p.name()))
            .field("config", &self.config)
            .finish()
    }
}

impl DiagnosisGateway {
    /// Create a gateway backed by `provider`
    #[must_use]
    pub fn new(provider: Arc<dyn LlmProvider>, config: GatewayConfig) -> Self {
        Self {
            provider: Some(provider),
            config,
        }
    }

    /// Create a gateway with no provider; every call yields the fallback.
    #[must_use]
    pub fn unconfigured(config: GatewayConfig) -> Self {
        Self {
            provider: None,
            config,
        }
    }

    /// Whether a provider is attached
    #[must_use]
    pub fn is_configured(&self) -> bool {
        self.provider.is_some()
    }

    /// Gateway settings
    #[must_use]
    pub fn config(&self) -> &GatewayConfig {
        &self.config
    }

    /// Diagnose a device. Never fails; errors become the fallback outcome.
    #[instrument(skip(self, request), fields(device = %request.device_type))]
    pub async fn diagnose(&self, request: &DiagnosisRequest) -> DiagnosisOutcome {
        match self.try_diagnose(request).await {
            Ok(result) => {
                info!(severity = %result.severity, "Diagnosis received");
                DiagnosisOutcome::from_model(result)
            }
            Err(e) => {
                warn!(error = %e, "Diagnosis failed, using fallback result");
                DiagnosisOutcome::fallback(e.to_string())
            }
        }
    }

    async fn try_diagnose(&self, request: &DiagnosisRequest) -> Result<DiagnosisResult> {
        let provider = self.provider.as_ref().ok_or_else(|| {
            Error::Llm(devicerx_llm::Error::NotConfigured(
                "no diagnosis provider (set GEMINI_API_KEY)".to_string(),
            ))
        })?;

        let mut llm_request = StructuredRequest::new(build_prompt(request), response_schema())
            .with_temperature(self.config.temperature);
        if let Some(model) = &self.config.model {
            llm_request = llm_request.with_model(model.clone());
        }
        if let Some(max_tokens) = self.config.max_tokens {
            llm_request = llm_request.with_max_tokens(max_tokens);
        }

        debug!(
            provider = provider.name(),
            prompt_chars = llm_request.prompt.chars().count(),
            "Sending diagnosis request"
        );

        let response = tokio::time::timeout(
            self.config.timeout,
            provider.generate_structured(llm_request),
        )
        .await
        .map_err(|_| {
            let ms = u64::try_from(self.config.timeout.as_millis()).unwrap_or(u64::MAX);
            Error::Llm(devicerx_llm::Error::Timeout(ms))
        })??;

        parse_response(&response.content)
    }
}

/// Decode and validate the model's JSON answer.
///
/// A surrounding markdown code fence is tolerated.
pub fn parse_response(content: &str) -> Result<DiagnosisResult> {
    let json = strip_code_fence(content);
    let result: DiagnosisResult = serde_json::from_str(json)
        .map_err(|e| Error::Llm(devicerx_llm::Error::InvalidResponse(e.to_string())))?;
    result
        .validate()
        .map_err(|e| Error::Llm(devicerx_llm::Error::InvalidResponse(e)))?;
    Ok(result)
}

fn strip_code_fence(content: &str) -> &str {
    let trimmed = content.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let rest = rest.strip_prefix("json").unwrap_or(rest);
    rest.strip_suffix("```").unwrap_or(rest).trim()
}
