//! Gemini provider implementation

use super::config::{GeminiConfig, MODELS};
use super::schema::strip_unsupported_schema_fields;
use super::security::sanitize_api_error;
use super::types::{GeminiContent, GeminiError, GeminiRequest, GeminiResponse, GenerationConfig};
use crate::completion::{StructuredRequest, StructuredResponse, TokenUsage};
use crate::error::{Error, Result};
use crate::provider::LlmProvider;
use reqwest::Client;
use tracing::{debug, instrument, warn};

/// Google Gemini provider
pub struct GeminiProvider {
    client: Client,
    config: GeminiConfig,
}

impl GeminiProvider {
    /// Create a new Gemini provider
    pub fn new(config: GeminiConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| Error::Network(e.to_string()))?;

        Ok(Self { client, config })
    }

    /// Create from environment variables
    pub fn from_env() -> Result<Self> {
        Self::new(GeminiConfig::from_env()?)
    }

    /// Provider configuration
    #[must_use]
    pub fn config(&self) -> &GeminiConfig {
        &self.config
    }

    fn timeout_ms(&self) -> u64 {
        u64::try_from(self.config.timeout.as_millis()).unwrap_or(u64::MAX)
    }

    /// Single attempt to send request to Gemini API
    async fn send_request(&self, model: &str, request: &GeminiRequest) -> Result<GeminiResponse> {
        // SECURITY: the key travels in a header, never in the URL or the logs
        debug!("Sending request to Gemini model: {}", model);

        let url = format!("{}/models/{}:generateContent", self.config.base_url, model);
        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.config.api_key)
            .header("content-type", "application/json")
            .json(request)
            .send()
            .await
            .map_err(|e| Error::from_reqwest(&e, self.timeout_ms()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| Error::from_reqwest(&e, self.timeout_ms()))?;

        if !status.is_success() {
            warn!(status = %status, "Gemini API error response");

            if status.as_u16() == 429 {
                return Err(Error::RateLimit);
            }

            let message = serde_json::from_str::<GeminiError>(&body)
                .map(|e| {
                    warn!(
                        error_status = %e.error.status,
                        error_code = e.error.code,
                        "Gemini API error detail"
                    );
                    sanitize_api_error(&e.error.status, &e.error.message)
                })
                .unwrap_or_else(|_| format!("HTTP {}", status));

            if status.is_server_error() {
                return Err(Error::ServerError(message));
            }
            return Err(Error::Api(message));
        }

        serde_json::from_str(&body).map_err(|e| {
            Error::InvalidResponse(format!(
                "{}: {}",
                e,
                crate::util::truncate_safe(&body, 200)
            ))
        })
    }
}

#[async_trait::async_trait]
impl LlmProvider for GeminiProvider {
    fn name(&self) -> &str {
        "gemini"
    }

    fn available_models(&self) -> Vec<String> {
        MODELS.iter().map(|s| (*s).to_string()).collect()
    }

    fn default_model(&self) -> &str {
        &self.config.default_model
    }

    #[instrument(skip(self, request), fields(model = %request.model))]
    async fn generate_structured(&self, request: StructuredRequest) -> Result<StructuredResponse> {
        let model = if request.model.is_empty() {
            self.config.default_model.clone()
        } else {
            request.model.clone()
        };

        let mut schema = request.response_schema;
        strip_unsupported_schema_fields(&mut schema);

        let gemini_request = GeminiRequest {
            contents: vec![GeminiContent::user_text(request.prompt)],
            generation_config: Some(GenerationConfig {
                temperature: request.temperature,
                max_output_tokens: request.max_tokens.or(Some(self.config.default_max_tokens)),
                response_mime_type: Some(request.response_mime_type),
                response_schema: Some(schema),
            }),
        };

        let response = self.send_request(&model, &gemini_request).await?;

        let candidate = response
            .candidates
            .first()
            .ok_or_else(|| Error::InvalidResponse("No candidates in response".to_string()))?;

        let content: String = candidate
            .content
            .iter()
            .flat_map(|c| c.parts.iter())
            .filter(|part| part.thought != Some(true))
            .filter_map(|part| part.text.as_deref())
            .collect();

        if content.trim().is_empty() {
            warn!(
                finish_reason = ?candidate.finish_reason,
                "Gemini returned no text"
            );
            return Err(Error::EmptyResponse);
        }

        let usage = response.usage_metadata.map(|u| TokenUsage {
            prompt_tokens: u.prompt_token_count,
            completion_tokens: u.candidates_token_count.unwrap_or(0),
            total_tokens: u.total_token_count,
        });

        Ok(StructuredResponse {
            content,
            usage,
            finish_reason: candidate.finish_reason.clone(),
            model,
        })
    }
}
