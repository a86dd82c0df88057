//! Structured-output request and response types
//!
//! A structured request carries a single prompt plus the JSON schema the
//! model's answer must follow. The response is the raw JSON text; decoding it
//! into domain types is the caller's job.

use serde::{Deserialize, Serialize};

/// MIME type requested for schema-constrained answers
pub const JSON_MIME_TYPE: &str = "application/json";

/// Token usage information
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenUsage {
    /// Prompt tokens
    pub prompt_tokens: u32,
    /// Completion tokens
    pub completion_tokens: u32,
    /// Total tokens
    pub total_tokens: u32,
}

/// Schema-constrained generation request
#[derive(Debug, Clone, PartialEq)]
pub struct StructuredRequest {
    /// Model to use (empty = provider default)
    pub model: String,
    /// Natural-language instruction
    pub prompt: String,
    /// Response schema (OpenAPI subset, provider dialect)
    pub response_schema: serde_json::Value,
    /// Response MIME type
    pub response_mime_type: String,
    /// Temperature (0.0 - 2.0)
    pub temperature: Option<f32>,
    /// Maximum tokens to generate
    pub max_tokens: Option<u32>,
}

impl StructuredRequest {
    /// Create a request for JSON output following `response_schema`
    #[must_use]
    pub fn new(prompt: impl Into<String>, response_schema: serde_json::Value) -> Self {
        Self {
            model: String::new(),
            prompt: prompt.into(),
            response_schema,
            response_mime_type: JSON_MIME_TYPE.to_string(),
            temperature: None,
            max_tokens: None,
        }
    }

    /// Set the model
    #[must_use]
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Set temperature
    #[must_use]
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }

    /// Set max tokens
    #[must_use]
    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }
}

/// Structured generation response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StructuredResponse {
    /// Generated JSON text
    pub content: String,
    /// Token usage
    pub usage: Option<TokenUsage>,
    /// Finish reason
    pub finish_reason: Option<String>,
    /// Model used
    pub model: String,
}
