//! LLM Provider trait definition
//!
//! This module defines the core trait that all LLM providers must implement.

use crate::completion::{StructuredRequest, StructuredResponse};
use crate::error::Result;

/// Trait for LLM providers
#[async_trait::async_trait]
pub trait LlmProvider: Send + Sync {
    /// Get the provider name
    fn name(&self) -> &str;

    /// Get available models
    fn available_models(&self) -> Vec<String>;

    /// Get the default model
    fn default_model(&self) -> &str;

    /// Generate a response constrained to the request's JSON schema.
    ///
    /// Implementations make exactly one upstream call; retry policy belongs to
    /// the caller.
    async fn generate_structured(&self, request: StructuredRequest) -> Result<StructuredResponse>;
}
