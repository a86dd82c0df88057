//! DeviceRx LLM - LLM Provider Abstraction
//!
//! This crate provides the generative-model integration for SmartDevice Rx:
//! - Provider: the `LlmProvider` trait for schema-constrained generation
//! - Gemini: Google Gemini provider (structured JSON output)
//! - Mock: queued-response provider for tests and offline runs

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod completion;
pub mod error;
pub mod gemini;
pub mod mock;
pub mod provider;
pub mod util;

pub use completion::{StructuredRequest, StructuredResponse, TokenUsage, JSON_MIME_TYPE};
pub use error::{Error, Result};
pub use mock::MockProvider;
pub use provider::LlmProvider;

// Re-export provider types
pub use gemini::{GeminiConfig, GeminiProvider};
