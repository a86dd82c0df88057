//! Mock LLM Provider for testing
//!
//! Returns queued replies in order. Each call is counted and the last request
//! is kept so tests can inspect what the caller sent.

use crate::completion::{StructuredRequest, StructuredResponse};
use crate::error::{Error, Result};
use crate::provider::LlmProvider;

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// A mock LLM provider that returns queued replies.
pub struct MockProvider {
    replies: Arc<Mutex<VecDeque<Result<String>>>>,
    delay: Option<Duration>,
    calls: AtomicUsize,
    last_request: Mutex<Option<StructuredRequest>>,
}

impl Default for MockProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl MockProvider {
    /// Create a new mock provider.
    #[must_use]
    pub fn new() -> Self {
        Self {
            replies: Arc::new(Mutex::new(VecDeque::new())),
            delay: None,
            calls: AtomicUsize::new(0),
            last_request: Mutex::new(None),
        }
    }

    /// Sleep this long before answering (simulates a slow collaborator).
    #[must_use]
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Queue a successful reply carrying `content`.
    pub fn add_response(&self, content: impl Into<String>) {
        self.replies
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push_back(Ok(content.into()));
    }

    /// Queue a failure.
    pub fn add_error(&self, error: Error) {
        self.replies
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push_back(Err(error));
    }

    /// Number of `generate_structured` calls so far.
    #[must_use]
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// The most recent request received, if any.
    #[must_use]
    pub fn last_request(&self) -> Option<StructuredRequest> {
        self.last_request
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }
}

#[async_trait::async_trait]
impl LlmProvider for MockProvider {
    fn name(&self) -> &str {
        "mock"
    }

    fn available_models(&self) -> Vec<String> {
        vec!["mock-model".to_string()]
    }

    fn default_model(&self) -> &str {
        "mock-model"
    }

    async fn generate_structured(&self, request: StructuredRequest) -> Result<StructuredResponse> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let model = if request.model.is_empty() {
            "mock-model".to_string()
        } else {
            request.model.clone()
        };
        *self.last_request.lock().unwrap_or_else(|e| e.into_inner()) = Some(request);

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        let reply = self
            .replies
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .pop_front();

        match reply {
            Some(Ok(content)) => Ok(StructuredResponse {
                content,
                usage: None,
                finish_reason: Some("STOP".to_string()),
                model,
            }),
            Some(Err(e)) => Err(e),
            None => Err(Error::NotConfigured(
                "mock provider has no queued replies".to_string(),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_replies_in_order_and_counts_calls() {
        let mock = MockProvider::new();
        mock.add_response("{\"a\":1}");
        mock.add_error(Error::RateLimit);

        let request = StructuredRequest::new("first", serde_json::json!({}));
        let first = mock.generate_structured(request).await.unwrap();
        assert_eq!(first.content, "{\"a\":1}");
        assert_eq!(first.model, "mock-model");

        let second = mock
            .generate_structured(StructuredRequest::new("second", serde_json::json!({})))
            .await;
        assert!(matches!(second, Err(Error::RateLimit)));

        let third = mock
            .generate_structured(StructuredRequest::new("third", serde_json::json!({})))
            .await;
        assert!(matches!(third, Err(Error::NotConfigured(_))));

        assert_eq!(mock.call_count(), 3);
        assert_eq!(mock.last_request().unwrap().prompt, "third");
    }
}
