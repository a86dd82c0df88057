//! Tests for Gemini provider

use super::config::{GeminiConfig, DEFAULT_MODEL, MODELS};
use super::provider::GeminiProvider;
use super::schema::strip_unsupported_schema_fields;
use super::security::{sanitize_api_error, ApiFailure};
use crate::completion::StructuredRequest;
use crate::error::Error;
use crate::provider::LlmProvider;
use std::time::Duration;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const TEST_KEY: &str = "AIza1234567890abcdefghij";

fn provider_for(server: &MockServer) -> GeminiProvider {
    let config = GeminiConfig::new(TEST_KEY)
        .with_base_url(server.uri())
        .with_timeout(Duration::from_secs(5));
    GeminiProvider::new(config).unwrap()
}

fn sample_request() -> StructuredRequest {
    StructuredRequest::new(
        "Diagnose this laptop",
        serde_json::json!({
            "type": "OBJECT",
            "additionalProperties": false,
            "properties": { "diagnosisSummary": { "type": "STRING", "default": "n/a" } },
            "required": ["diagnosisSummary"]
        }),
    )
    .with_temperature(0.4)
}

fn model_path() -> String {
    format!("/models/{}:generateContent", DEFAULT_MODEL)
}

fn text_response(text: &str) -> serde_json::Value {
    serde_json::json!({
        "candidates": [{
            "content": { "role": "model", "parts": [{ "text": text }] },
            "finishReason": "STOP"
        }],
        "usageMetadata": {
            "promptTokenCount": 120,
            "candidatesTokenCount": 80,
            "totalTokenCount": 200
        }
    })
}

#[test]
fn test_config_builder() {
    let config = GeminiConfig::new("test-key")
        .with_model("gemini-2.5-pro")
        .with_max_tokens(4096)
        .with_timeout(Duration::from_secs(30));

    assert_eq!(config.api_key, "test-key");
    assert_eq!(config.default_model, "gemini-2.5-pro");
    assert_eq!(config.default_max_tokens, 4096);
    assert_eq!(config.timeout, Duration::from_secs(30));
}

#[test]
fn test_available_models() {
    assert!(MODELS.contains(&"gemini-3-flash-preview"));
    assert!(MODELS.contains(&"gemini-2.5-flash"));
}

#[test]
fn test_config_debug_masks_key() {
    let config = GeminiConfig::new(TEST_KEY);
    let debug_str = format!("{:?}", config);

    assert!(!debug_str.contains("1234567890"));
    assert!(debug_str.contains("AIza...ghij"));
}

#[test]
fn test_api_failure_classification() {
    assert_eq!(
        ApiFailure::classify("PERMISSION_DENIED", "Caller lacks access"),
        ApiFailure::Credentials
    );
    assert_eq!(
        ApiFailure::classify("INVALID_ARGUMENT", "API key not valid. Please pass a valid API key."),
        ApiFailure::Credentials
    );
    assert_eq!(
        ApiFailure::classify("INVALID_ARGUMENT", "Invalid JSON payload received."),
        ApiFailure::Other
    );
    assert_eq!(
        ApiFailure::classify("RESOURCE_EXHAUSTED", "Quota exceeded"),
        ApiFailure::Quota
    );
    assert_eq!(
        ApiFailure::classify("NOT_FOUND", "models/gemini-9 is not found"),
        ApiFailure::UnknownModel
    );
    assert_eq!(
        ApiFailure::classify("FAILED_PRECONDITION", "User location is not supported"),
        ApiFailure::Unavailable
    );
    assert_eq!(
        ApiFailure::classify("UNAVAILABLE", "The model is overloaded."),
        ApiFailure::Server
    );
}

#[test]
fn test_sanitize_api_error() {
    let sanitized = sanitize_api_error("PERMISSION_DENIED", "key AIzaXYZ has no access");
    assert!(!sanitized.contains("AIzaXYZ"));
    assert!(sanitized.contains("GEMINI_API_KEY"));

    assert_eq!(
        sanitize_api_error("INVALID_ARGUMENT", "Unknown name \"foo\""),
        "INVALID_ARGUMENT: Unknown name \"foo\""
    );

    let long = "x".repeat(400);
    assert!(sanitize_api_error("INVALID_ARGUMENT", &long).ends_with("...(truncated)"));
}

#[test]
fn test_strip_unsupported_schema_fields() {
    let mut schema = serde_json::json!({
        "type": "OBJECT",
        "additionalProperties": false,
        "properties": {
            "items": {
                "type": "ARRAY",
                "items": { "type": "STRING", "default": "x" }
            }
        }
    });
    strip_unsupported_schema_fields(&mut schema);

    assert!(schema.get("additionalProperties").is_none());
    assert!(schema["properties"]["items"]["items"].get("default").is_none());
    assert_eq!(schema["properties"]["items"]["items"]["type"], "STRING");
}

#[tokio::test]
async fn test_generate_structured_sends_schema_and_temperature() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(model_path()))
        .and(header("x-goog-api-key", TEST_KEY))
        .respond_with(ResponseTemplate::new(200).set_body_json(text_response("{\"ok\":true}")))
        .expect(1)
        .mount(&server)
        .await;

    let provider = provider_for(&server);
    let response = provider.generate_structured(sample_request()).await.unwrap();

    assert_eq!(response.content, "{\"ok\":true}");
    assert_eq!(response.model, DEFAULT_MODEL);
    assert_eq!(response.finish_reason.as_deref(), Some("STOP"));
    assert_eq!(response.usage.unwrap().total_tokens, 200);

    let received = server.received_requests().await.unwrap();
    let body: serde_json::Value = received[0].body_json().unwrap();
    let generation = &body["generationConfig"];
    assert_eq!(generation["responseMimeType"], "application/json");
    assert!((generation["temperature"].as_f64().unwrap() - 0.4).abs() < 1e-6);
    assert!(generation["responseSchema"].get("additionalProperties").is_none());
    assert_eq!(
        body["contents"][0]["parts"][0]["text"],
        "Diagnose this laptop"
    );
    // SECURITY: key must not leak into the URL
    assert!(received[0].url.query().is_none());
}

#[tokio::test]
async fn test_thought_parts_are_skipped() {
    let server = MockServer::start().await;
    let body = serde_json::json!({
        "candidates": [{
            "content": { "parts": [
                { "text": "thinking about fans...", "thought": true },
                { "text": "{\"a\":" },
                { "text": "1}" }
            ]},
            "finishReason": "STOP"
        }]
    });
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(&server)
        .await;

    let response = provider_for(&server)
        .generate_structured(sample_request())
        .await
        .unwrap();
    assert_eq!(response.content, "{\"a\":1}");
    assert!(response.usage.is_none());
}

#[tokio::test]
async fn test_empty_text_is_an_error() {
    let server = MockServer::start().await;
    let body = serde_json::json!({
        "candidates": [{ "finishReason": "SAFETY" }]
    });
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(&server)
        .await;

    let result = provider_for(&server)
        .generate_structured(sample_request())
        .await;
    assert!(matches!(result, Err(Error::EmptyResponse)));
}

#[tokio::test]
async fn test_no_candidates_is_invalid_response() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
        .mount(&server)
        .await;

    let result = provider_for(&server)
        .generate_structured(sample_request())
        .await;
    assert!(matches!(result, Err(Error::InvalidResponse(_))));
}

#[tokio::test]
async fn test_rate_limit_maps_to_rate_limit_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(429).set_body_json(serde_json::json!({
            "error": { "code": 429, "message": "quota", "status": "RESOURCE_EXHAUSTED" }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let result = provider_for(&server)
        .generate_structured(sample_request())
        .await;
    assert!(matches!(result, Err(Error::RateLimit)));
}

#[tokio::test]
async fn test_server_error_is_sanitized() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500).set_body_json(serde_json::json!({
            "error": { "code": 500, "message": "Internal error encountered.", "status": "INTERNAL" }
        })))
        .mount(&server)
        .await;

    let result = provider_for(&server)
        .generate_structured(sample_request())
        .await;
    match result {
        Err(Error::ServerError(msg)) => assert_eq!(msg, "API server error. Please try again later."),
        other => panic!("expected ServerError, got {:?}", other),
    }
}

#[tokio::test]
async fn test_auth_error_does_not_echo_details() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(400).set_body_json(serde_json::json!({
            "error": { "code": 400, "message": "API key not valid. AIza...", "status": "INVALID_ARGUMENT" }
        })))
        .mount(&server)
        .await;

    let result = provider_for(&server)
        .generate_structured(sample_request())
        .await;
    match result {
        Err(Error::Api(msg)) => assert!(msg.contains("authentication") && !msg.contains("AIza")),
        other => panic!("expected Api error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_transport_timeout_maps_to_timeout() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(text_response("{}"))
                .set_delay(Duration::from_secs(2)),
        )
        .mount(&server)
        .await;

    let config = GeminiConfig::new(TEST_KEY)
        .with_base_url(server.uri())
        .with_timeout(Duration::from_millis(100));
    let provider = GeminiProvider::new(config).unwrap();

    let result = provider.generate_structured(sample_request()).await;
    assert!(matches!(result, Err(Error::Timeout(100))));
}
