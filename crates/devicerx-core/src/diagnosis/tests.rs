use super::*;
use crate::model::{DeviceSpecs, DeviceType, DiagnosisResult, RamBucket, Severity, SymptomTag};

use devicerx_llm::{MockProvider, JSON_MIME_TYPE};
use std::sync::Arc;
use std::time::Duration;

const GOOD_ANSWER: &str = r#"{
    "diagnosisSummary": "The cooling system is clogged.",
    "severity": "Moderate",
    "potentialCauses": ["Dust buildup", "Dried thermal paste", "Worn fan"],
    "estimatedFixPriceUSD": 50,
    "recommendedUpgrades": [{
        "component": "512GB NVMe SSD",
        "reason": "Faster storage",
        "estimatedCostUSD": 80,
        "performanceBoostPercentage": 35,
        "priority": "High"
    }],
    "maintenanceTips": ["Clean the vents"]
}"#;

fn laptop_request() -> DiagnosisRequest {
    DiagnosisRequest {
        device_type: DeviceType::Laptop,
        specs: DeviceSpecs {
            brand: "Dell".to_string(),
            model: "XPS 13".to_string(),
            ram: Some(RamBucket::Gb8),
            storage: "256GB SSD".to_string(),
            processor: "i5".to_string(),
            age_years: 4,
        },
        symptoms: "Gets very hot when gaming".to_string(),
        tags: vec![SymptomTag::Overheating, SymptomTag::NoisyFan],
    }
}

fn gateway(mock: Arc<MockProvider>) -> DiagnosisGateway {
    DiagnosisGateway::new(mock, GatewayConfig::default())
}

#[test]
fn test_prompt_embeds_input_verbatim() {
    let prompt = build_prompt(&laptop_request());

    assert!(prompt.starts_with("Act as a senior hardware technician."));
    assert!(prompt.contains("Device Type: Laptop"));
    assert!(prompt.contains("Brand/Model: Dell XPS 13"));
    assert!(prompt.contains("CPU: i5, RAM: 8GB, Storage: 256GB SSD, Age: 4 years."));
    assert!(prompt.contains("User Reported Symptoms: Gets very hot when gaming"));
    assert!(prompt.contains("Symptom Tags: Overheating, Noisy Fan"));
    assert!(prompt.contains("(RAM, SSD, Battery)"));
}

#[test]
fn test_prompt_with_empty_specs() {
    let request = DiagnosisRequest {
        device_type: DeviceType::Other,
        specs: DeviceSpecs::default(),
        symptoms: String::new(),
        tags: vec![SymptomTag::WifiIssues],
    };
    let prompt = build_prompt(&request);

    assert!(prompt.contains("Device Type: Other"));
    assert!(prompt.contains("RAM: , Storage: , Age: 1 years."));
    assert!(prompt.contains("Symptom Tags: Wifi Issues"));
}

#[test]
fn test_schema_requires_all_result_fields() {
    let schema = response_schema();
    let required: Vec<&str> = schema["required"]
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v.as_str().unwrap())
        .collect();

    assert_eq!(schema["type"], "OBJECT");
    assert_eq!(required.len(), 6);
    for field in [
        "diagnosisSummary",
        "severity",
        "potentialCauses",
        "estimatedFixPriceUSD",
        "recommendedUpgrades",
        "maintenanceTips",
    ] {
        assert!(required.contains(&field), "{} not required", field);
    }

    let severity = &schema["properties"]["severity"]["enum"];
    assert_eq!(severity, &serde_json::json!(["Critical", "Moderate", "Low"]));
    let priority = &schema["properties"]["recommendedUpgrades"]["items"]["properties"]["priority"]["enum"];
    assert_eq!(priority, &serde_json::json!(["High", "Medium", "Low"]));
}

#[test]
fn test_parse_response_tolerates_code_fence() {
    let fenced = format!("```json\n{}\n```", GOOD_ANSWER);
    let result = parse_response(&fenced).unwrap();
    assert_eq!(result.estimated_fix_price_usd, 50.0);

    let bare = format!("```\n{}\n```", GOOD_ANSWER);
    assert!(parse_response(&bare).is_ok());
}

#[test]
fn test_parse_response_rejects_negative_price() {
    let bad = GOOD_ANSWER.replace("\"estimatedFixPriceUSD\": 50", "\"estimatedFixPriceUSD\": -5");
    assert!(parse_response(&bad).is_err());
}

#[tokio::test]
async fn test_success_uses_model_answer() {
    let mock = Arc::new(MockProvider::new());
    mock.add_response(GOOD_ANSWER);

    let outcome = gateway(mock.clone()).diagnose(&laptop_request()).await;

    assert_eq!(outcome.source, OutcomeSource::Model);
    assert!(!outcome.is_fallback());
    assert_eq!(outcome.result.severity, Severity::Moderate);
    assert_eq!(outcome.result.total_upgrade_cost(), 80.0);
    assert_eq!(mock.call_count(), 1);
}

#[tokio::test]
async fn test_request_carries_schema_and_temperature() {
    let mock = Arc::new(MockProvider::new());
    mock.add_response(GOOD_ANSWER);

    let config = GatewayConfig::default().with_model("gemini-test");
    DiagnosisGateway::new(mock.clone(), config)
        .diagnose(&laptop_request())
        .await;

    let sent = mock.last_request().unwrap();
    assert_eq!(sent.temperature, Some(DIAGNOSIS_TEMPERATURE));
    assert_eq!(sent.response_mime_type, JSON_MIME_TYPE);
    assert_eq!(sent.response_schema, response_schema());
    assert_eq!(sent.model, "gemini-test");
    assert_eq!(sent.prompt, build_prompt(&laptop_request()));
}

#[tokio::test]
async fn test_malformed_json_yields_fallback() {
    let mock = Arc::new(MockProvider::new());
    mock.add_response("{\"diagnosisSummary\": ");

    let outcome = gateway(mock).diagnose(&laptop_request()).await;

    assert!(outcome.is_fallback());
    assert_eq!(outcome.result, DiagnosisResult::fallback());
}

#[tokio::test]
async fn test_missing_field_yields_fallback() {
    let mock = Arc::new(MockProvider::new());
    mock.add_response(
        r#"{"diagnosisSummary":"x","severity":"Low","potentialCauses":[],"recommendedUpgrades":[],"maintenanceTips":[]}"#,
    );

    let outcome = gateway(mock).diagnose(&laptop_request()).await;

    assert_eq!(outcome.result, DiagnosisResult::fallback());
}

#[tokio::test]
async fn test_transport_error_yields_fallback_without_retry() {
    let mock = Arc::new(MockProvider::new());
    mock.add_error(devicerx_llm::Error::Network("connection refused".to_string()));
    mock.add_response(GOOD_ANSWER);

    let outcome = gateway(mock.clone()).diagnose(&laptop_request()).await;

    assert_eq!(outcome.result, DiagnosisResult::fallback());
    match outcome.source {
        OutcomeSource::Fallback { reason } => assert!(reason.contains("connection refused")),
        OutcomeSource::Model => panic!("expected fallback"),
    }
    assert_eq!(mock.call_count(), 1);
}

#[tokio::test(start_paused = true)]
async fn test_timeout_yields_fallback() {
    let mock = Arc::new(MockProvider::new().with_delay(Duration::from_secs(60)));
    mock.add_response(GOOD_ANSWER);

    let config = GatewayConfig::default().with_timeout(Duration::from_secs(2));
    let outcome = DiagnosisGateway::new(mock, config)
        .diagnose(&laptop_request())
        .await;

    assert_eq!(outcome.result, DiagnosisResult::fallback());
    match outcome.source {
        OutcomeSource::Fallback { reason } => assert!(reason.contains("timeout after 2000ms")),
        OutcomeSource::Model => panic!("expected fallback"),
    }
}

#[tokio::test]
async fn test_unconfigured_gateway_falls_back() {
    let gateway = DiagnosisGateway::unconfigured(GatewayConfig::default());
    assert!(!gateway.is_configured());

    let outcome = gateway.diagnose(&laptop_request()).await;
    assert!(outcome.is_fallback());
    assert_eq!(outcome.result, DiagnosisResult::fallback());
}
