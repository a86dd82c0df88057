//! End-to-end wizard sessions against a mocked diagnosis model

use devicerx_core::report::CostComparison;
use devicerx_core::{
    DeviceType, DiagnosisGateway, DiagnosisResult, GatewayConfig, RamBucket, Severity, SpecField,
    Step, SymptomTag, WizardAction, WizardMachine, DIAGNOSIS_FAILED_MESSAGE,
};
use devicerx_llm::MockProvider;

use std::sync::Arc;
use std::time::Duration;

const OVERHEATING_ANSWER: &str = r#"{
    "diagnosisSummary": "Dust and dried thermal paste are limiting cooling.",
    "severity": "Critical",
    "potentialCauses": ["Clogged heatsink", "Dried thermal paste", "Aging fan bearing"],
    "estimatedFixPriceUSD": 50,
    "recommendedUpgrades": [{
        "component": "500GB SATA SSD",
        "reason": "Less heat and faster load times than the hard drive",
        "estimatedCostUSD": 80,
        "performanceBoostPercentage": 45,
        "priority": "High"
    }],
    "maintenanceTips": ["Blow out the vents", "Use a cooling pad"]
}"#;

/// Walk a Dell laptop through to the Specs step
fn dell_laptop_session() -> WizardMachine {
    let mut machine = WizardMachine::new();
    let actions = [
        WizardAction::Advance,
        WizardAction::SelectDeviceType(DeviceType::Laptop),
        WizardAction::Advance,
        WizardAction::ToggleSymptom(SymptomTag::Overheating),
        WizardAction::Advance,
        WizardAction::UpdateSpecs(SpecField::Brand("Dell".to_string())),
        WizardAction::UpdateSpecs(SpecField::Ram(Some(RamBucket::Gb8))),
        WizardAction::UpdateSpecs(SpecField::Processor("i5".to_string())),
        WizardAction::SetAgeYears(4),
    ];
    for action in actions {
        machine.dispatch(action).unwrap();
    }
    machine
}

#[tokio::test]
async fn laptop_overheating_success_totals_repair_path() {
    let mock = Arc::new(MockProvider::new());
    mock.add_response(OVERHEATING_ANSWER);
    let gateway = DiagnosisGateway::new(mock.clone(), GatewayConfig::default());

    let mut machine = dell_laptop_session();
    machine.submit_diagnosis(&gateway).await.unwrap();

    let state = machine.state();
    assert_eq!(state.current_step, Step::Results);
    assert!(state.last_error.is_none());
    let diagnosis = state.diagnosis.as_ref().unwrap();
    assert_eq!(diagnosis.severity, Severity::Critical);

    let prompt = mock.last_request().unwrap().prompt;
    assert!(prompt.contains("Brand/Model: Dell "));
    assert!(prompt.contains("CPU: i5, RAM: 8GB"));
    assert!(prompt.contains("Age: 4 years"));
    assert!(prompt.contains("Symptom Tags: Overheating"));

    machine.advance().unwrap();
    machine.advance().unwrap();
    assert_eq!(machine.current_step(), Step::Summary);

    let costs = CostComparison::from_result(machine.state().diagnosis.as_ref().unwrap());
    assert_eq!(costs.repair_total_usd(), 130.0);
    assert!(!costs.favors_replacement());
}

#[tokio::test]
async fn malformed_answer_shows_fallback_with_banner() {
    let mock = Arc::new(MockProvider::new());
    mock.add_response("I'm sorry, I can't help with that.");
    let gateway = DiagnosisGateway::new(mock, GatewayConfig::default());

    let mut machine = dell_laptop_session();
    machine.submit_diagnosis(&gateway).await.unwrap();

    let state = machine.state();
    assert_eq!(state.current_step, Step::Results);
    assert_eq!(state.diagnosis, Some(DiagnosisResult::fallback()));
    assert_eq!(state.last_error.as_deref(), Some(DIAGNOSIS_FAILED_MESSAGE));
}

#[tokio::test(start_paused = true)]
async fn slow_model_times_out_into_fallback() {
    let mock = Arc::new(MockProvider::new().with_delay(Duration::from_secs(120)));
    mock.add_response(OVERHEATING_ANSWER);
    let gateway = DiagnosisGateway::new(mock, GatewayConfig::default());

    let mut machine = dell_laptop_session();
    machine.submit_diagnosis(&gateway).await.unwrap();

    assert_eq!(
        machine.state().diagnosis,
        Some(DiagnosisResult::fallback())
    );
    assert!(!machine.state().in_flight);
}

#[test]
fn start_over_after_results_allows_a_new_device() {
    let mut machine = dell_laptop_session();
    let gateway = DiagnosisGateway::unconfigured(GatewayConfig::default());
    tokio_test::block_on(machine.submit_diagnosis(&gateway)).unwrap();

    assert!(machine
        .dispatch(WizardAction::SelectDeviceType(DeviceType::Desktop))
        .is_err());

    machine.dispatch(WizardAction::Reset).unwrap();
    assert_eq!(machine.current_step(), Step::Landing);
    machine
        .dispatch(WizardAction::SelectDeviceType(DeviceType::Desktop))
        .unwrap();
}
