//! DeviceRx Core - Diagnosis Wizard Engine
//!
//! This crate provides the UI-independent core of SmartDevice Rx:
//! - Model: devices, specs, symptoms and the structured diagnosis result
//! - Diagnosis: prompt construction, response schema and the request gateway
//!   that always yields a usable result
//! - Wizard: the step sequence, completeness gates and the state machine that
//!   is the single mutator of the session state
//! - Report: cost comparison and plain-text report export

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod diagnosis;
pub mod error;
pub mod model;
pub mod report;
pub mod wizard;

pub use diagnosis::{
    build_prompt, response_schema, DiagnosisGateway, DiagnosisOutcome, DiagnosisRequest,
    GatewayConfig, OutcomeSource, DIAGNOSIS_TEMPERATURE,
};
pub use error::{Error, Result, UserFriendlyError};
pub use model::{
    DeviceSpecs, DeviceType, DiagnosisResult, Priority, RamBucket, Severity, SpecField,
    SymptomInput, SymptomTag, UpgradeRecommendation,
};
pub use report::{render_text, write_report, CostComparison, ReplacementEstimate};
pub use wizard::{
    Gate, Step, WizardAction, WizardMachine, WizardState, DIAGNOSIS_FAILED_MESSAGE,
};
