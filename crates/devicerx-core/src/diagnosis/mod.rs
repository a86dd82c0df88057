//! Diagnosis Request Gateway
//!
//! Turns the collected wizard input into one schema-constrained request to the
//! diagnosis model and always produces a well-formed `DiagnosisResult`:
//! - `prompt`: the natural-language instruction
//! - `schema`: the structured-output schema for `DiagnosisResult`
//! - `gateway`: the call itself, with timeout, parsing and fallback

mod gateway;
mod prompt;
mod schema;

#[cfg(test)]
mod tests;

pub use gateway::{
    parse_response, DiagnosisGateway, DiagnosisOutcome, GatewayConfig, OutcomeSource,
    DEFAULT_TIMEOUT, DIAGNOSIS_TEMPERATURE,
};
pub use prompt::build_prompt;
pub use schema::response_schema;

use crate::model::{DeviceSpecs, DeviceType, SymptomTag};

/// Snapshot of the wizard input sent to the gateway
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagnosisRequest {
    /// Device category
    pub device_type: DeviceType,
    /// Specifications, verbatim
    pub specs: DeviceSpecs,
    /// Free-text symptom description
    pub symptoms: String,
    /// Selected symptom tags, in selection order
    pub tags: Vec<SymptomTag>,
}
