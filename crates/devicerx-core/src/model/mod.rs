//! Domain model
//!
//! Data shapes shared by the gateway, the wizard and the views. No behavior
//! beyond construction helpers and shape validation.

mod device;
mod diagnosis;
mod symptom;

pub use device::{DeviceSpecs, DeviceType, RamBucket, SpecField, MAX_AGE_YEARS};
pub use diagnosis::{
    DiagnosisResult, Priority, Severity, UpgradeRecommendation, FALLBACK_SUMMARY,
};
pub use symptom::{SymptomInput, SymptomTag, MIN_DESCRIPTION_CHARS};
