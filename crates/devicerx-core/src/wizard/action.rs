use super::Step;
use crate::diagnosis::DiagnosisOutcome;
use crate::model::{DeviceType, SpecField, SymptomTag};

/// A state change request. Views build these; the machine applies them.
#[derive(Debug, Clone, PartialEq)]
pub enum WizardAction {
    /// Gated move to the next step
    Advance,
    /// Move to the previous step
    Retreat,
    /// Unconditional move
    JumpTo(Step),
    /// Open the operator dashboard
    EnterAdmin,
    /// Leave the operator dashboard
    ExitAdmin,
    /// Start over
    Reset,
    /// Pick the device category
    SelectDeviceType(DeviceType),
    /// Flip a symptom tag
    ToggleSymptom(SymptomTag),
    /// Replace the symptom description
    SetSymptomText(String),
    /// Edit one spec field
    UpdateSpecs(SpecField),
    /// Set the device age (clamped)
    SetAgeYears(i64),
    /// Apply the outcome of a diagnosis request
    CompleteDiagnosis(DiagnosisOutcome),
}
