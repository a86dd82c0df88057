use super::Step;
use crate::model::{DeviceSpecs, DeviceType, DiagnosisResult, SymptomInput};

use serde::{Deserialize, Serialize};

/// Completeness predicate result for a step
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Gate {
    /// The user may move on
    Open,
    /// Something is missing
    Blocked(&'static str),
    /// The step has no forward gate
    NotApplicable,
}

impl Gate {
    /// Whether the gate lets the user move on
    #[must_use]
    pub fn is_open(&self) -> bool {
        matches!(self, Gate::Open)
    }
}

/// The whole session state. `Default` is a fresh session.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WizardState {
    /// Step being shown
    pub current_step: Step,
    /// Selected category
    pub device_type: Option<DeviceType>,
    /// Symptom tags and description
    pub symptoms: SymptomInput,
    /// Device specifications
    pub specs: DeviceSpecs,
    /// Latest diagnosis
    pub diagnosis: Option<DiagnosisResult>,
    /// A diagnosis request is outstanding
    pub in_flight: bool,
    /// User-facing message of the last failed diagnosis
    pub last_error: Option<String>,
}

impl WizardState {
    /// Completeness predicate for `step`
    #[must_use]
    pub fn gate(&self, step: Step) -> Gate {
        match step {
            Step::Landing | Step::Specs => Gate::Open,
            Step::Category if self.device_type.is_none() => {
                Gate::Blocked("Select a device type first.")
            }
            Step::Category => Gate::Open,
            Step::Symptoms if !self.symptoms.is_complete() => {
                Gate::Blocked("Select a symptom or describe the problem.")
            }
            Step::Symptoms => Gate::Open,
            _ => Gate::NotApplicable,
        }
    }

    /// Whether the current step's gate is open
    #[must_use]
    pub fn can_advance(&self) -> bool {
        self.gate(self.current_step).is_open()
    }

    /// Whether `step` is completed relative to the current step
    #[must_use]
    pub fn is_completed(&self, step: Step) -> bool {
        self.current_step.is_completed_at(step)
    }
}
