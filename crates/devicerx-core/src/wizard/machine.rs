use super::{Gate, Step, WizardAction, WizardState};
use crate::diagnosis::{DiagnosisGateway, DiagnosisOutcome, DiagnosisRequest};
use crate::error::{Error, Result};
use crate::model::{DeviceType, SpecField, SymptomTag};

use tracing::{debug, info};

/// User-facing message recorded when the fallback diagnosis was used
pub const DIAGNOSIS_FAILED_MESSAGE: &str = "Failed to diagnose device. Please try again.";

/// The single mutator of a `WizardState`
#[derive(Debug, Clone, Default)]
pub struct WizardMachine {
    state: WizardState,
}

impl WizardMachine {
    /// Start a fresh session
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Resume from an existing state
    #[must_use]
    pub fn with_state(state: WizardState) -> Self {
        Self { state }
    }

    /// Read-only view of the session
    #[must_use]
    pub fn state(&self) -> &WizardState {
        &self.state
    }

    /// Step being shown
    #[must_use]
    pub fn current_step(&self) -> Step {
        self.state.current_step
    }

    /// Apply an action
    pub fn dispatch(&mut self, action: WizardAction) -> Result<()> {
        debug!(?action, step = %self.state.current_step, "Dispatching wizard action");
        match action {
            WizardAction::Advance => self.advance(),
            WizardAction::Retreat => self.retreat(),
            WizardAction::JumpTo(step) => self.jump_to(step),
            WizardAction::EnterAdmin => self.enter_admin(),
            WizardAction::ExitAdmin => self.exit_admin(),
            WizardAction::Reset => self.reset(),
            WizardAction::SelectDeviceType(device) => self.select_device_type(device),
            WizardAction::ToggleSymptom(tag) => self.toggle_symptom_tag(tag),
            WizardAction::SetSymptomText(text) => self.set_symptom_text(text),
            WizardAction::UpdateSpecs(field) => self.update_specs(field),
            WizardAction::SetAgeYears(years) => self.set_age_years(years),
            WizardAction::CompleteDiagnosis(outcome) => self.complete_diagnosis(outcome),
        }
    }

    // ── navigation ──────────────────────────────────────────────────────

    /// Gated move to the next step
    pub fn advance(&mut self) -> Result<()> {
        let from = self.state.current_step;
        if matches!(
            from,
            Step::Specs | Step::Analyzing | Step::Summary | Step::Admin
        ) {
            return Err(Error::InvalidTransition {
                from,
                action: "advance",
            });
        }
        if let Gate::Blocked(reason) = self.state.gate(from) {
            return Err(Error::StepIncomplete {
                step: from,
                reason: reason.to_string(),
            });
        }
        self.advance_unchecked()
    }

    /// Raw `N -> N+1`, ignoring gates
    pub fn advance_unchecked(&mut self) -> Result<()> {
        self.shift(1)
    }

    /// Move to the previous step. Results has no way back into Analyzing.
    pub fn retreat(&mut self) -> Result<()> {
        let from = self.state.current_step;
        if matches!(
            from,
            Step::Landing | Step::Analyzing | Step::Results | Step::Admin
        ) {
            return Err(Error::InvalidTransition {
                from,
                action: "go back",
            });
        }
        self.retreat_unchecked()
    }

    /// Raw `N -> N-1`, ignoring gates
    pub fn retreat_unchecked(&mut self) -> Result<()> {
        self.shift(-1)
    }

    fn shift(&mut self, delta: i32) -> Result<()> {
        let from = self.state.current_step;
        let to = from
            .offset(delta)
            .map_err(|ordinal| Error::StepOutOfRange { from, ordinal })?;
        self.state.current_step = to;
        Ok(())
    }

    /// Move to any step. Refused while a diagnosis is outstanding.
    pub fn jump_to(&mut self, step: Step) -> Result<()> {
        self.ensure_idle()?;
        self.state.current_step = step;
        Ok(())
    }

    /// Open the operator dashboard
    pub fn enter_admin(&mut self) -> Result<()> {
        self.jump_to(Step::Admin)
    }

    /// Leave the operator dashboard
    pub fn exit_admin(&mut self) -> Result<()> {
        self.jump_to(Step::Landing)
    }

    /// Discard the session. A running diagnosis cannot be cancelled, so
    /// this waits for its outcome like every other way out of Analyzing.
    pub fn reset(&mut self) -> Result<()> {
        self.ensure_idle()?;
        info!("Wizard reset");
        self.state = WizardState::default();
        Ok(())
    }

    fn ensure_idle(&self) -> Result<()> {
        if self.state.in_flight {
            return Err(Error::DiagnosisInFlight);
        }
        Ok(())
    }

    // ── form edits ──────────────────────────────────────────────────────

    /// Pick the device category
    pub fn select_device_type(&mut self, device: DeviceType) -> Result<()> {
        if self.state.in_flight || self.state.diagnosis.is_some() {
            return Err(Error::Locked(
                "device type cannot change after diagnosis has started".to_string(),
            ));
        }
        self.state.device_type = Some(device);
        Ok(())
    }

    /// Flip a symptom tag
    pub fn toggle_symptom_tag(&mut self, tag: SymptomTag) -> Result<()> {
        self.ensure_editable()?;
        self.state.symptoms.toggle(tag);
        Ok(())
    }

    /// Flip a symptom tag given by its label
    pub fn toggle_symptom_label(&mut self, label: &str) -> Result<()> {
        let tag = SymptomTag::from_label(label)
            .ok_or_else(|| Error::UnknownSymptomTag(label.to_string()))?;
        self.toggle_symptom_tag(tag)
    }

    /// Replace the symptom description
    pub fn set_symptom_text(&mut self, text: impl Into<String>) -> Result<()> {
        self.ensure_editable()?;
        self.state.symptoms.free_text = text.into();
        Ok(())
    }

    /// Edit one spec field
    pub fn update_specs(&mut self, field: SpecField) -> Result<()> {
        self.ensure_editable()?;
        self.state.specs.apply(field);
        Ok(())
    }

    /// Set the device age, clamped to 0-20
    pub fn set_age_years(&mut self, years: i64) -> Result<()> {
        self.update_specs(SpecField::AgeYears(years))
    }

    fn ensure_editable(&self) -> Result<()> {
        if self.state.in_flight {
            return Err(Error::Locked("diagnosis in progress".to_string()));
        }
        Ok(())
    }

    // ── diagnosis ───────────────────────────────────────────────────────

    /// Start a diagnosis: moves to `Analyzing` and returns the request to send.
    pub fn begin_diagnosis(&mut self) -> Result<DiagnosisRequest> {
        if self.state.in_flight {
            return Err(Error::DiagnosisInFlight);
        }
        let from = self.state.current_step;
        if from != Step::Specs {
            return Err(Error::InvalidTransition {
                from,
                action: "submit",
            });
        }
        for step in [Step::Category, Step::Symptoms] {
            if let Gate::Blocked(reason) = self.state.gate(step) {
                return Err(Error::StepIncomplete {
                    step,
                    reason: reason.to_string(),
                });
            }
        }
        let device_type = self.state.device_type.ok_or_else(|| Error::StepIncomplete {
            step: Step::Category,
            reason: "Select a device type first.".to_string(),
        })?;

        self.state.current_step = Step::Analyzing;
        self.state.in_flight = true;
        self.state.last_error = None;
        info!(device = %device_type, "Diagnosis started");

        Ok(DiagnosisRequest {
            device_type,
            specs: self.state.specs.clone(),
            symptoms: self.state.symptoms.free_text.clone(),
            tags: self.state.symptoms.selected_tags().to_vec(),
        })
    }

    /// Apply the gateway's outcome and show the results
    pub fn complete_diagnosis(&mut self, outcome: DiagnosisOutcome) -> Result<()> {
        if !self.state.in_flight {
            return Err(Error::NoDiagnosisInFlight);
        }
        self.state.last_error = outcome
            .is_fallback()
            .then(|| DIAGNOSIS_FAILED_MESSAGE.to_string());
        self.state.diagnosis = Some(outcome.result);
        self.state.in_flight = false;
        self.state.current_step = Step::Results;
        info!(fallback = self.state.last_error.is_some(), "Diagnosis completed");
        Ok(())
    }

    /// Run a whole diagnosis against `gateway`
    pub async fn submit_diagnosis(&mut self, gateway: &DiagnosisGateway) -> Result<()> {
        let request = self.begin_diagnosis()?;
        let outcome = gateway.diagnose(&request).await;
        self.complete_diagnosis(outcome)
    }
}
