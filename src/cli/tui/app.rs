//! TUI application state management

use devicerx_core::error::format_error_for_status;
use devicerx_core::{
    DeviceType, DiagnosisGateway, DiagnosisOutcome, RamBucket, SpecField, Step, SymptomTag,
    WizardAction, WizardMachine, WizardState,
};
use std::path::PathBuf;
use tokio::sync::mpsc;
use tracing::{debug, warn};

/// Informational overlay
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Modal {
    HowItWorks,
    About,
    Support,
}

/// Rows of the Specs form, in display order
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SpecSlot {
    Brand,
    Model,
    Ram,
    Processor,
    Storage,
    Age,
}

impl SpecSlot {
    pub const ALL: [SpecSlot; 6] = [
        SpecSlot::Brand,
        SpecSlot::Model,
        SpecSlot::Ram,
        SpecSlot::Processor,
        SpecSlot::Storage,
        SpecSlot::Age,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Brand => "Brand",
            Self::Model => "Model (if known)",
            Self::Ram => "Current RAM",
            Self::Processor => "Processor Type",
            Self::Storage => "Storage",
            Self::Age => "Device Age (Years)",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            Self::Brand => "e.g. Dell, Apple, Lenovo",
            Self::Model => "e.g. XPS 15, MacBook Air M1",
            Self::Ram => "Select RAM",
            Self::Processor => "e.g. Intel i5, Ryzen 5",
            Self::Storage => "e.g. 256GB SSD, 1TB HDD",
            Self::Age => "",
        }
    }

    /// Whether the row takes typed text
    pub fn is_text(self) -> bool {
        !matches!(self, Self::Ram | Self::Age)
    }

    fn text_field(self, value: String) -> Option<SpecField> {
        match self {
            Self::Brand => Some(SpecField::Brand(value)),
            Self::Model => Some(SpecField::Model(value)),
            Self::Processor => Some(SpecField::Processor(value)),
            Self::Storage => Some(SpecField::Storage(value)),
            Self::Ram | Self::Age => None,
        }
    }
}

/// Cursor row of the free-text description on the Symptoms view
pub const DESCRIPTION_ROW: usize = SymptomTag::ALL.len();

/// Main application state.
pub struct App {
    machine: WizardMachine,
    gateway: DiagnosisGateway,
    report_dir: PathBuf,
    /// Header label describing the diagnosis backend
    pub provider_label: String,
    pub should_quit: bool,
    pub loading_tick: usize,
    pub modal: Option<Modal>,
    /// Highlighted row in the current view
    pub cursor: usize,
    /// One-line message shown in the footer
    pub status: Option<String>,
    /// Sender side lives in App so `submit` can clone it into spawned tasks.
    response_tx: mpsc::UnboundedSender<DiagnosisOutcome>,
    /// Receiver side polled each frame by the event loop.
    response_rx: mpsc::UnboundedReceiver<DiagnosisOutcome>,
}

impl App {
    pub fn new(gateway: DiagnosisGateway, report_dir: PathBuf) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        let provider_label = match (gateway.is_configured(), gateway.config().model.as_deref()) {
            (true, Some(model)) => format!("Gemini · {}", model),
            (true, None) => "Gemini".to_string(),
            (false, _) => "offline (no API key)".to_string(),
        };

        Self {
            machine: WizardMachine::new(),
            gateway,
            report_dir,
            provider_label,
            should_quit: false,
            loading_tick: 0,
            modal: None,
            cursor: 0,
            status: None,
            response_tx: tx,
            response_rx: rx,
        }
    }

    // ── helpers ──────────────────────────────────────────────────────────

    pub fn state(&self) -> &WizardState {
        self.machine.state()
    }

    pub fn step(&self) -> Step {
        self.machine.current_step()
    }

    #[cfg(test)]
    pub(crate) fn machine_mut(&mut self) -> &mut WizardMachine {
        &mut self.machine
    }

    /// A diagnosis request is outstanding
    pub fn is_loading(&self) -> bool {
        self.state().in_flight
    }

    /// Apply an action, reporting rejections in the status line.
    /// Returns whether the machine accepted it.
    pub fn apply(&mut self, action: WizardAction) -> bool {
        let before = self.step();
        match self.machine.dispatch(action) {
            Ok(()) => {
                self.status = None;
                if self.step() != before {
                    self.cursor = 0;
                }
                true
            }
            Err(e) => {
                debug!(error = %e, "Action rejected");
                self.status = Some(format_error_for_status(&e));
                false
            }
        }
    }

    /// Number of selectable rows in the current view
    pub fn row_count(&self) -> usize {
        match self.step() {
            Step::Category => DeviceType::ALL.len(),
            Step::Symptoms => DESCRIPTION_ROW + 1,
            Step::Specs => SpecSlot::ALL.len(),
            _ => 0,
        }
    }

    pub fn cursor_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn cursor_down(&mut self) {
        if self.cursor + 1 < self.row_count() {
            self.cursor += 1;
        }
    }

    /// Spec row under the cursor (Specs view only)
    pub fn spec_slot(&self) -> Option<SpecSlot> {
        (self.step() == Step::Specs)
            .then(|| SpecSlot::ALL.get(self.cursor).copied())
            .flatten()
    }

    /// Whether typed characters go into a text field
    pub fn accepts_text(&self) -> bool {
        match self.step() {
            Step::Symptoms => self.cursor == DESCRIPTION_ROW,
            Step::Specs => self.spec_slot().is_some_and(SpecSlot::is_text),
            _ => false,
        }
    }

    pub fn toggle_modal(&mut self, modal: Modal) {
        self.modal = if self.modal == Some(modal) {
            None
        } else {
            Some(modal)
        };
    }

    // ── navigation ──────────────────────────────────────────────────────

    /// The primary button of the current view
    pub fn next(&mut self) {
        match self.step() {
            Step::Specs => self.submit(),
            Step::Summary => {
                self.apply(WizardAction::Reset);
            }
            Step::Admin => {
                self.apply(WizardAction::ExitAdmin);
            }
            Step::Analyzing => {}
            _ => {
                self.apply(WizardAction::Advance);
            }
        }
    }

    /// The Back button
    pub fn back(&mut self) {
        self.apply(WizardAction::Retreat);
    }

    /// Start over
    pub fn start_over(&mut self) {
        self.apply(WizardAction::Reset);
    }

    /// Open or close the admin dashboard
    pub fn toggle_admin(&mut self) {
        if self.step() == Step::Admin {
            self.apply(WizardAction::ExitAdmin);
        } else {
            self.apply(WizardAction::EnterAdmin);
        }
    }

    // ── form input ──────────────────────────────────────────────────────

    /// Select / toggle / cycle the highlighted row
    pub fn activate(&mut self) {
        match self.step() {
            Step::Category => {
                if let Some(device) = DeviceType::ALL.get(self.cursor).copied() {
                    self.apply(WizardAction::SelectDeviceType(device));
                }
            }
            Step::Symptoms => {
                if let Some(tag) = SymptomTag::ALL.get(self.cursor).copied() {
                    self.apply(WizardAction::ToggleSymptom(tag));
                }
            }
            Step::Specs => self.adjust(1),
            _ => {}
        }
    }

    /// Left/Right on the RAM and age rows
    pub fn adjust(&mut self, delta: i64) {
        match self.spec_slot() {
            Some(SpecSlot::Ram) => {
                let current = self.state().specs.ram;
                let next = if delta >= 0 {
                    RamBucket::cycle(current)
                } else {
                    cycle_back(current)
                };
                self.apply(WizardAction::UpdateSpecs(SpecField::Ram(next)));
            }
            Some(SpecSlot::Age) => {
                let age = i64::from(self.state().specs.age_years) + delta;
                self.apply(WizardAction::SetAgeYears(age));
            }
            _ => {}
        }
    }

    pub fn input_char(&mut self, c: char) {
        self.edit_text(|text| text.push(c));
    }

    pub fn backspace(&mut self) {
        self.edit_text(|text| {
            text.pop();
        });
    }

    fn edit_text(&mut self, edit: impl FnOnce(&mut String)) {
        match self.step() {
            Step::Symptoms if self.cursor == DESCRIPTION_ROW => {
                let mut text = self.state().symptoms.free_text.clone();
                edit(&mut text);
                self.apply(WizardAction::SetSymptomText(text));
            }
            Step::Specs => {
                let Some(slot) = self.spec_slot() else { return };
                let specs = &self.state().specs;
                let mut text = match slot {
                    SpecSlot::Brand => specs.brand.clone(),
                    SpecSlot::Model => specs.model.clone(),
                    SpecSlot::Processor => specs.processor.clone(),
                    SpecSlot::Storage => specs.storage.clone(),
                    SpecSlot::Ram | SpecSlot::Age => return,
                };
                edit(&mut text);
                if let Some(field) = slot.text_field(text) {
                    self.apply(WizardAction::UpdateSpecs(field));
                }
            }
            _ => {}
        }
    }

    // ── diagnosis ───────────────────────────────────────────────────────

    /// Start a diagnosis on a background task
    pub fn submit(&mut self) {
        let request = match self.machine.begin_diagnosis() {
            Ok(request) => request,
            Err(e) => {
                self.status = Some(format_error_for_status(&e));
                return;
            }
        };
        self.status = None;
        self.cursor = 0;
        self.loading_tick = 0;

        let gateway = self.gateway.clone();
        let tx = self.response_tx.clone();

        tokio::spawn(async move {
            let outcome = gateway.diagnose(&request).await;
            if tx.send(outcome).is_err() {
                warn!("Diagnosis finished after the UI closed");
            }
        });
    }

    /// Called every tick to apply finished diagnoses.
    pub fn poll_responses(&mut self) {
        while let Ok(outcome) = self.response_rx.try_recv() {
            self.apply(WizardAction::CompleteDiagnosis(outcome));
        }
    }

    /// Save the plain-text report (Summary view)
    pub fn export_report(&mut self) {
        if self.step() != Step::Summary {
            return;
        }
        self.status = Some(
            match devicerx_core::write_report(self.state(), &self.report_dir) {
                Ok(path) => format!("Report saved to {}", path.display()),
                Err(e) => format_error_for_status(&e),
            },
        );
    }

    /// Advance the loading spinner animation counter.
    pub fn tick(&mut self) {
        if self.is_loading() {
            self.loading_tick = self.loading_tick.wrapping_add(1);
        }
    }
}

fn cycle_back(current: Option<RamBucket>) -> Option<RamBucket> {
    match current {
        None => Some(RamBucket::Gb32Plus),
        Some(RamBucket::Gb4) => None,
        Some(RamBucket::Gb8) => Some(RamBucket::Gb4),
        Some(RamBucket::Gb16) => Some(RamBucket::Gb8),
        Some(RamBucket::Gb32Plus) => Some(RamBucket::Gb16),
    }
}
