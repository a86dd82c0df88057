//! Wizard State Machine
//!
//! The linear step sequence, per-step completeness gates and the machine that
//! owns the session state. Views read `&WizardState` and send `WizardAction`s.

mod action;
mod machine;
mod state;
mod step;


pub use action::WizardAction;
pub use machine::{WizardMachine, DIAGNOSIS_FAILED_MESSAGE};
pub use state::{Gate, WizardState};
pub use step::Step;
