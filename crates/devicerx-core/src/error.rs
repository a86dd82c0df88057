//! Error types for devicerx-core
//!
//! This module provides error types and user-friendly error formatting.

use crate::wizard::Step;
use thiserror::Error;

/// Core error type
#[derive(Debug, Error)]
pub enum Error {
    /// The current step's completeness gate is not satisfied
    #[error("step {step} is incomplete: {reason}")]
    StepIncomplete {
        /// Step whose gate failed
        step: Step,
        /// What is missing
        reason: String,
    },

    /// The operation is not valid from the current step
    #[error("cannot {action} from step {from}")]
    InvalidTransition {
        /// Step the machine was in
        from: Step,
        /// Operation that was attempted
        action: &'static str,
    },

    /// Raw step arithmetic left the step sequence
    #[error("no step with ordinal {ordinal} (from {from})")]
    StepOutOfRange {
        /// Step the machine was in
        from: Step,
        /// Ordinal that does not exist
        ordinal: i32,
    },

    /// A diagnosis request is already outstanding
    #[error("a diagnosis is already in progress")]
    DiagnosisInFlight,

    /// A diagnosis outcome arrived with no request outstanding
    #[error("no diagnosis is in progress")]
    NoDiagnosisInFlight,

    /// Input can no longer be edited
    #[error("input is locked: {0}")]
    Locked(String),

    /// Symptom label outside the fixed vocabulary
    #[error("unknown symptom tag: {0}")]
    UnknownSymptomTag(String),

    /// LLM provider error
    #[error("llm error: {0}")]
    Llm(#[from] devicerx_llm::Error),

    /// Report generation failed
    #[error("report error: {0}")]
    Report(String),

    /// Filesystem error
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// Trait for user-friendly error messages
///
/// Provides human-readable error messages and suggestions for fixing.
pub trait UserFriendlyError {
    /// Get a user-friendly error message
    fn user_message(&self) -> String;

    /// Get a suggestion for how to fix the error
    fn suggestion(&self) -> Option<String>;
}

impl UserFriendlyError for Error {
    fn user_message(&self) -> String {
        match self {
            Error::StepIncomplete { reason, .. } => reason.clone(),
            Error::InvalidTransition { from, action } => {
                format!("You can't {} from the {} screen.", action, from.label())
            }
            Error::StepOutOfRange { .. } => "There is no screen in that direction.".to_string(),
            Error::DiagnosisInFlight => "Your device is still being analyzed.".to_string(),
            Error::NoDiagnosisInFlight => "No analysis is running.".to_string(),
            Error::Locked(msg) => format!("Locked: {}", msg),
            Error::UnknownSymptomTag(tag) => format!("'{}' is not a known symptom.", tag),
            Error::Llm(e) => format!(
                "AI service error: {}",
                devicerx_llm::util::sanitize_error_for_user(&e.to_string())
            ),
            Error::Report(msg) => format!("Could not save the report: {}", msg),
            Error::Io(e) => format!("File error: {}", e),
        }
    }

    fn suggestion(&self) -> Option<String> {
        match self {
            Error::StepIncomplete { step: Step::Category, .. } => {
                Some("Pick a device type to continue.".to_string())
            }
            Error::StepIncomplete { step: Step::Symptoms, .. } => Some(
                "Select at least one symptom or describe the problem in 5+ characters."
                    .to_string(),
            ),
            Error::DiagnosisInFlight => Some("Wait for the analysis to finish.".to_string()),
            Error::Locked(_) => Some("Start over to change the device type.".to_string()),
            Error::Llm(_) => Some("Check GEMINI_API_KEY and your internet connection.".to_string()),
            Error::Report(_) | Error::Io(_) => {
                Some("Check that the report directory is writable.".to_string())
            }
            _ => None,
        }
    }
}

/// Format an error for a one-line status display
pub fn format_error_for_status(error: &Error) -> String {
    match error.suggestion() {
        Some(suggestion) => format!("{} {}", error.user_message(), suggestion),
        None => error.user_message(),
    }
}
