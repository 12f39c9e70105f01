//! View state of the registration form
//!
//! The form component keeps one [`FormView`] and renders only from it.
//! Transitions follow `Idle -> Validating -> {Rejected, Submitting} ->
//! {Succeeded, Failed}`; a new submit starts over from any settled phase.

use super::submission::{SubmissionReceipt, SubmitError};
use super::validation::ValidationError;

pub const SUBMITTING_MESSAGE: &str = "Registering...";
pub const SUCCESS_MESSAGE: &str = "Registration successful! Redirecting to registration form...";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum FormPhase {
    #[default]
    Idle,
    Validating,
    Rejected,
    Submitting,
    Succeeded,
    Failed,
}

/// Severity of the status line
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusTone {
    Warning,
    Pending,
    Success,
}

impl StatusTone {
    pub fn glyph(&self) -> &'static str {
        match self {
            StatusTone::Warning => "❌",
            StatusTone::Pending => "⏳",
            StatusTone::Success => "✅",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            StatusTone::Warning => "#e74c3c",
            StatusTone::Pending => "#f39c12",
            StatusTone::Success => "#27ae60",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatusMessage {
    pub tone: StatusTone,
    pub text: String,
}

impl StatusMessage {
    pub fn new(tone: StatusTone, text: impl Into<String>) -> Self {
        Self {
            tone,
            text: text.into(),
        }
    }

    /// Text as displayed, prefixed with the tone glyph
    pub fn display(&self) -> String {
        format!("{} {}", self.tone.glyph(), self.text)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct FormView {
    pub phase: FormPhase,
    pub status: Option<StatusMessage>,
}

impl FormView {
    pub fn is_busy(&self) -> bool {
        matches!(self.phase, FormPhase::Validating | FormPhase::Submitting)
    }

    /// Start handling a submit. Returns `false` while a submission is in flight.
    pub fn begin_validation(&mut self) -> bool {
        if self.is_busy() {
            return false;
        }
        self.phase = FormPhase::Validating;
        true
    }

    pub fn reject(&mut self, error: &ValidationError) {
        self.phase = FormPhase::Rejected;
        self.status = Some(StatusMessage::new(StatusTone::Warning, error.to_string()));
    }

    pub fn begin_submission(&mut self) {
        self.phase = FormPhase::Submitting;
        self.status = Some(StatusMessage::new(StatusTone::Pending, SUBMITTING_MESSAGE));
    }

    pub fn finish(&mut self, result: &Result<SubmissionReceipt, SubmitError>) {
        match result {
            Ok(_) => {
                self.phase = FormPhase::Succeeded;
                self.status = Some(StatusMessage::new(StatusTone::Success, SUCCESS_MESSAGE));
            }
            Err(error) => {
                self.phase = FormPhase::Failed;
                self.status = Some(StatusMessage::new(StatusTone::Warning, error.to_string()));
            }
        }
    }
}
