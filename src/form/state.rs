//! Sign-in form state: field values, inline errors, submission status.
//!
//! DESIGN
//! ======
//! Plain data with synchronous transitions. The async controller and the page
//! both drive it through `begin_submit` / `finish_submit`, so the disabled
//! submit control and the "no duplicate submission" rule come from one place.

#[cfg(test)]
#[path = "state_test.rs"]
mod state_test;

use crate::net::api::SubmissionError;

use super::values::{Field, FormValues, ValidationErrors, validate};

pub const SUCCESS_MESSAGE: &str = "Signed in successfully!";

/// Lifecycle of one submit attempt.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Failure,
}

/// Global notification shown after a submission completes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

/// Why `begin_submit` declined to start a request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitRejected {
    /// A request for this form is still pending.
    InFlight,
    /// One or more fields failed validation.
    Invalid(ValidationErrors),
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SignInForm {
    pub values: FormValues,
    pub errors: ValidationErrors,
    pub status: SubmissionState,
    pub notice: Option<Notice>,
    /// Set by the first submit attempt; afterwards edits re-validate.
    pub attempted: bool,
}

impl SignInForm {
    /// Store a field edit, re-validating once a submit has been attempted.
    pub fn set_field(&mut self, field: Field, value: String) {
        self.values.set(field, value);
        if self.attempted {
            self.errors = validate(&self.values).err().unwrap_or_default();
        }
    }

    /// Validate and enter `Submitting`, returning the values to send.
    ///
    /// # Errors
    ///
    /// Returns [`SubmitRejected::InFlight`] while a request is pending (state
    /// untouched) or [`SubmitRejected::Invalid`] with the stored field errors.
    pub fn begin_submit(&mut self) -> Result<FormValues, SubmitRejected> {
        if self.status == SubmissionState::Submitting {
            return Err(SubmitRejected::InFlight);
        }
        self.attempted = true;
        match validate(&self.values) {
            Ok(values) => {
                self.errors = ValidationErrors::default();
                self.notice = None;
                self.status = SubmissionState::Submitting;
                Ok(values)
            }
            Err(errors) => {
                self.errors = errors.clone();
                Err(SubmitRejected::Invalid(errors))
            }
        }
    }

    /// Record the outcome of the request started by `begin_submit`.
    pub fn finish_submit(&mut self, result: &Result<serde_json::Value, SubmissionError>) {
        match result {
            Ok(_) => {
                self.status = SubmissionState::Succeeded;
                self.notice = Some(Notice { kind: NoticeKind::Success, message: SUCCESS_MESSAGE.to_owned() });
            }
            Err(e) => {
                self.status = SubmissionState::Failed;
                self.notice = Some(Notice { kind: NoticeKind::Failure, message: failure_message(e) });
            }
        }
    }

    pub fn is_submit_disabled(&self) -> bool {
        self.status == SubmissionState::Submitting
    }

    pub fn error(&self, field: Field) -> Option<&'static str> {
        self.errors.get(field)
    }
}

fn failure_message(error: &SubmissionError) -> String {
    format!("Could not sign in: {error}")
}
