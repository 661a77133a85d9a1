//! Async submit flow for the sign-in form.
//!
//! SYSTEM CONTEXT
//! ==============
//! `FormController` ties the form state (wherever it lives) to a `Transport`
//! and an `EndpointConfig`. The page builds one per submit with its
//! `RwSignal<SignInForm>`; tests build one over `Rc<RefCell<SignInForm>>` and
//! a mock transport.
//!
//! Requests are not cancelled. If the form state is disposed while a request
//! is pending, the response is logged and dropped.

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;

use crate::config::EndpointConfig;
use crate::net::api::{self, SubmissionError, Transport};

use super::state::{SignInForm, SubmitRejected};
use super::values::{FormValues, ValidationErrors};

/// Access to the `SignInForm` a controller drives.
pub trait FormHandle {
    /// Run `f` against the form, or return `None` once the form is gone.
    fn with_form<R>(&self, f: impl FnOnce(&mut SignInForm) -> R) -> Option<R>;
}

impl FormHandle for Rc<RefCell<SignInForm>> {
    fn with_form<R>(&self, f: impl FnOnce(&mut SignInForm) -> R) -> Option<R> {
        Some(f(&mut self.borrow_mut()))
    }
}

impl FormHandle for RwSignal<SignInForm> {
    fn with_form<R>(&self, f: impl FnOnce(&mut SignInForm) -> R) -> Option<R> {
        self.try_update(f)
    }
}

/// Result of one `FormController::submit` call.
#[derive(Clone, Debug, PartialEq)]
pub enum SubmitOutcome {
    /// A request was already pending; nothing was sent.
    Ignored,
    /// Validation failed; nothing was sent.
    Invalid(ValidationErrors),
    /// The server accepted the credentials.
    Succeeded(serde_json::Value),
    /// The request failed or the server rejected it.
    Failed(SubmissionError),
    /// The form was disposed before the request could start or finish.
    Detached,
}

#[derive(Clone, Debug)]
pub struct FormController<H, T> {
    form: H,
    transport: T,
    endpoint: EndpointConfig,
}

impl<H, T> FormController<H, T>
where
    H: FormHandle,
    T: Transport,
{
    pub fn new(form: H, transport: T, endpoint: EndpointConfig) -> Self {
        Self { form, transport, endpoint }
    }

    pub fn endpoint(&self) -> &EndpointConfig {
        &self.endpoint
    }

    /// Validate the current values and, if valid, post them once.
    ///
    /// While the request is pending the form is `Submitting`, which disables
    /// its submit control and turns further calls into `Ignored`.
    pub async fn submit(&self) -> SubmitOutcome {
        let values = match self.form.with_form(SignInForm::begin_submit) {
            None => return SubmitOutcome::Detached,
            Some(Err(SubmitRejected::InFlight)) => {
                log::debug!("sign-in already in flight; ignoring submit");
                return SubmitOutcome::Ignored;
            }
            Some(Err(SubmitRejected::Invalid(errors))) => {
                log::debug!("sign-in form invalid: {errors}");
                return SubmitOutcome::Invalid(errors);
            }
            Some(Ok(values)) => values,
        };

        let result = self.send(&values).await;

        if self.form.with_form(|form| form.finish_submit(&result)).is_none() {
            log::warn!("sign-in form disposed before response; discarding result");
            return SubmitOutcome::Detached;
        }
        match result {
            Ok(body) => SubmitOutcome::Succeeded(body),
            Err(e) => SubmitOutcome::Failed(e),
        }
    }

    async fn send(&self, values: &FormValues) -> Result<serde_json::Value, SubmissionError> {
        log::info!("submitting sign-in for {} to {}", values.username, self.endpoint.url());
        let result = api::sign_in(&self.transport, &self.endpoint, values).await;
        match &result {
            Ok(body) => log::info!("sign-in succeeded: {body}"),
            Err(SubmissionError::Status { status, body }) => {
                log::error!("sign-in rejected with status {status}: {body}");
            }
            Err(e) => log::error!("sign-in error: {e}"),
        }
        result
    }
}
