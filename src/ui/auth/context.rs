//! Authenticator context and per-form submit wiring
//!
//! The authenticator is provided once near the root of the tree. Each form
//! builds a [`FormController`] that validates its draft and hands the
//! credentials to that authenticator.

use std::sync::Arc;

use futures::future::LocalBoxFuture;
use leptos::logging::warn;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::core::{
    AuthError, AuthOutcome, Authenticator, Credentials, Field, FormMode, FormState,
    LoggingAuthenticator, Submission, SubmitRejected, ValidationError,
};

/// Shared handle to the authenticator used by the submit handlers
#[derive(Clone)]
pub struct AuthenticatorHandle(Arc<dyn Authenticator>);

impl AuthenticatorHandle {
    pub fn new(authenticator: impl Authenticator + 'static) -> Self {
        Self(Arc::new(authenticator))
    }

    pub fn attempt(
        &self,
        credentials: Credentials,
    ) -> LocalBoxFuture<'_, Result<AuthOutcome, AuthError>> {
        self.0.attempt(credentials)
    }
}

impl Default for AuthenticatorHandle {
    fn default() -> Self {
        Self::new(LoggingAuthenticator)
    }
}

/// Provide an authenticator to the component tree
pub fn provide_authenticator(authenticator: impl Authenticator + 'static) -> AuthenticatorHandle {
    let handle = AuthenticatorHandle::new(authenticator);
    provide_context(handle.clone());
    handle
}

/// Get the authenticator from the component tree, falling back to logging only
pub fn use_authenticator() -> AuthenticatorHandle {
    use_context::<AuthenticatorHandle>().unwrap_or_default()
}

/// Reactive handles one form needs to edit, validate and submit its draft
#[derive(Clone, Copy)]
pub struct FormController {
    pub form: FormMode,
    pub state: RwSignal<FormState>,
    pub submission: RwSignal<Submission>,
    /// First failing field of the last submit attempt
    pub field_error: RwSignal<Option<ValidationError>>,
    authenticator: StoredValue<AuthenticatorHandle>,
}

impl FormController {
    /// Must be called while rendering, so the authenticator context is reachable
    pub fn new(form: FormMode, state: RwSignal<FormState>) -> Self {
        Self {
            form,
            state,
            submission: RwSignal::new(Submission::new()),
            field_error: RwSignal::new(None),
            authenticator: StoredValue::new(use_authenticator()),
        }
    }

    pub fn value(&self, field: Field) -> String {
        let form = self.form;
        self.state.with(|s| s.draft(form).get(field).to_string())
    }

    pub fn set_field(&self, field: Field, value: String) {
        let form = self.form;
        self.state.update(|s| s.set_field(form, field, value));

        if self.has_error(field) {
            self.field_error.set(None);
        }
        self.submission.update(|s| s.clear_feedback());
    }

    pub fn has_error(&self, field: Field) -> bool {
        self.field_error
            .with(|e| e.as_ref().is_some_and(|e| e.field() == field))
    }

    /// Message for `field`, if it is the one that failed
    pub fn error_for(&self, field: Field) -> Signal<Option<String>> {
        let field_error = self.field_error;
        Signal::derive(move || {
            field_error
                .get()
                .filter(|e| e.field() == field)
                .map(|e| e.to_string())
        })
    }

    /// Outcome of the last authenticator call that failed
    pub fn submit_error(&self) -> Signal<Option<String>> {
        let submission = self.submission;
        Signal::derive(move || submission.with(|s| s.error().map(str::to_string)))
    }

    pub fn submit_success(&self) -> Signal<Option<String>> {
        let submission = self.submission;
        Signal::derive(move || submission.with(|s| s.success().map(str::to_string)))
    }

    /// Validate and, if the form passes, dispatch it to the authenticator
    pub fn submit(&self) {
        let form = self.form;
        let submission = self.submission;
        let started = self
            .state
            .with_untracked(|state| submission.try_update(|s| s.start(state, form)));

        let credentials = match started {
            Some(Ok(credentials)) => credentials,
            Some(Err(SubmitRejected::Invalid(error))) => {
                self.field_error.set(Some(error));
                return;
            }
            // a previous attempt is still running, or the form was unmounted
            Some(Err(SubmitRejected::Busy(_))) | None => return,
        };

        self.field_error.set(None);
        let authenticator = self.authenticator.get_value();
        spawn_local(async move {
            let result = authenticator.attempt(credentials).await;
            if let Err(err) = &result {
                warn!("{} failed: {}", form.title(), err);
            }
            submission.update(|s| s.finish(&result));
        });
    }
}
