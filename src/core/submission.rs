//! Submission gate
//!
//! Tracks one form's in-flight authentication attempt so that a second submit
//! cannot be dispatched before the first one resolves.

use thiserror::Error;

use super::auth::{AuthError, AuthOutcome, Credentials};
use super::form::{FormMode, FormState};
use super::validation::ValidationError;

/// Lifecycle of the latest submission of one form
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    InFlight,
    Succeeded(String),
    Failed(String),
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SubmissionError {
    #[error("A submission is already in progress")]
    AlreadyInFlight,
}

/// Why a submit event did not reach the authenticator
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SubmitRejected {
    #[error(transparent)]
    Invalid(#[from] ValidationError),
    #[error(transparent)]
    Busy(#[from] SubmissionError),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Submission {
    status: SubmissionStatus,
    dispatched: u32,
}

impl Submission {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(&self) -> &SubmissionStatus {
        &self.status
    }

    pub fn is_in_flight(&self) -> bool {
        self.status == SubmissionStatus::InFlight
    }

    /// Number of attempts handed to the authenticator so far
    pub fn dispatched(&self) -> u32 {
        self.dispatched
    }

    /// Mark a new attempt as started
    pub fn begin(&mut self) -> Result<(), SubmissionError> {
        if self.is_in_flight() {
            return Err(SubmissionError::AlreadyInFlight);
        }
        self.status = SubmissionStatus::InFlight;
        self.dispatched += 1;
        Ok(())
    }

    /// Validate `form` and, if it passes, start an attempt with its credentials
    ///
    /// Validation runs first, so an invalid form never counts as dispatched.
    pub fn start(
        &mut self,
        state: &FormState,
        form: FormMode,
    ) -> Result<Credentials, SubmitRejected> {
        let credentials = state.submit(form)?;
        self.begin()?;
        Ok(credentials)
    }

    /// Record the authenticator's answer for the in-flight attempt
    pub fn finish(&mut self, result: &Result<AuthOutcome, AuthError>) {
        self.status = match result {
            Ok(outcome) => SubmissionStatus::Succeeded(outcome.message()),
            Err(error) => SubmissionStatus::Failed(error.to_string()),
        };
    }

    pub fn error(&self) -> Option<&str> {
        match &self.status {
            SubmissionStatus::Failed(message) => Some(message),
            _ => None,
        }
    }

    pub fn success(&self) -> Option<&str> {
        match &self.status {
            SubmissionStatus::Succeeded(message) => Some(message),
            _ => None,
        }
    }

    /// Forget the previous outcome once the user edits the form again
    pub fn clear_feedback(&mut self) {
        if !self.is_in_flight() {
            self.status = SubmissionStatus::Idle;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_begin_rejects_overlapping_dispatch() {
        let mut submission = Submission::new();
        assert!(submission.begin().is_ok());
        assert!(submission.is_in_flight());
        assert_eq!(submission.begin(), Err(SubmissionError::AlreadyInFlight));
        assert_eq!(submission.dispatched(), 1);
    }

    #[test]
    fn test_finish_success_allows_next_attempt() {
        let mut submission = Submission::new();
        submission.begin().unwrap();
        submission.finish(&Ok(AuthOutcome::SignedIn {
            email: "ana@example.com".to_string(),
        }));

        assert_eq!(submission.success(), Some("Signed in as ana@example.com"));
        assert!(submission.error().is_none());
        assert!(submission.begin().is_ok());
        assert_eq!(submission.dispatched(), 2);
    }

    #[test]
    fn test_finish_failure_is_surfaced() {
        let mut submission = Submission::new();
        submission.begin().unwrap();
        submission.finish(&Err(AuthError::Rejected("Wrong password".to_string())));

        assert_eq!(
            submission.status(),
            &SubmissionStatus::Failed("Wrong password".to_string())
        );
        assert_eq!(submission.error(), Some("Wrong password"));
    }

    #[test]
    fn test_start_rejects_invalid_form_without_dispatch() {
        let mut submission = Submission::new();
        let state = FormState::new();
        let rejected = submission.start(&state, FormMode::SignIn);
        assert!(matches!(rejected, Err(SubmitRejected::Invalid(_))));
        assert_eq!(submission.dispatched(), 0);
        assert_eq!(submission.status(), &SubmissionStatus::Idle);
    }

    #[test]
    fn test_start_while_in_flight_is_busy() {
        let mut submission = Submission::new();
        let mut state = FormState::new();
        state.set_email(FormMode::SignIn, "ana@example.com");
        state.set_password(FormMode::SignIn, "x");

        assert!(submission.start(&state, FormMode::SignIn).is_ok());
        assert_eq!(
            submission.start(&state, FormMode::SignIn),
            Err(SubmitRejected::Busy(SubmissionError::AlreadyInFlight))
        );
    }

    #[test]
    fn test_clear_feedback_keeps_in_flight() {
        let mut submission = Submission::new();
        submission.begin().unwrap();
        submission.clear_feedback();
        assert!(submission.is_in_flight());

        submission.finish(&Err(AuthError::Unavailable("offline".to_string())));
        submission.clear_feedback();
        assert_eq!(submission.status(), &SubmissionStatus::Idle);
    }
}
