//! Core state and rules of the sign-in / sign-up pane, free of any rendering

pub mod auth;
#[cfg(feature = "ssr")]
pub mod config;
mod form;
pub mod submission;
pub mod validation;

pub use auth::{AuthError, AuthOutcome, Authenticator, Credentials, LoggingAuthenticator};
pub use form::*;
pub use submission::{Submission, SubmissionError, SubmissionStatus, SubmitRejected};
pub use validation::{ValidationError, ValidationResult};
