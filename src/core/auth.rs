//! Authentication capability used by the submit handlers
//!
//! The pane never talks to a backend directly: it hands validated
//! [`Credentials`] to an [`Authenticator`] and renders whatever comes back.

use futures::FutureExt;
use futures::future::LocalBoxFuture;
use leptos::logging::log;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::form::{CredentialDraft, FormMode};

/// Credentials captured from a form that passed validation
///
/// Serializes to the flat `{email, password}` / `{username, email, password}`
/// bodies expected by the `/login` and `/signup` endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Credentials {
    SignUp {
        username: String,
        email: String,
        password: String,
    },
    SignIn {
        email: String,
        password: String,
    },
}

impl Credentials {
    pub fn from_draft(form: FormMode, draft: &CredentialDraft) -> Self {
        match form {
            FormMode::SignIn => Credentials::SignIn {
                email: draft.email.clone(),
                password: draft.password.clone(),
            },
            FormMode::SignUp => Credentials::SignUp {
                username: draft.username.clone(),
                email: draft.email.clone(),
                password: draft.password.clone(),
            },
        }
    }

    pub fn form(&self) -> FormMode {
        match self {
            Credentials::SignIn { .. } => FormMode::SignIn,
            Credentials::SignUp { .. } => FormMode::SignUp,
        }
    }

    pub fn email(&self) -> &str {
        match self {
            Credentials::SignIn { email, .. } | Credentials::SignUp { email, .. } => email,
        }
    }
}

/// Successful result of an authentication attempt
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum AuthOutcome {
    SignedIn { email: String },
    Registered { username: String },
}

impl AuthOutcome {
    /// Feedback shown under the form
    pub fn message(&self) -> String {
        match self {
            AuthOutcome::SignedIn { email } => format!("Signed in as {}", email),
            AuthOutcome::Registered { username } => format!("Account created for {}", username),
        }
    }
}

/// Auth error types
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AuthError {
    /// The backend refused the credentials
    #[error("{0}")]
    Rejected(String),

    /// The backend could not be reached
    #[error("Authentication service unavailable: {0}")]
    Unavailable(String),
}

/// Pluggable authentication backend
pub trait Authenticator: Send + Sync {
    fn attempt(&self, credentials: Credentials)
    -> LocalBoxFuture<'_, Result<AuthOutcome, AuthError>>;
}

/// Authenticator that only logs the attempt and reports success
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingAuthenticator;

impl Authenticator for LoggingAuthenticator {
    fn attempt(
        &self,
        credentials: Credentials,
    ) -> LocalBoxFuture<'_, Result<AuthOutcome, AuthError>> {
        async move {
            // never log the password
            match credentials {
                Credentials::SignIn { email, .. } => {
                    log!("Sign-in attempt for {}", email);
                    Ok(AuthOutcome::SignedIn { email })
                }
                Credentials::SignUp {
                    username, email, ..
                } => {
                    log!("Sign-up attempt for {} <{}>", username, email);
                    Ok(AuthOutcome::Registered { username })
                }
            }
        }
        .boxed_local()
    }
}
