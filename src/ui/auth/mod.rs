//! Sign-in / sign-up pane
//!
//! Both forms stay mounted side by side; the overlay slides over whichever one
//! is not active.

mod context;
mod fields;
mod logister;
mod overlay;
mod sign_in_form;
mod sign_up_form;

pub use context::{AuthenticatorHandle, FormController, provide_authenticator, use_authenticator};
pub use fields::{CredentialField, PasswordField, SubmitButton};
pub use logister::Logister;
pub use overlay::Overlay;
pub use sign_in_form::SignInForm;
pub use sign_up_form::SignUpForm;
