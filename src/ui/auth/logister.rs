//! Container component owning the pane's state

use leptos::prelude::*;

use super::context::AuthenticatorHandle;
use super::overlay::Overlay;
use super::sign_in_form::SignInForm;
use super::sign_up_form::SignUpForm;
use crate::core::{FormMode, FormState};

/// Toggling sign-in / sign-up pane
///
/// State lives in one signal per mounted instance and is dropped on unmount.
#[component]
pub fn Logister(
    /// Overrides the authenticator provided higher up the tree
    #[prop(optional)]
    authenticator: Option<AuthenticatorHandle>,
) -> impl IntoView {
    if let Some(handle) = authenticator {
        provide_context(handle);
    }

    let state = RwSignal::new(FormState::new());

    view! {
        <div
            class="container"
            data-mode=move || state.with(|s| s.mode().as_str())
            class:active=move || state.with(|s| s.is_active(FormMode::SignUp))
        >
            <div class="box">
                <SignInForm state=state />
                <SignUpForm state=state />
            </div>
            <Overlay state=state />
        </div>
    }
}
