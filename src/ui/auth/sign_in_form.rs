//! Sign-in form: email and password, no pattern on the password

use leptos::prelude::*;

use super::context::FormController;
use super::fields::{CredentialField, PasswordField, SubmitButton};
use crate::core::{Field, FormMode, FormState};
use crate::ui::common::{ErrorMessage, SuccessMessage};

#[component]
pub fn SignInForm(state: RwSignal<FormState>) -> impl IntoView {
    let controller = FormController::new(FormMode::SignIn, state);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        controller.submit();
    };

    view! {
        <div class="form sign_in">
            <h3>{FormMode::SignIn.title()}</h3>
            <span>"or use your account"</span>
            <form on:submit=on_submit novalidate=true>
                <CredentialField
                    controller=controller
                    field=Field::Email
                    id="emailSignIn"
                    input_type="email"
                    autocomplete="email"
                />
                <PasswordField controller=controller id="passwordSignIn" />
                <div class="forgot">
                    <span>"Forgot your password?"</span>
                </div>
                <SubmitButton
                    submission=controller.submission
                    label="SIGN IN"
                    busy_label="SIGNING IN..."
                />
                <ErrorMessage error=controller.submit_error() />
                <SuccessMessage message=controller.submit_success() />
            </form>
        </div>
    }
}
