//! Sign-up form: username, email and a pattern-checked password

use leptos::prelude::*;

use super::context::FormController;
use super::fields::{CredentialField, PasswordField, SubmitButton};
use crate::core::{Field, FormMode, FormState};
use crate::ui::common::{ErrorMessage, SuccessMessage};

const PASSWORD_HINT: &str = "At least 8 characters, including a lowercase letter, \
                             an uppercase letter, a number and a special character";

#[component]
pub fn SignUpForm(state: RwSignal<FormState>) -> impl IntoView {
    let controller = FormController::new(FormMode::SignUp, state);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        controller.submit();
    };

    view! {
        <div class="form sign_up">
            <h3>{FormMode::SignUp.title()}</h3>
            <span>"or use your email for registration"</span>
            <form on:submit=on_submit novalidate=true>
                <CredentialField
                    controller=controller
                    field=Field::Username
                    id="name"
                    autocomplete="username"
                />
                <CredentialField
                    controller=controller
                    field=Field::Email
                    id="emailSignUp"
                    input_type="email"
                    autocomplete="email"
                />
                <PasswordField
                    controller=controller
                    id="passwordSignUp"
                    autocomplete="new-password"
                    title=PASSWORD_HINT
                />
                <SubmitButton
                    submission=controller.submission
                    label="SIGN UP"
                    busy_label="SIGNING UP..."
                />
                <ErrorMessage error=controller.submit_error() />
                <SuccessMessage message=controller.submit_success() />
            </form>
        </div>
    }
}
