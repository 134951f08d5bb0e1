//! Inputs shared by the sign-in and sign-up forms

use leptos::prelude::*;

use super::context::FormController;
use crate::core::{Field, Submission};
use crate::ui::common::FieldMessage;
use crate::ui::icon::{Icon, icons};

/// Plain text / email input bound to one field of a draft
#[component]
pub fn CredentialField(
    controller: FormController,
    field: Field,
    /// DOM id, kept stable for labels and tests
    id: &'static str,
    /// Input type (text, email)
    #[prop(default = "text")]
    input_type: &'static str,
    #[prop(default = "off")]
    autocomplete: &'static str,
) -> impl IntoView {
    view! {
        <div class="type">
            <input
                type=input_type
                placeholder=field.label()
                id=id
                name=field.as_str()
                autocomplete=autocomplete
                required=true
                class:invalid=move || controller.has_error(field)
                prop:value=move || controller.value(field)
                on:input=move |ev| controller.set_field(field, event_target_value(&ev))
            />
            <FieldMessage error=controller.error_for(field) />
        </div>
    }
}

/// Password input with a show/hide toggle
///
/// The toggle is only rendered while the password is non-empty.
#[component]
pub fn PasswordField(
    controller: FormController,
    id: &'static str,
    #[prop(default = "current-password")]
    autocomplete: &'static str,
    /// Hint describing the accepted format
    #[prop(optional)]
    title: Option<&'static str>,
) -> impl IntoView {
    let form = controller.form;
    let state = controller.state;
    let visible = move || state.with(|s| s.is_visible(form));

    view! {
        <div class="type password-container">
            <input
                type=move || state.with(|s| s.input_type(form))
                placeholder=Field::Password.label()
                id=id
                name=Field::Password.as_str()
                autocomplete=autocomplete
                required=true
                title=title
                class:invalid=move || controller.has_error(Field::Password)
                prop:value=move || controller.value(Field::Password)
                on:input=move |ev| controller.set_field(Field::Password, event_target_value(&ev))
            />
            <Show when=move || state.with(|s| s.toggle_available(form))>
                <button
                    type="button"
                    class="password-toggle"
                    aria-label=move || if visible() { "Hide password" } else { "Show password" }
                    on:click=move |_| state.update(|s| s.toggle_visibility(form))
                >
                    {move || {
                        if visible() {
                            view! { <Icon name=icons::EYE_CLOSED class="h-5 w-5" /> }.into_any()
                        } else {
                            view! { <Icon name=icons::EYE class="h-5 w-5" /> }.into_any()
                        }
                    }}
                </button>
            </Show>
            <FieldMessage error=controller.error_for(Field::Password) />
        </div>
    }
}

/// Submit button, disabled while an attempt is in flight
#[component]
pub fn SubmitButton(
    submission: RwSignal<Submission>,
    label: &'static str,
    busy_label: &'static str,
) -> impl IntoView {
    let in_flight = move || submission.with(|s| s.is_in_flight());

    view! {
        <button class="btn" type="submit" disabled=in_flight>
            {move || {
                if in_flight() {
                    view! {
                        <span class="btn-busy">
                            <Icon name=icons::LOADER class="animate-spin h-4 w-4" />
                            {busy_label}
                        </span>
                    }.into_any()
                } else {
                    view! { <span>{label}</span> }.into_any()
                }
            }}
        </button>
    }
}
