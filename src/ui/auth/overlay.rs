//! Sliding overlay with the two call-to-action panes

use leptos::prelude::*;

use crate::core::FormState;

#[component]
pub fn Overlay(state: RwSignal<FormState>) -> impl IntoView {
    view! {
        <div class="overlay">
            <div class="page page_signIn">
                <h3>"Welcome Back!"</h3>
                <p>"To keep connected with us please login with your personal info"</p>
                <button
                    type="button"
                    class="btn"
                    on:click=move |_| state.update(|s| s.activate_sign_up())
                >
                    "SIGN UP"
                </button>
            </div>

            <div class="page page_signUp">
                <h3>"Hello Friend!"</h3>
                <p>"Enter your personal details and start journey with us"</p>
                <button
                    type="button"
                    class="btn"
                    on:click=move |_| state.update(|s| s.activate_sign_in())
                >
                    "SIGN IN"
                </button>
            </div>
        </div>
    }
}
