//! Page hosting the sign-in / sign-up pane

use leptos::prelude::*;
use leptos_meta::Title;

use crate::ui::auth::Logister;

#[component]
pub fn LogisterPage() -> impl IntoView {
    view! {
        <Title text="Sign in - Logister" />
        <main class="logister-page">
            <Logister />
        </main>
    }
}
