use crate::features::auth::state::use_auth;
use leptos::prelude::*;

/// Small inline spinner shown while a provider call is pending.
#[component]
pub fn Spinner() -> impl IntoView {
    let auth = use_auth();

    view! {
        <div
            class="inline-block h-5 w-5 animate-spin rounded-full border-2 border-blue-200 border-t-blue-600"
            style:display=move || if auth.busy.get() { "inline-block" } else { "none" }
            role="status"
            aria-live="polite"
            aria-label="Loading"
        ></div>
    }
}
