use crate::{
    components::Header,
    features::auth::{messages::Locale, state::use_auth, View},
};
use leptos::prelude::*;

/// Landing view with the header login icon.
#[component]
pub fn MainPage() -> impl IntoView {
    let auth = use_auth();
    let messages = use_context::<Locale>().unwrap_or_default().messages();

    view! {
        <div
            id="main-page"
            class="min-h-screen"
            style:display=move || if auth.view.get() == View::Main { "block" } else { "none" }
        >
            <Header title=messages.main_heading />
            <main class="container mx-auto p-4 mt-6">
                <h1 class="text-2xl font-bold text-gray-900 dark:text-white">
                    {messages.main_heading}
                </h1>
            </main>
        </div>
    }
}
