//! Auth view: the credential form when signed out, the user info block when
//! signed in. Which block shows is driven only by the panel signal that the
//! auth-state listener writes.

use crate::{
    app_lib::theme::Theme,
    components::{ActionButton, AuthAction, Spinner},
    features::auth::{
        messages::Locale,
        state::{use_actions, use_auth},
        AuthPanel, View,
    },
};
use leptos::{ev::SubmitEvent, prelude::*};

#[component]
pub fn AuthPage() -> impl IntoView {
    let auth = use_auth();
    let actions = use_actions();
    let messages = use_context::<Locale>().unwrap_or_default().messages();

    let signed_in = move || auth.panel.with(AuthPanel::is_signed_in);
    let title = move || {
        if signed_in() {
            messages.title_signed_in
        } else {
            messages.title_signed_out
        }
    };
    let email = move || {
        auth.panel.with(|panel| match panel {
            AuthPanel::SignedIn { email } => email.clone(),
            AuthPanel::SignedOut => String::new(),
        })
    };
    let go_back = move |_| {
        if let Some(actions) = actions {
            actions.get().views().go_back();
        }
    };
    // Enter in a field would submit the form and reload the page.
    let on_submit = move |event: SubmitEvent| event.prevent_default();

    view! {
        <div
            id="auth-page"
            class="min-h-screen flex-col items-center justify-center gap-4 p-4"
            style:display=move || if auth.view.get() == View::Login { "flex" } else { "none" }
        >
            <div class=Theme::CARD>
                <h2 id="auth-title" class="mb-4 text-xl font-bold text-gray-900 dark:text-white">
                    {title}
                </h2>
                <form
                    id="auth-form"
                    style:display=move || if signed_in() { "none" } else { "block" }
                    on:submit=on_submit
                >
                    <div class="mb-5">
                        <label class=Theme::LABEL for="email">{messages.email_label}</label>
                        <input
                            id="email"
                            type="email"
                            class=Theme::INPUT
                            autocomplete="email"
                            node_ref=auth.email_input
                        />
                    </div>
                    <div class="mb-5">
                        <label class=Theme::LABEL for="password">{messages.password_label}</label>
                        <input
                            id="password"
                            type="password"
                            class=Theme::INPUT
                            autocomplete="current-password"
                            node_ref=auth.password_input
                        />
                    </div>
                    <div class="flex flex-wrap items-center gap-3">
                        <ActionButton action=AuthAction::SignIn label=messages.sign_in_button />
                        <ActionButton action=AuthAction::Register label=messages.register_button />
                        <ActionButton
                            action=AuthAction::ResetPassword
                            label=messages.reset_button
                            link=true
                        />
                        <Spinner />
                    </div>
                </form>
                <div
                    id="user-info"
                    style:display=move || if signed_in() { "block" } else { "none" }
                >
                    <p class="mb-4 text-gray-700 dark:text-gray-300">
                        <span id="user-email-display" class="font-medium">{email}</span>
                    </p>
                    <ActionButton action=AuthAction::SignOut label=messages.sign_out_button />
                </div>
            </div>
            <button type="button" class=Theme::BUTTON_LINK on:click=go_back>
                {messages.back_button}
            </button>
        </div>
    }
}
