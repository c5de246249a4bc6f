//! Page header with the login icon. The icon's glyph and click behavior come
//! from the auth panel state set by the view controller.

use crate::features::auth::state::{use_actions, use_auth};
use leptos::{ev::MouseEvent, prelude::*};

#[component]
pub fn Header(title: &'static str) -> impl IntoView {
    let auth = use_auth();
    let actions = use_actions();

    let on_icon_click = move |event: MouseEvent| {
        let icon = auth.header_icon.get_untracked();
        let Some(actions) = actions else {
            event.prevent_default();
            return;
        };
        if actions.get().views().activate_header_icon(icon) {
            event.prevent_default();
        }
    };

    view! {
        <header class="flex items-center justify-between p-4 border-b border-gray-200 dark:border-gray-700">
            <span class="font-semibold text-gray-900 dark:text-white">{title}</span>
            <a
                id="login-icon"
                href="#login"
                class="text-2xl cursor-pointer select-none"
                aria-label="account"
                on:click=on_icon_click
            >
                {move || auth.header_icon.get().glyph}
            </a>
        </header>
    }
}
