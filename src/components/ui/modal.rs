//! Message overlay. Messages are plain text and must never include tokens or
//! passwords.

use crate::{
    app_lib::theme::Theme,
    features::auth::{messages::Locale, modal::ModalNotifier, state::use_auth},
};
use leptos::prelude::*;

#[component]
pub fn Modal() -> impl IntoView {
    let auth = use_auth();
    let messages = use_context::<Locale>().unwrap_or_default().messages();
    let close = move |_| ModalNotifier::new(auth).dismiss();

    view! {
        <div
            id="modal-overlay"
            class="fixed inset-0 z-50 items-center justify-center bg-gray-900/50"
            style:display=move || if auth.modal_visible.get() { "flex" } else { "none" }
        >
            <div class="w-full max-w-sm rounded-lg bg-white p-6 shadow dark:bg-gray-800" role="alertdialog">
                <p id="modal-message" class="mb-4 text-gray-900 dark:text-white">
                    {move || auth.modal_message.get()}
                </p>
                <button type="button" class=Theme::BUTTON_PRIMARY on:click=close>
                    {messages.close_button}
                </button>
            </div>
        </div>
    }
}
