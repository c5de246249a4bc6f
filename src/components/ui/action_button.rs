//! Buttons that dispatch one auth handler.

use crate::{
    app_lib::theme::Theme,
    features::auth::state::{use_actions, use_auth, WebAuthActions},
};
use leptos::prelude::*;
use std::rc::Rc;

/// Which handler a button runs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthAction {
    Register,
    SignIn,
    SignOut,
    ResetPassword,
}

impl AuthAction {
    async fn run(self, actions: Rc<WebAuthActions>) {
        match self {
            Self::Register => actions.register().await,
            Self::SignIn => actions.sign_in().await,
            Self::SignOut => actions.sign_out().await,
            Self::ResetPassword => actions.reset_password().await,
        }
    }
}

/// Renders a button that is disabled while any handler is pending.
#[component]
pub fn ActionButton(
    action: AuthAction,
    label: &'static str,
    #[prop(optional)] link: bool,
) -> impl IntoView {
    let auth = use_auth();
    let actions = use_actions();
    let class = if link {
        Theme::BUTTON_LINK
    } else {
        Theme::BUTTON_PRIMARY
    };

    let on_click = move |_| {
        if let Some(actions) = actions {
            actions.spawn(move |actions| action.run(actions));
        }
    };

    view! {
        <button
            type="button"
            class=class
            class:cursor-not-allowed=move || auth.busy.get()
            class:opacity-70=move || auth.busy.get()
            disabled=move || auth.busy.get()
            on:click=on_click
        >
            {label}
        </button>
    }
}
