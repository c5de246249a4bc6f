//! Reactive page state for the auth UI. The handlers and the view controller
//! write through the surface traits; components read the signals. The
//! context is `Copy`, so every closure in the page can hold its own handle.

use crate::features::auth::{
    firebase::FirebaseAuth,
    form::CredentialSource,
    handlers::AuthActions,
    modal::ModalSurface,
    view::{AuthPanel, AuthSurface, HeaderIcon, View},
};
use leptos::{html, prelude::*, task::spawn_local};
use std::{future::Future, rc::Rc};

/// Handlers as wired in the browser.
pub type WebAuthActions = AuthActions<FirebaseAuth, AuthContext>;

/// Page state shared through Leptos context.
#[derive(Clone, Copy)]
pub struct AuthContext {
    pub view: RwSignal<View>,
    pub panel: RwSignal<AuthPanel>,
    pub header_icon: RwSignal<HeaderIcon>,
    pub busy: RwSignal<bool>,
    pub modal_message: RwSignal<String>,
    pub modal_visible: RwSignal<bool>,
    pub email_input: NodeRef<html::Input>,
    pub password_input: NodeRef<html::Input>,
}

impl AuthContext {
    pub fn new() -> Self {
        Self {
            view: RwSignal::new(View::Main),
            panel: RwSignal::new(AuthPanel::SignedOut),
            header_icon: RwSignal::new(HeaderIcon::ANONYMOUS),
            busy: RwSignal::new(false),
            modal_message: RwSignal::new(String::new()),
            modal_visible: RwSignal::new(false),
            email_input: NodeRef::new(),
            password_input: NodeRef::new(),
        }
    }

    fn input_value(input: NodeRef<html::Input>) -> String {
        input
            .get_untracked()
            .map(|element| element.value())
            .unwrap_or_default()
    }
}

impl Default for AuthContext {
    fn default() -> Self {
        Self::new()
    }
}

impl AuthSurface for AuthContext {
    fn show_view(&self, view: View) {
        self.view.set(view);
    }

    fn render_panel(&self, panel: &AuthPanel) {
        self.panel.set(panel.clone());
    }

    fn set_header_icon(&self, icon: HeaderIcon) {
        self.header_icon.set(icon);
    }

    fn set_busy(&self, busy: bool) {
        self.busy.set(busy);
    }
}

impl ModalSurface for AuthContext {
    fn set_message(&self, message: &str) {
        self.modal_message.set(message.to_string());
    }

    fn set_modal_visible(&self, visible: bool) {
        self.modal_visible.set(visible);
    }
}

impl CredentialSource for AuthContext {
    fn email_value(&self) -> String {
        Self::input_value(self.email_input)
    }

    fn password_value(&self) -> String {
        Self::input_value(self.password_input)
    }
}

/// Handle to the handlers. The handlers are `!Send`, so they live in local
/// storage and are reached through this `Copy` handle.
#[derive(Clone, Copy)]
pub struct ActionsHandle(StoredValue<Rc<WebAuthActions>, LocalStorage>);

impl ActionsHandle {
    pub fn new(actions: Rc<WebAuthActions>) -> Self {
        Self(StoredValue::new_local(actions))
    }

    pub fn get(&self) -> Rc<WebAuthActions> {
        self.0.get_value()
    }

    /// Runs an async handler on the local executor.
    pub fn spawn<F, Fut>(&self, run: F)
    where
        F: FnOnce(Rc<WebAuthActions>) -> Fut,
        Fut: Future<Output = ()> + 'static,
    {
        spawn_local(run(self.get()));
    }
}

/// Returns the auth page state from context.
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().unwrap_or_default()
}

/// Returns the handlers from context, if the app has wired them.
pub fn use_actions() -> Option<ActionsHandle> {
    use_context::<ActionsHandle>()
}
