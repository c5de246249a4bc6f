//! Auth action handlers. Each handler makes at most one provider call and
//! always ends by showing a modal; nothing is returned to the caller.

use super::{
    form::{read_credentials, read_email, CredentialSource},
    messages::Messages,
    modal::{ModalNotifier, ModalSurface},
    provider::IdentityProvider,
    view::{AuthSurface, View, ViewController},
};
use std::{cell::Cell, rc::Rc};
use tracing::{debug, error, info};

/// Everything a handler touches on the page.
pub trait AuthUi: AuthSurface + ModalSurface + CredentialSource + Clone {}

impl<T: AuthSurface + ModalSurface + CredentialSource + Clone> AuthUi for T {}

/// Register, sign-in, sign-out, and reset-password handlers bound to one
/// provider and one page.
pub struct AuthActions<P, U> {
    provider: Rc<P>,
    ui: U,
    views: ViewController<U, P>,
    modal: ModalNotifier<U>,
    messages: &'static Messages,
    in_flight: Cell<bool>,
}

/// Marks a provider call as outstanding until dropped.
struct InFlight<'a, U: AuthSurface> {
    flag: &'a Cell<bool>,
    ui: &'a U,
}

impl<U: AuthSurface> Drop for InFlight<'_, U> {
    fn drop(&mut self) {
        self.flag.set(false);
        self.ui.set_busy(false);
    }
}

impl<P: IdentityProvider, U: AuthUi> AuthActions<P, U> {
    pub fn new(provider: Rc<P>, ui: U, messages: &'static Messages) -> Self {
        Self {
            views: ViewController::new(ui.clone(), Rc::clone(&provider)),
            modal: ModalNotifier::new(ui.clone()),
            provider,
            ui,
            messages,
            in_flight: Cell::new(false),
        }
    }

    pub fn views(&self) -> &ViewController<U, P> {
        &self.views
    }

    pub fn modal(&self) -> &ModalNotifier<U> {
        &self.modal
    }

    /// True while a provider call started by a handler is outstanding.
    pub fn is_busy(&self) -> bool {
        self.in_flight.get()
    }

    /// Returns `None` when another handler's provider call is still pending.
    fn begin(&self, action: &'static str) -> Option<InFlight<'_, U>> {
        if self.in_flight.replace(true) {
            debug!(action, "ignoring re-entry while a provider call is pending");
            return None;
        }
        self.ui.set_busy(true);
        Some(InFlight {
            flag: &self.in_flight,
            ui: &self.ui,
        })
    }

    /// Creates an account from the form fields. The view does not change.
    pub async fn register(&self) {
        let Some(_guard) = self.begin("register") else {
            return;
        };
        let credentials = read_credentials(&self.ui);
        if !credentials.is_complete() {
            self.modal.show(self.messages.missing_credentials);
            return;
        }

        match self.provider.create_account(&credentials).await {
            Ok(user) => {
                info!(uid = %user.uid, "account created");
                self.modal.show(self.messages.register_success);
            }
            Err(err) => {
                error!(code = %err.code, "Signup Error: {}", err.message);
                self.modal.show(&self.messages.register_failed(&err));
            }
        }
    }

    /// Signs in with the form fields and returns to the main view on success.
    pub async fn sign_in(&self) {
        let Some(_guard) = self.begin("sign_in") else {
            return;
        };
        let credentials = read_credentials(&self.ui);
        if !credentials.is_complete() {
            self.modal.show(self.messages.missing_credentials);
            return;
        }

        match self.provider.sign_in(&credentials).await {
            Ok(user) => {
                info!(uid = %user.uid, "signed in");
                self.modal.show(self.messages.sign_in_success);
                self.views.navigate_to(View::Main);
            }
            Err(err) => {
                error!(code = %err.code, "Login Error: {}", err.message);
                self.modal.show(&self.messages.sign_in_failed(&err));
            }
        }
    }

    /// Ends the session and returns to the main view on success.
    pub async fn sign_out(&self) {
        let Some(_guard) = self.begin("sign_out") else {
            return;
        };

        match self.provider.sign_out().await {
            Ok(()) => {
                info!("signed out");
                self.modal.show(self.messages.sign_out_success);
                self.views.navigate_to(View::Main);
            }
            Err(err) => {
                error!(code = %err.code, "Logout Error: {}", err.message);
                self.modal.show(&self.messages.sign_out_failed(&err));
            }
        }
    }

    /// Sends a password reset email to the address in the email field.
    pub async fn reset_password(&self) {
        let Some(_guard) = self.begin("reset_password") else {
            return;
        };
        let email = read_email(&self.ui);
        if email.is_empty() {
            self.modal.show(self.messages.missing_reset_email);
            return;
        }

        match self.provider.send_password_reset(&email).await {
            Ok(()) => {
                info!("password reset email requested");
                self.modal.show(&self.messages.reset_sent(&email));
            }
            Err(err) => {
                error!(code = %err.code, "Reset Password Error: {}", err.message);
                self.modal.show(&self.messages.reset_failed(&err));
            }
        }
    }
}
