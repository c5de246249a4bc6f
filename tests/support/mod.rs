//! Test doubles for the page surface and the identity provider.

#![allow(dead_code)]

use doorway::features::auth::{
    form::CredentialSource,
    modal::ModalSurface,
    provider::{AuthStateListeners, IdentityProvider, Subscription},
    AuthPanel, AuthSurface, Credentials, HeaderIcon, ProviderError, User, View,
};
use secrecy::ExposeSecret;
use std::{
    cell::{Ref, RefCell},
    rc::Rc,
};

/// Everything a user could see on the page.
#[derive(Clone, Debug, PartialEq)]
pub struct UiState {
    pub main_visible: bool,
    pub login_visible: bool,
    pub panel: AuthPanel,
    pub icon: HeaderIcon,
    pub busy: bool,
    pub busy_history: Vec<bool>,
    pub modal_message: String,
    pub modal_visible: bool,
    pub email: String,
    pub password: String,
}

#[derive(Clone)]
pub struct FakeUi {
    state: Rc<RefCell<UiState>>,
}

impl FakeUi {
    /// Fresh page: main view visible, signed-out panel, empty form.
    pub fn new() -> Self {
        Self::with_fields("", "")
    }

    pub fn with_fields(email: &str, password: &str) -> Self {
        Self {
            state: Rc::new(RefCell::new(UiState {
                main_visible: true,
                login_visible: false,
                panel: AuthPanel::SignedOut,
                icon: HeaderIcon::ANONYMOUS,
                busy: false,
                busy_history: Vec::new(),
                modal_message: String::new(),
                modal_visible: false,
                email: email.to_string(),
                password: password.to_string(),
            })),
        }
    }

    pub fn type_fields(&self, email: &str, password: &str) {
        let mut state = self.state.borrow_mut();
        state.email = email.to_string();
        state.password = password.to_string();
    }

    pub fn state(&self) -> Ref<'_, UiState> {
        self.state.borrow()
    }

    pub fn snapshot(&self) -> UiState {
        self.state.borrow().clone()
    }

    pub fn visible_views(&self) -> Vec<View> {
        let state = self.state.borrow();
        let mut views = Vec::new();
        if state.main_visible {
            views.push(View::Main);
        }
        if state.login_visible {
            views.push(View::Login);
        }
        views
    }

    /// Text of the modal when it is showing.
    pub fn modal(&self) -> Option<String> {
        let state = self.state.borrow();
        state.modal_visible.then(|| state.modal_message.clone())
    }
}

impl AuthSurface for FakeUi {
    fn show_view(&self, view: View) {
        let mut state = self.state.borrow_mut();
        state.main_visible = view == View::Main;
        state.login_visible = view == View::Login;
    }

    fn render_panel(&self, panel: &AuthPanel) {
        self.state.borrow_mut().panel = panel.clone();
    }

    fn set_header_icon(&self, icon: HeaderIcon) {
        self.state.borrow_mut().icon = icon;
    }

    fn set_busy(&self, busy: bool) {
        let mut state = self.state.borrow_mut();
        state.busy = busy;
        state.busy_history.push(busy);
    }
}

impl ModalSurface for FakeUi {
    fn set_message(&self, message: &str) {
        self.state.borrow_mut().modal_message = message.to_string();
    }

    fn set_modal_visible(&self, visible: bool) {
        self.state.borrow_mut().modal_visible = visible;
    }
}

impl CredentialSource for FakeUi {
    fn email_value(&self) -> String {
        self.state.borrow().email.clone()
    }

    fn password_value(&self) -> String {
        self.state.borrow().password.clone()
    }
}

/// Provider call as recorded by [`FakeProvider`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Call {
    CreateAccount { email: String, password: String },
    SignIn { email: String, password: String },
    SignOut,
    SendPasswordReset { email: String },
}

/// In-memory provider. Every call suspends once before completing so
/// concurrent handler invocations interleave.
#[derive(Default)]
pub struct FakeProvider {
    calls: RefCell<Vec<Call>>,
    failure: RefCell<Option<ProviderError>>,
    user: RefCell<Option<User>>,
    listeners: AuthStateListeners,
}

impl FakeProvider {
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    pub fn signed_in(email: &str) -> Rc<Self> {
        let provider = Self::default();
        *provider.user.borrow_mut() = Some(user(email));
        Rc::new(provider)
    }

    /// Makes the next provider call fail with `err`.
    pub fn fail_next(&self, err: ProviderError) {
        *self.failure.borrow_mut() = Some(err);
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    /// Pushes a state change as the provider would on token expiry.
    pub fn set_user(&self, user: Option<User>) {
        *self.user.borrow_mut() = user.clone();
        self.listeners.notify(user.as_ref());
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    fn record(&self, call: Call) {
        self.calls.borrow_mut().push(call);
    }

    async fn settle(&self) -> Result<(), ProviderError> {
        tokio::task::yield_now().await;
        let failure = self.failure.borrow_mut().take();
        match failure {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

pub fn user(email: &str) -> User {
    User {
        uid: format!("uid-{email}"),
        email: email.to_string(),
    }
}

impl IdentityProvider for FakeProvider {
    fn current_user(&self) -> Option<User> {
        self.user.borrow().clone()
    }

    async fn create_account(&self, credentials: &Credentials) -> Result<User, ProviderError> {
        self.record(Call::CreateAccount {
            email: credentials.email().to_string(),
            password: credentials.password().expose_secret().to_string(),
        });
        self.settle().await?;
        let created = user(credentials.email());
        self.set_user(Some(created.clone()));
        Ok(created)
    }

    async fn sign_in(&self, credentials: &Credentials) -> Result<User, ProviderError> {
        self.record(Call::SignIn {
            email: credentials.email().to_string(),
            password: credentials.password().expose_secret().to_string(),
        });
        self.settle().await?;
        let signed_in = user(credentials.email());
        self.set_user(Some(signed_in.clone()));
        Ok(signed_in)
    }

    async fn sign_out(&self) -> Result<(), ProviderError> {
        self.record(Call::SignOut);
        self.settle().await?;
        self.set_user(None);
        Ok(())
    }

    async fn send_password_reset(&self, email: &str) -> Result<(), ProviderError> {
        self.record(Call::SendPasswordReset {
            email: email.to_string(),
        });
        self.settle().await
    }

    fn on_auth_state_changed(&self, callback: impl Fn(Option<&User>) + 'static) -> Subscription {
        callback(self.current_user().as_ref());
        self.listeners.subscribe(callback)
    }
}
