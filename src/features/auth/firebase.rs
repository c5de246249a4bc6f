//! Firebase Authentication provider over the Identity Toolkit REST API.
//!
//! The session record lives in `localStorage` so a reload restores the
//! signed-in user. Sign-out is local, like the Firebase SDK: the record is
//! dropped and listeners are told. Listeners registered before
//! [`FirebaseAuth::initialize`] completes are first called when the restore
//! finishes; later registrations are called immediately.

use super::{
    client,
    error::ProviderError,
    provider::{AuthStateListeners, IdentityProvider, Subscription},
    session::{Restore, StoredSession, SESSION_STORAGE_KEY},
    types::{Credentials, User},
};
use crate::app_lib::{config::AppConfig, storage::BrowserStorage};
use std::cell::{Cell, RefCell};
use tracing::{debug, info, warn};

pub struct FirebaseAuth {
    config: AppConfig,
    storage: BrowserStorage,
    session: RefCell<Option<StoredSession>>,
    listeners: AuthStateListeners,
    ready: Cell<bool>,
}

fn now_ms() -> u64 {
    js_sys::Date::now() as u64
}

impl FirebaseAuth {
    /// Loads any stored session without touching the network.
    pub fn new(config: AppConfig) -> Self {
        let storage = BrowserStorage;
        let session = storage.get_json::<StoredSession>(SESSION_STORAGE_KEY);
        Self {
            config,
            storage,
            session: RefCell::new(session),
            listeners: AuthStateListeners::new(),
            ready: Cell::new(false),
        }
    }

    /// Refreshes a stored session whose id token has expired, then reports
    /// the restored state to every listener. Call once at startup.
    pub async fn initialize(&self) {
        let stale = self
            .session
            .borrow()
            .as_ref()
            .filter(|session| session.needs_refresh(now_ms()))
            .cloned();

        if let Some(stale) = stale {
            let refresh = client::refresh_token(&self.config, &stale.refresh_token).await;
            let restore =
                Restore::resolve(&stale, self.session.borrow().as_ref(), refresh, now_ms());
            match restore {
                Restore::Refreshed(session) => {
                    debug!(uid = %session.uid, "session refreshed");
                    self.persist(Some(session));
                }
                Restore::Cleared => self.persist(None),
                Restore::Superseded => debug!("session changed during refresh"),
            }
        }

        self.ready.set(true);
        let user = self.current_user();
        info!(signed_in = user.is_some(), "auth state restored");
        self.listeners.notify(user.as_ref());
    }

    /// Stores or clears the session record and notifies listeners.
    fn establish(&self, session: Option<StoredSession>) -> Option<User> {
        self.persist(session);
        let user = self.current_user();
        self.listeners.notify(user.as_ref());
        user
    }

    fn persist(&self, session: Option<StoredSession>) {
        match &session {
            Some(session) => {
                if let Err(err) = self.storage.set_json(SESSION_STORAGE_KEY, session) {
                    warn!("session not persisted: {err}");
                }
            }
            None => self.storage.remove(SESSION_STORAGE_KEY),
        }
        self.session.replace(session);
    }
}

impl IdentityProvider for FirebaseAuth {
    fn current_user(&self) -> Option<User> {
        self.session.borrow().as_ref().map(StoredSession::user)
    }

    async fn create_account(&self, credentials: &Credentials) -> Result<User, ProviderError> {
        let response = client::sign_up(&self.config, credentials).await?;
        let session = StoredSession::from_password_auth(response, now_ms())?;
        self.establish(Some(session))
            .ok_or_else(|| ProviderError::internal("Session was not established."))
    }

    async fn sign_in(&self, credentials: &Credentials) -> Result<User, ProviderError> {
        let response = client::sign_in_with_password(&self.config, credentials).await?;
        let session = StoredSession::from_password_auth(response, now_ms())?;
        self.establish(Some(session))
            .ok_or_else(|| ProviderError::internal("Session was not established."))
    }

    async fn sign_out(&self) -> Result<(), ProviderError> {
        self.establish(None);
        Ok(())
    }

    async fn send_password_reset(&self, email: &str) -> Result<(), ProviderError> {
        client::send_password_reset(&self.config, email).await?;
        Ok(())
    }

    fn on_auth_state_changed(&self, callback: impl Fn(Option<&User>) + 'static) -> Subscription {
        if self.ready.get() {
            callback(self.current_user().as_ref());
        }
        self.listeners.subscribe(callback)
    }
}
