//! Identity provider boundary. The UI depends only on this trait; the
//! browser build plugs in the Firebase REST client and tests plug in fakes.

use super::{
    error::ProviderError,
    types::{Credentials, User},
};
use std::{
    cell::RefCell,
    rc::{Rc, Weak},
};

/// Email/password capability set of a hosted identity provider.
///
/// All calls run on the UI thread; implementations use interior mutability
/// and are shared behind `Rc`.
#[allow(async_fn_in_trait)]
pub trait IdentityProvider {
    /// Live session user, if any.
    fn current_user(&self) -> Option<User>;

    /// Creates an account and signs it in.
    async fn create_account(&self, credentials: &Credentials) -> Result<User, ProviderError>;

    async fn sign_in(&self, credentials: &Credentials) -> Result<User, ProviderError>;

    async fn sign_out(&self) -> Result<(), ProviderError>;

    async fn send_password_reset(&self, email: &str) -> Result<(), ProviderError>;

    /// Registers a callback invoked whenever the session is established,
    /// cleared, or restored.
    fn on_auth_state_changed(&self, callback: impl Fn(Option<&User>) + 'static) -> Subscription;
}

type Callback = Rc<dyn Fn(Option<&User>)>;

#[derive(Default)]
struct ListenerSet {
    next_id: u64,
    entries: Vec<(u64, Callback)>,
}

/// Registry of auth-state callbacks for provider implementations.
#[derive(Clone, Default)]
pub struct AuthStateListeners {
    inner: Rc<RefCell<ListenerSet>>,
}

impl AuthStateListeners {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&self, callback: impl Fn(Option<&User>) + 'static) -> Subscription {
        let callback: Callback = Rc::new(callback);
        let mut set = self.inner.borrow_mut();
        let id = set.next_id;
        set.next_id += 1;
        set.entries.push((id, callback));

        Subscription {
            id,
            set: Rc::downgrade(&self.inner),
        }
    }

    /// Calls every registered callback in subscription order. The list is
    /// snapshotted first, so callbacks may subscribe or unsubscribe.
    pub fn notify(&self, user: Option<&User>) {
        let callbacks: Vec<Callback> = self
            .inner
            .borrow()
            .entries
            .iter()
            .map(|(_, callback)| Rc::clone(callback))
            .collect();

        for callback in callbacks {
            callback(user);
        }
    }

    pub fn len(&self) -> usize {
        self.inner.borrow().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Handle returned by [`IdentityProvider::on_auth_state_changed`]. Dropping it
/// keeps the callback registered; call [`Subscription::unsubscribe`] to
/// detach.
pub struct Subscription {
    id: u64,
    set: Weak<RefCell<ListenerSet>>,
}

impl Subscription {
    pub fn unsubscribe(self) {
        if let Some(set) = self.set.upgrade() {
            set.borrow_mut().entries.retain(|(id, _)| *id != self.id);
        }
    }
}
