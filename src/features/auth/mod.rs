//! Auth feature module: the provider boundary, the action handlers, and the
//! view logic they drive. Everything outside the `wasm32`-gated adapters is
//! platform independent and talks to the page only through the surface
//! traits in [`view`], [`modal`], and [`form`].
//!
//! Flow Overview: a handler reads the form, validates non-emptiness, makes
//! one provider call, and reports the outcome through the modal. Login state
//! is never inferred by the UI; the provider pushes it to the listener
//! registered by [`listener::watch_auth_state`].

pub mod error;
pub mod form;
pub mod handlers;
pub mod listener;
pub mod messages;
pub mod modal;
pub mod provider;
pub mod session;
pub mod types;
pub mod view;

#[cfg(target_arch = "wasm32")]
pub(crate) mod client;
#[cfg(target_arch = "wasm32")]
pub mod firebase;
#[cfg(target_arch = "wasm32")]
pub mod state;

pub use error::{AuthErrorKind, ProviderError};
pub use handlers::AuthActions;
pub use provider::{AuthStateListeners, IdentityProvider, Subscription};
pub use types::{Credentials, User};
pub use view::{AuthPanel, AuthSurface, HeaderIcon, View, ViewController};
