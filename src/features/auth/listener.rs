//! Auth-state listener: the only place the UI learns whether a user is
//! signed in.

use super::{
    provider::{IdentityProvider, Subscription},
    view::{render_auth_panel, AuthSurface},
};
use tracing::debug;

/// Re-renders the auth panel on every provider state change, including the
/// initial restore. Register once at startup.
pub fn watch_auth_state<P, S>(provider: &P, surface: S) -> Subscription
where
    P: IdentityProvider,
    S: AuthSurface + 'static,
{
    provider.on_auth_state_changed(move |user| {
        debug!(signed_in = user.is_some(), "auth state changed");
        render_auth_panel(&surface, user);
    })
}
