//! View controller: which top-level container is visible and what the auth
//! panel shows. Page mutation goes through [`AuthSurface`] so the same logic
//! drives the Leptos page and the test doubles.

use super::{provider::IdentityProvider, types::User};
use std::rc::Rc;

/// Top-level containers. Exactly one is visible at a time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum View {
    #[default]
    Main,
    Login,
}

/// Content of the auth page's panel.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum AuthPanel {
    /// Read-only user info with a sign-out control; the form is hidden.
    SignedIn { email: String },
    /// Credential form; the user info block is hidden.
    #[default]
    SignedOut,
}

impl AuthPanel {
    pub fn for_user(user: Option<&User>) -> Self {
        match user {
            Some(user) => Self::SignedIn {
                email: user.email.clone(),
            },
            None => Self::SignedOut,
        }
    }

    pub fn header_icon(&self) -> HeaderIcon {
        match self {
            Self::SignedIn { .. } => HeaderIcon::AUTHENTICATED,
            Self::SignedOut => HeaderIcon::ANONYMOUS,
        }
    }

    pub fn is_signed_in(&self) -> bool {
        matches!(self, Self::SignedIn { .. })
    }
}

/// Header icon state: glyph plus click behavior.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HeaderIcon {
    pub glyph: &'static str,
    /// View opened on click.
    pub target: View,
    /// Whether the click's default link navigation is suppressed.
    pub prevent_default: bool,
}

impl HeaderIcon {
    pub const AUTHENTICATED: Self = Self {
        glyph: "👋",
        target: View::Login,
        prevent_default: false,
    };

    pub const ANONYMOUS: Self = Self {
        glyph: "👤",
        target: View::Login,
        prevent_default: true,
    };
}

impl Default for HeaderIcon {
    fn default() -> Self {
        Self::ANONYMOUS
    }
}

/// Page elements the view controller and handlers mutate.
pub trait AuthSurface {
    /// Shows `view` and hides the other container.
    fn show_view(&self, view: View);
    fn render_panel(&self, panel: &AuthPanel);
    fn set_header_icon(&self, icon: HeaderIcon);
    /// Disables the auth controls while a provider call is outstanding.
    fn set_busy(&self, busy: bool);
}

/// Renders the auth panel and header icon for `user`. Idempotent.
pub fn render_auth_panel(surface: &impl AuthSurface, user: Option<&User>) {
    let panel = AuthPanel::for_user(user);
    surface.render_panel(&panel);
    surface.set_header_icon(panel.header_icon());
}

/// Switches views, reading the session from the provider when the auth view
/// opens.
pub struct ViewController<S, P> {
    surface: S,
    provider: Rc<P>,
}

impl<S: Clone, P> Clone for ViewController<S, P> {
    fn clone(&self) -> Self {
        Self {
            surface: self.surface.clone(),
            provider: Rc::clone(&self.provider),
        }
    }
}

impl<S: AuthSurface, P: IdentityProvider> ViewController<S, P> {
    pub fn new(surface: S, provider: Rc<P>) -> Self {
        Self { surface, provider }
    }

    pub fn navigate_to(&self, view: View) {
        tracing::debug!(?view, "navigate");
        self.surface.show_view(view);
        if view == View::Login {
            self.render_auth_panel(self.provider.current_user().as_ref());
        }
    }

    pub fn go_back(&self) {
        self.navigate_to(View::Main);
    }

    pub fn render_auth_panel(&self, user: Option<&User>) {
        render_auth_panel(&self.surface, user);
    }

    /// Follows a header icon click. Returns whether the caller must suppress
    /// the event's default action.
    pub fn activate_header_icon(&self, icon: HeaderIcon) -> bool {
        self.navigate_to(icon.target);
        icon.prevent_default
    }
}
