//! Browser sign-in panel backed by Firebase Authentication.
//!
//! The crate is split in two layers. The core (`features::auth` minus the
//! browser adapters, plus `app_lib`) is plain Rust and is tested natively
//! with fake UI and provider doubles. The browser layer (`app`, `components`,
//! `routes`, and the Firebase REST provider) only builds for `wasm32` and
//! renders the page with Leptos.
//!
//! Flow Overview: the page starts on the main view. The header icon opens the
//! auth view, where the user can register, sign in, or request a password
//! reset. Every action ends in a modal message. The provider pushes login
//! state changes to a listener that re-renders the auth panel.

pub mod app_lib;
pub mod features;

#[cfg(target_arch = "wasm32")]
pub mod app;
#[cfg(target_arch = "wasm32")]
pub mod components;
#[cfg(target_arch = "wasm32")]
pub mod routes;
