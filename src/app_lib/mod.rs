//! Shared frontend utilities for configuration, errors, HTTP access, browser
//! storage, logging, and build metadata.
//!
//! ## Provider endpoints
//!
//! The Firebase provider talks to two hosts:
//!
//! 1. **Identity Toolkit** (`accounts:signUp`, `accounts:signInWithPassword`,
//!    `accounts:sendOobCode`) for account operations.
//! 2. **Secure Token** (`token`) to refresh an expired id token when a stored
//!    session is restored on page load.
//!
//! Both hosts take the project API key as the `key` query parameter. The key
//! is public configuration; credentials and tokens are never logged.

#[cfg(target_arch = "wasm32")]
pub(crate) mod api;
#[allow(clippy::doc_markdown, clippy::needless_raw_string_hashes)]
pub mod built_info {
    include!(concat!(env!("OUT_DIR"), "/built.rs"));
}
pub mod config;
pub mod errors;
pub mod logging;
pub mod storage;
pub mod theme;

pub const GIT_COMMIT_HASH: &str = match built_info::GIT_COMMIT_HASH {
    Some(hash) => hash,
    None => "unknown",
};

pub use errors::AppError;
