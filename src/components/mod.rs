//! Shared UI components used by the two page views.

pub mod layout;
pub mod ui;

pub use layout::Header;
pub use ui::{ActionButton, AuthAction, Modal, Spinner};
