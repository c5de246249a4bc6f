mod action_button;
mod modal;
mod spinner;

pub use action_button::{ActionButton, AuthAction};
pub use modal::Modal;
pub use spinner::Spinner;
