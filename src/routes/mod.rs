//! The two top-level views. Both stay mounted; the view controller decides
//! which one is displayed.

mod auth_page;
mod main_page;

pub use auth_page::AuthPage;
pub use main_page::MainPage;
