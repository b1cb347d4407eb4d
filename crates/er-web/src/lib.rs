//! Event registration web front end.
//!
//! A Dioxus single-page app over the registration API: login, self
//! registration, the participant profile and the organiser user table.

pub mod app;
pub mod app_root;
pub mod error;

pub use app::{components, pages, routes};
pub use routes::Routes;
