pub mod actions;
mod modals;
mod users;

use dioxus::prelude::*;
use er_types::session::Requirement;

use crate::components::{Layout, RequireAuth};

/// Organiser-only user administration.
#[component]
pub fn AdminPage() -> Element {
    rsx! {
        Layout {
            RequireAuth {
                requirement: Requirement::Organiser,
                users::UsersSection {}
            }
        }
    }
}
