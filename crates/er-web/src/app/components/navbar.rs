use dioxus::prelude::*;

use crate::{Routes, app::auth::use_auth};

#[component]
pub fn NavBar() -> Element {
    let auth = use_auth();
    let session = auth.read().session.clone();
    // Role may still be unresolved; the admin page does its own check.
    let show_admin = session.is_authenticated() && session.is_organiser() != Some(false);

    rsx! {
        div { class: "navbar bg-base-200 shadow-sm",
            div { class: "flex-1",
                Link { class: "btn btn-ghost text-xl", to: Routes::MainPage {}, "Registration System" }
                ul { class: "menu menu-horizontal px-1",
                    if session.is_authenticated() {
                        li { Link { to: Routes::ProfilePage {}, "Profile" } }
                        if show_admin {
                            li { Link { to: Routes::AdminPage {}, "Admin" } }
                        }
                    }
                }
            }

            div { class: "flex-none gap-2",
                if session.is_authenticated() {
                    if let Some(email) = session.email() {
                        span { class: "badge badge-ghost mr-2", "{email}" }
                    }
                    Link { class: "btn btn-sm btn-outline", to: Routes::LogoutPage {}, "Logout" }
                } else if !session.is_loading() {
                    Link { class: "btn btn-sm btn-ghost", to: Routes::LoginPage {}, "Login" }
                    Link { class: "btn btn-sm btn-primary", to: Routes::RegisterPage {}, "Register" }
                }
            }
        }
    }
}
