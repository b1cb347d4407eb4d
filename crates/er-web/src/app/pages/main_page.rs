use dioxus::prelude::*;

use crate::{Routes, components::Layout};

/// Landing page with the two entry points.
#[component]
pub fn MainPage() -> Element {
    rsx! {
        Layout {
            div { class: "hero min-h-[calc(100vh-16rem)]",
                div { class: "hero-content text-center",
                    div { class: "max-w-md flex flex-col gap-6",
                        h1 { class: "text-4xl font-bold", "Event Registration" }
                        p { "Sign in to manage your attendance, or create an account to register." }
                        div { class: "flex justify-center gap-4",
                            Link { class: "btn btn-primary", to: Routes::LoginPage {}, "Login" }
                            Link { class: "btn btn-outline", to: Routes::RegisterPage {}, "Register" }
                        }
                    }
                }
            }
        }
    }
}
