use dioxus::prelude::*;

use crate::{Routes, components::Layout};

#[component]
pub fn NotFoundPage(route: Vec<String>) -> Element {
    let path = route.join("/");
    rsx! {
        Layout {
            div { class: "flex flex-col items-center gap-4 mt-16",
                p { "Not found: /{path}" }
                Link { class: "btn btn-ghost", to: Routes::MainPage {}, "Back to start" }
            }
        }
    }
}
