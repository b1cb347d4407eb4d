use dioxus::prelude::*;

use crate::components::{Footer, NavBar, Toast, use_toast};

#[component]
pub fn Layout(children: Element) -> Element {
    let toast = use_toast();

    rsx! {
        div {
            class: "er-layout min-h-screen flex flex-col",
            header {
                NavBar {}
            }
            main {
                class: "er-main flex-grow p-4", {
                    children
                }
            }
            Footer {}
            Toast { message: toast.signal() }
        }
    }
}
