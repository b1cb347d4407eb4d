use dioxus::prelude::*;

use crate::components::Modal;

/// Delete Confirmation Modal for Users
#[component]
pub fn ConfirmDeleteUserModal(email: Signal<String>, delete_confirm_open: Signal<bool>, handle_delete: EventHandler<MouseEvent>) -> Element {
    rsx! {
        Modal {
            open: delete_confirm_open(),
            on_close: move |_| delete_confirm_open.set(false),
            title: "Delete User",
            actions: rsx! {
                button { class: "btn btn-error", onclick: handle_delete, "Delete" }
            },
            div { class: "flex flex-col gap-4",
                p { "Are you sure you want to delete user \"{email()}\"?" }
                p { class: "text-sm text-gray-500", "This action cannot be undone." }
            }
        }
    }
}
