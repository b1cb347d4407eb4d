//! Users table with add, edit and delete.

use dioxus::prelude::*;
use er_types::{
    roster::{Roster, RosterAction}, users::UserRecord
};

use super::{
    actions::{EditTarget, load_users, remove_user}, modals::{ConfirmDeleteUserModal, UserModal}
};
use crate::{
    app::auth::use_api, components::{Table, TableActions, use_toast}
};

/// Fold a confirmed mutation into the table state.
pub(super) fn dispatch(mut roster: Signal<Roster>, action: RosterAction) {
    let next = roster.peek().clone().apply(action);
    roster.set(next);
}

fn window_cell(user: &UserRecord) -> String {
    let fmt = |t: &chrono::NaiveDateTime| t.format("%Y-%m-%d %H:%M").to_string();
    match (&user.participation_start_time, &user.participation_end_time) {
        (Some(start), Some(end)) => format!("{} to {}", fmt(start), fmt(end)),
        (Some(start), None) => format!("from {}", fmt(start)),
        (None, Some(end)) => format!("until {}", fmt(end)),
        (None, None) => "-".to_string(),
    }
}

/// Main Users Section component
#[component]
pub fn UsersSection() -> Element {
    let client = use_api();
    let toast = use_toast();
    let roster = use_signal(Roster::default);
    let mut load_error = use_signal(|| None::<String>);
    let mut loaded = use_signal(|| false);

    let mut modal_open = use_signal(|| false);
    let mut edit_target = use_signal(|| EditTarget::Add);

    let mut delete_confirm_open = use_signal(|| false);
    let mut delete_target_email = use_signal(String::new);
    let mut delete_target_id = use_signal(|| 0i64);

    {
        let client = client.clone();
        use_effect(move || {
            let client = client.clone();
            spawn(async move {
                match load_users(&client).await {
                    Ok(action) => dispatch(roster, action),
                    Err(e) => load_error.set(Some(format!("Failed to load users: {e}"))),
                }
                loaded.set(true);
            });
        });
    }

    let mut open_delete_confirm = move |target_id: i64, target_email: String| {
        delete_target_id.set(target_id);
        delete_target_email.set(target_email);
        delete_confirm_open.set(true);
    };

    let handle_delete = move |_| {
        let client = client.clone();
        let target_id = delete_target_id();
        let target_email = delete_target_email();

        spawn(async move {
            match remove_user(&client, target_id).await {
                Ok(action) => {
                    delete_confirm_open.set(false);
                    dispatch(roster, action);
                    toast.success(&format!("User '{}' deleted successfully", target_email));
                }
                Err(e) => {
                    delete_confirm_open.set(false);
                    toast.error(&format!("Failed to delete user: {}", e));
                }
            }
        });
    };

    rsx! {
        div { class: "card bg-base-200 shadow-xl self-start w-full",
            div { class: "card-body",
                div { class: "flex justify-between items-center",
                    h2 { class: "card-title", "Users" }
                    button {
                        class: "btn btn-primary btn-sm",
                        onclick: move |_| {
                            edit_target.set(EditTarget::Add);
                            modal_open.set(true);
                        },
                        "Add User"
                    }
                }
                if let Some(err) = load_error() {
                    div { class: "alert alert-error", span { "{err}" } }
                } else if !loaded() {
                    span { class: "loading loading-spinner loading-md" }
                } else if roster.read().is_empty() {
                    p { class: "text-gray-500", "No users registered yet." }
                } else {
                    Table {
                        headers: vec!["Email", "Role", "Meal Preference", "Meals", "Participation", "Actions"],
                        for user in roster.read().iter().cloned() {
                            tr { key: "{user.id}",
                                td { class: "text-left", "{user.email}" }
                                td { class: "text-center",
                                    if user.is_organiser {
                                        span { class: "badge badge-primary", "Organiser" }
                                    } else {
                                        span { class: "badge badge-ghost", "Participant" }
                                    }
                                }
                                td { class: "text-center", {user.meal_preference.map(|p| p.label()).unwrap_or("-")} }
                                td { class: "text-center", "{user.meals}" }
                                td { class: "text-center", {window_cell(&user)} }
                                td { class: "text-right",
                                    TableActions {
                                        on_edit: {
                                            let id = user.id;
                                            move |_| {
                                                edit_target.set(EditTarget::Update(id));
                                                modal_open.set(true);
                                            }
                                        },
                                        on_delete: {
                                            let id = user.id;
                                            let email = user.email.clone();
                                            move |_| open_delete_confirm(id, email.clone())
                                        },
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }

        UserModal { open: modal_open, target: edit_target, roster }
        ConfirmDeleteUserModal {
            email: delete_target_email,
            delete_confirm_open,
            handle_delete,
        }
    }
}
