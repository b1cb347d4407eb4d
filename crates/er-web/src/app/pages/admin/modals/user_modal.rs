use dioxus::prelude::*;
use er_types::{roster::Roster, users::UserDraft, validation::FieldErrors};

use crate::{
    app::{
        auth::use_api, forms::{SubmitError, today}
    }, components::{Modal, UserFields, use_toast}, pages::admin::{
        actions::{EditTarget, submit_user}, users::dispatch
    }
};

/// Add/Update user dialog. Stays open with the error shown until a save succeeds.
#[component]
pub fn UserModal(open: Signal<bool>, target: Signal<EditTarget>, roster: Signal<Roster>) -> Element {
    let client = use_api();
    let toast = use_toast();
    let mut draft = use_signal(UserDraft::empty);
    let mut field_errors = use_signal(FieldErrors::new);
    let mut save_error = use_signal(|| None::<String>);

    // Prefill whenever the dialog opens
    use_effect(move || {
        if !open() {
            return;
        }
        let prefill = match target() {
            EditTarget::Add => UserDraft::empty(),
            EditTarget::Update(id) => roster.peek().get(id).map(UserDraft::from_record).unwrap_or_default(),
        };
        draft.set(prefill);
        field_errors.set(FieldErrors::new());
        save_error.set(None);
    });

    let on_save = move |_| {
        save_error.set(None);
        let client = client.clone();
        let target_val = target();
        let draft_val = draft();

        spawn(async move {
            match submit_user(&client, target_val, &draft_val, today()).await {
                Ok(action) => {
                    dispatch(roster, action);
                    open.set(false);
                    toast.success(&format!("User '{}' saved", draft_val.email.trim()));
                }
                Err(SubmitError::Invalid(errors)) => {
                    field_errors.set(errors);
                }
                Err(err) => {
                    tracing::warn!(%err, "saving user failed");
                    save_error.set(Some(err.to_string()));
                }
            }
        });
    };

    let is_add = target() == EditTarget::Add;

    rsx! {
        Modal {
            open: open(),
            on_close: move |_| open.set(false),
            title: target().title(),
            actions: rsx! {
                button { class: "btn btn-primary", onclick: on_save, if is_add { "Create" } else { "Save" } }
            },
            UserFields {
                draft,
                errors: field_errors,
                show_password: is_add,
                show_organiser: true,
            }
            if let Some(error) = save_error() {
                div { class: "alert alert-error text-sm mt-4", role: "alert", span { "{error}" } }
            }
        }
    }
}
