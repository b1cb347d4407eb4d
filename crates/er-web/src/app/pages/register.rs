use dioxus::prelude::*;
use er_types::{users::UserDraft, validation::FieldErrors};

use crate::{
    Routes, app::{
        auth::{use_api, use_auth}, forms::{SubmitError, submit_registration, today}
    }, components::{Layout, UserFields, use_toast}
};

#[component]
pub fn RegisterPage() -> Element {
    let auth = use_auth();
    let client = use_api();
    let navigator = use_navigator();
    let toast = use_toast();

    let mut draft = use_signal(UserDraft::empty);
    let mut field_errors = use_signal(FieldErrors::new);
    let mut error_message = use_signal(|| None::<String>);
    let mut submitting = use_signal(|| false);

    use_effect(move || {
        if auth.read().session.is_authenticated() {
            navigator.push(Routes::ProfilePage {});
        }
    });

    let on_submit = move |evt: Event<FormData>| {
        evt.stop_propagation();
        evt.prevent_default();

        if submitting() {
            return;
        }

        error_message.set(None);
        submitting.set(true);

        let client = client.clone();
        spawn(async move {
            match submit_registration(&client, &draft(), today()).await {
                Ok(message) => {
                    toast.success(if message.is_empty() { "Registration successful" } else { message.as_str() });
                    draft.set(UserDraft::empty());
                    field_errors.set(FieldErrors::new());
                    navigator.push(Routes::LoginPage {});
                }
                Err(SubmitError::Invalid(errors)) => {
                    field_errors.set(errors);
                }
                Err(err) => {
                    tracing::warn!(%err, "registration failed");
                    error_message.set(Some(err.to_string()));
                }
            }
            submitting.set(false);
        });
    };

    rsx! {
        Layout {
            div { class: "flex items-center justify-center min-h-[calc(100vh-16rem)]",
                div { class: "card w-full max-w-lg bg-base-100 shadow-xl",
                    div { class: "card-body",
                        h2 { class: "card-title justify-center mb-4", "Register" }

                        form { onsubmit: on_submit,
                            class: "flex flex-col gap-4",
                            UserFields { draft, errors: field_errors }

                            if let Some(error) = error_message() {
                                div { class: "alert alert-error",
                                    span { "{error}" }
                                }
                            }

                            div { class: "card-actions justify-end mt-4",
                                button {
                                    r#type: "submit",
                                    class: "btn btn-primary w-full",
                                    disabled: submitting(),
                                    "Register"
                                }
                            }

                            p { class: "text-sm text-center",
                                "Already registered? "
                                Link { class: "link link-primary", to: Routes::LoginPage {}, "Login" }
                            }
                        }
                    }
                }
            }
        }
    }
}
