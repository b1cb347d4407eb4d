use dioxus::prelude::*;
use er_types::validation::{FIELD_EMAIL, FIELD_PASSWORD, FieldErrors};

use crate::{
    Routes, app::{
        auth::{AuthState, use_api, use_auth}, forms::{SubmitError, submit_login}
    }, components::{Layout, use_toast}
};

#[component]
pub fn LoginPage() -> Element {
    let mut auth = use_auth();
    let client = use_api();
    let navigator = use_navigator();
    let toast = use_toast();

    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut submitting = use_signal(|| false);
    let mut field_errors = use_signal(FieldErrors::new);
    let mut error_message = use_signal(|| None::<String>);

    // Redirect away from login if already authenticated
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
        field_errors.set(FieldErrors::new());
        submitting.set(true);

        let client = client.clone();
        spawn(async move {
            let email_val = email();
            match submit_login(&client, &email_val, &password()).await {
                Ok(response) => {
                    if !response.message.is_empty() {
                        toast.success(&response.message);
                    }
                    auth.set(AuthState::logged_in(email_val.trim()));
                    navigator.push(Routes::ProfilePage {});
                }
                Err(SubmitError::Invalid(errors)) => {
                    field_errors.set(errors);
                }
                Err(err) => {
                    tracing::warn!(%err, "login failed");
                    error_message.set(Some(format!("Login failed: {err}")));
                }
            }
            submitting.set(false);
        });
    };

    let errs = field_errors();

    rsx! {
        Layout {
            div { class: "flex items-center justify-center min-h-[calc(100vh-16rem)]",
                div { class: "card w-96 bg-base-100 shadow-xl",
                    div { class: "card-body",
                        h2 { class: "card-title justify-center mb-4", "Login" }

                        form { onsubmit: on_submit,
                            class: "flex flex-col gap-4",
                            div { class: "form-control w-full max-w-xs flex flex-col gap-2",
                                label { class: "label",
                                    span { class: "label-text", "Email" }
                                }
                                input {
                                    r#type: "email",
                                    placeholder: "name@example.com",
                                    class: if errs.contains_key(FIELD_EMAIL) { "input input-bordered w-full max-w-xs input-error" } else { "input input-bordered w-full max-w-xs" },
                                    value: "{email}",
                                    oninput: move |evt| email.set(evt.value()),
                                    autocomplete: "username",
                                }
                                if let Some(err) = errs.get(FIELD_EMAIL) {
                                    div { class: "text-error text-sm", "{err}" }
                                }
                            }

                            div { class: "form-control w-full max-w-xs flex flex-col gap-2",
                                label { class: "label",
                                    span { class: "label-text", "Password" }
                                }
                                input {
                                    r#type: "password",
                                    placeholder: "password",
                                    class: if errs.contains_key(FIELD_PASSWORD) { "input input-bordered w-full max-w-xs input-error" } else { "input input-bordered w-full max-w-xs" },
                                    value: "{password}",
                                    oninput: move |evt| password.set(evt.value()),
                                    autocomplete: "current-password",
                                }
                                if let Some(err) = errs.get(FIELD_PASSWORD) {
                                    div { class: "text-error text-sm", "{err}" }
                                }
                            }

                            if let Some(error) = error_message() {
                                div { class: "alert alert-error mt-4",
                                    span { "{error}" }
                                }
                            }

                            div { class: "card-actions justify-end mt-6",
                                button {
                                    r#type: "submit",
                                    class: "btn btn-primary w-full",
                                    disabled: submitting(),
                                    if submitting() {
                                        span { class: "loading loading-spinner" }
                                        span { "Logging in" }
                                    } else {
                                        span { "Login" }
                                    }
                                }
                            }

                            p { class: "text-sm text-center",
                                "No account yet? "
                                Link { class: "link link-primary", to: Routes::RegisterPage {}, "Register" }
                            }
                        }
                    }
                }
            }
        }
    }
}
