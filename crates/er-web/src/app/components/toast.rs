use std::time::Duration;

use dioxus::prelude::*;
use gloo_timers::future::sleep;

#[derive(Clone, Copy, PartialEq, Debug)]
pub enum ToastType {
    Success,
    Error,
    Info,
}

#[derive(Clone, PartialEq, Debug)]
pub struct ToastMessage {
    pub message: String,
    pub toast_type: ToastType,
    /// Bumped on every show so repeated text still counts as a new toast.
    pub seq: u64,
}

/// Handle to the page-wide toast slot.
#[derive(Clone, Copy, PartialEq)]
pub struct ToastContext {
    message: Signal<Option<ToastMessage>>,
    shown: Signal<u64>,
}

impl ToastContext {
    pub fn show(mut self, message: impl Into<String>, toast_type: ToastType) {
        let seq = *self.shown.peek() + 1;
        self.shown.set(seq);
        self.message.set(Some(ToastMessage {
            message: message.into(),
            toast_type,
            seq,
        }));
    }

    pub fn success(self, message: &str) {
        self.show(message, ToastType::Success);
    }

    pub fn error(self, message: &str) {
        self.show(message, ToastType::Error);
    }

    pub fn info(self, message: &str) {
        self.show(message, ToastType::Info);
    }

    pub fn signal(&self) -> Signal<Option<ToastMessage>> {
        self.message
    }
}

pub fn use_toast_provider() -> ToastContext {
    let message = use_signal(|| None::<ToastMessage>);
    let shown = use_signal(|| 0);
    use_context_provider(|| ToastContext { message, shown })
}

pub fn use_toast() -> ToastContext {
    use_context::<ToastContext>()
}

/// Whether the timer armed for `shown` may still clear the slot.
fn still_showing(current: &Option<ToastMessage>, shown: &ToastMessage) -> bool {
    current.as_ref() == Some(shown)
}

#[component]
pub fn Toast(mut message: Signal<Option<ToastMessage>>) -> Element {
    // Auto-dismiss after 5 seconds; a newer message restarts the clock
    use_effect(move || {
        if let Some(shown) = message() {
            spawn(async move {
                sleep(Duration::from_secs(5)).await;
                if still_showing(&message.peek(), &shown) {
                    message.set(None);
                }
            });
        }
    });

    let Some(toast) = message() else {
        return rsx! {};
    };

    let alert_class = match toast.toast_type {
        ToastType::Success => "alert-success",
        ToastType::Error => "alert-error",
        ToastType::Info => "alert-info",
    };

    rsx! {
        div { class: "toast toast-bottom toast-end z-50",
            div {
                class: "alert {alert_class}",
                style: "max-width: 30vw; word-wrap: break-word; white-space: normal;",
                span { "{toast.message}" }
                button {
                    class: "btn btn-sm btn-circle btn-ghost ml-2",
                    onclick: move |_| message.set(None),
                    "✕"
                }
            }
        }
    }
}
