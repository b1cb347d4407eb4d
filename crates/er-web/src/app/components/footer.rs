use dioxus::prelude::*;

use crate::app::logging::{get_log_level, level_name, parse_level, set_log_level};

const LEVELS: [&str; 6] = ["off", "error", "warn", "info", "debug", "trace"];

#[component]
pub fn Footer() -> Element {
    let mut level = use_signal(|| level_name(get_log_level()));

    rsx! {
        footer { class: "footer footer-center text-base-content p-4",
            aside { class: "flex items-center gap-4",
                p { "Event Registration" }
                label { class: "flex items-center gap-2 text-xs opacity-60",
                    "Log level"
                    select {
                        class: "select select-bordered select-xs",
                        value: level(),
                        onchange: move |e| {
                            if let Some(filter) = parse_level(&e.value()) {
                                set_log_level(filter);
                                level.set(level_name(filter));
                            }
                        },
                        for name in LEVELS {
                            option { value: name, selected: name == level(), {name} }
                        }
                    }
                }
            }
        }
    }
}
