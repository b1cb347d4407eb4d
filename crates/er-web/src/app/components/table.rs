use dioxus::prelude::*;

/// Zebra table with a plain header row; first column is left aligned, last
/// column right aligned.
#[component]
pub fn Table(
    #[props(default = "table table-zebra table-pin-rows")] class: &'static str,
    headers: Vec<&'static str>,
    children: Element,
) -> Element {
    let last = headers.len().saturating_sub(1);

    rsx! {
        div { class: "overflow-x-auto",
            table { class: class,
                thead {
                    tr {
                        for (i, title) in headers.into_iter().enumerate() {
                            th {
                                class: if i == 0 { "text-left" } else if i == last { "text-right" } else { "text-center" },
                                "{title}"
                            }
                        }
                    }
                }
                tbody {
                    {children}
                }
            }
        }
    }
}

#[component]
pub fn TableActions(on_edit: Option<EventHandler<()>>, on_delete: Option<EventHandler<()>>) -> Element {
    rsx! {
        div { class: "join",
            if let Some(on_edit) = on_edit {
                button {
                    class: "btn btn-xs btn-primary join-item",
                    onclick: move |_| on_edit.call(()),
                    "Edit"
                }
            }
            if let Some(on_delete) = on_delete {
                button {
                    class: "btn btn-xs btn-secondary join-item",
                    onclick: move |_| on_delete.call(()),
                    "Delete"
                }
            }
        }
    }
}
