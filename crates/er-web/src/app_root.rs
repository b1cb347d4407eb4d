use dioxus::prelude::*;

use crate::{
    app::{self, auth::use_auth_provider, config}, components::use_toast_provider
};

/// Root shell: wraps the router and global providers.
#[component]
pub fn app_root() -> Element {
    let client = use_hook(|| config::build_client(config::load()));
    use_context_provider(|| client.clone());
    use_auth_provider(client);
    use_toast_provider();

    rsx! {
        document::Title { "Event Registration" }
        document::Stylesheet { href: clean_asset_path(asset!("/assets/tailwind.css", AssetOptions::builder().with_hash_suffix(false)).to_string()) }
        div {
            app::routes::AppRouter {}
        }
    }
}

/// Strip everything before `/assets/`; `asset!` yields an absolute path under `cargo run`.
pub fn clean_asset_path(path: String) -> String {
    if let Some(idx) = path.find("/assets/") {
        path[idx..].to_string()
    } else {
        path
    }
}
