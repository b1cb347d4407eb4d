use dioxus::prelude::*;

use super::context::AuthState;
use crate::app::api::ApiClient;

/// Get current auth state from context
pub fn use_auth() -> Signal<AuthState> {
    use_context::<Signal<AuthState>>()
}

/// API client provided at the root.
pub fn use_api() -> ApiClient {
    use_context::<ApiClient>()
}
