pub mod context;
pub mod hooks;

pub use context::{AuthState, use_auth_provider};
pub use hooks::{use_api, use_auth};
