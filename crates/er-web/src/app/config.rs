//! Startup configuration for the web client.
//!
//! Values come from build-time environment variables and can be overridden per
//! browser through a JSON object stored in localStorage.

use std::{collections::HashMap, rc::Rc};

use er_types::config::ClientConfig;

use crate::app::{
    api::{ApiClient, HttpTransport}, storage::{BrowserStorage, StorageType}
};

/// localStorage key holding `{"api_base": "...", "credentials": "bearer", ...}` overrides.
pub const CONFIG_STORAGE_KEY: &str = "er_web_config";

/// Resolve the client configuration.
pub fn load() -> ClientConfig {
    let config = ClientConfig::default().with_overrides([
        ("api_base", option_env!("ER_API_BASE")),
        ("credentials", option_env!("ER_CREDENTIALS")),
        ("probe", option_env!("ER_PROBE")),
        ("auth_failure", option_env!("ER_AUTH_FAILURE")),
        ("token_key", option_env!("ER_TOKEN_KEY")),
    ]);

    let stored = BrowserStorage::new(StorageType::Local).get_json::<HashMap<String, String>>(CONFIG_STORAGE_KEY);
    let config = match stored {
        Some(overrides) => config.with_overrides(overrides.iter().map(|(k, v)| (k.as_str(), Some(v.as_str())))),
        None => config,
    };

    tracing::debug!(api_base = %config.api_base, credentials = ?config.credentials, probe = %config.probe, "client configuration resolved");
    config
}

/// Build the API client used by the running app.
pub fn build_client(config: ClientConfig) -> ApiClient {
    let transport = Rc::new(HttpTransport::new(config.clone()));
    let tokens = Rc::new(BrowserStorage::new(StorageType::Session));
    ApiClient::new(config, transport, tokens)
}
