//! Client for the registration REST API.
//!
//! `ApiClient` is provided to pages through Dioxus context. It delegates the
//! actual HTTP exchange to a [`Transport`] so the request/response contract can
//! be exercised without a browser.

pub mod auth;
pub mod http;
pub mod users;

use std::rc::Rc;

use async_trait::async_trait;
use er_types::config::{ClientConfig, CredentialMode};
pub use reqwest::Method;
use serde::{Serialize, de::DeserializeOwned};
use tracing::{debug, warn};

pub use self::http::HttpTransport;
use crate::error::ApiError;

/// A request as handed to the transport. `path` is relative to the API base.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    pub body: Option<serde_json::Value>,
    pub bearer: Option<String>,
}

/// Raw response: status code and body text.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn json<T: DeserializeOwned>(&self) -> Result<T, ApiError> {
        serde_json::from_str(&self.body).map_err(ApiError::decode)
    }
}

/// Sends one request and returns whatever the server answered.
///
/// Implementations report only transport failures as errors; status handling
/// belongs to [`ApiClient`].
#[async_trait(?Send)]
pub trait Transport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError>;
}

/// Where bearer tokens live between page loads.
pub trait TokenStore {
    fn token(&self, key: &str) -> Option<String>;
    fn store_token(&self, key: &str, token: &str);
    fn clear_token(&self, key: &str);
}

#[derive(Clone)]
pub struct ApiClient {
    config: Rc<ClientConfig>,
    transport: Rc<dyn Transport>,
    tokens: Rc<dyn TokenStore>,
}

impl ApiClient {
    pub fn new(config: ClientConfig, transport: Rc<dyn Transport>, tokens: Rc<dyn TokenStore>) -> Self {
        Self {
            config: Rc::new(config),
            transport,
            tokens,
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    fn bearer(&self) -> Option<String> {
        match self.config.credentials {
            CredentialMode::Cookie => None,
            CredentialMode::Bearer => self.tokens.token(&self.config.token_key),
        }
    }

    pub(crate) fn remember_token(&self, token: &str) {
        if self.config.credentials == CredentialMode::Bearer {
            self.tokens.store_token(&self.config.token_key, token);
        }
    }

    pub(crate) fn forget_token(&self) {
        self.tokens.clear_token(&self.config.token_key);
    }

    /// Send a request and fail on any non-2xx status.
    pub(crate) async fn send(
        &self,
        method: Method,
        path: &str,
        body: Option<serde_json::Value>,
    ) -> Result<ApiResponse, ApiError> {
        debug!(%method, path, "api request");
        let request = ApiRequest {
            method: method.clone(),
            path: path.to_string(),
            body,
            bearer: self.bearer(),
        };

        let response = self.transport.send(request).await.inspect_err(|e| {
            warn!(%method, path, error = %e, "api request failed");
        })?;

        if !response.is_success() {
            let err = ApiError::from_status(response.status, &response.body);
            warn!(%method, path, status = response.status, error = %err, "api request rejected");
            return Err(err);
        }

        Ok(response)
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.send(Method::GET, path, None).await?.json()
    }

    pub(crate) async fn send_json<B: Serialize, T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let body = serde_json::to_value(body).map_err(ApiError::internal)?;
        self.send(method, path, Some(body)).await?.json()
    }
}
