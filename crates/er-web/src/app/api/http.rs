use async_trait::async_trait;
use er_types::config::ClientConfig;

use super::{ApiRequest, ApiResponse, Transport};
use crate::error::ApiError;

/// [`Transport`] backed by `reqwest` (the browser `fetch` API on wasm).
#[derive(Clone, Debug)]
pub struct HttpTransport {
    http: reqwest::Client,
    config: ClientConfig,
}

impl HttpTransport {
    pub fn new(config: ClientConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }
}

#[async_trait(?Send)]
impl Transport for HttpTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        let mut builder = self.http.request(request.method, self.config.url(&request.path));

        // Session cookies are cross-origin to the UI, so fetch must be told to send them.
        #[cfg(target_arch = "wasm32")]
        {
            builder = builder.fetch_credentials_include();
        }

        if let Some(token) = request.bearer {
            builder = builder.bearer_auth(token);
        }
        if let Some(body) = request.body {
            builder = builder.json(&body);
        }

        let response = builder.send().await.map_err(ApiError::network)?;
        let status = response.status().as_u16();
        let body = response.text().await.map_err(ApiError::network)?;

        Ok(ApiResponse { status, body })
    }
}
