//! Test utilities for er-web integration tests.
//!
//! `MockTransport` replays queued responses in order and records every request
//! it was handed; `MemoryTokens` stands in for browser session storage.
#![allow(dead_code)]

use std::{
    cell::RefCell, collections::{HashMap, VecDeque}, rc::Rc
};

use async_trait::async_trait;
use er_types::config::{ClientConfig, CredentialMode};
use er_web::{
    app::api::{ApiClient, ApiRequest, ApiResponse, TokenStore, Transport}, error::ApiError
};
use serde_json::Value;

#[derive(Default)]
pub struct MockTransport {
    responses: RefCell<VecDeque<Result<ApiResponse, ApiError>>>,
    requests: RefCell<Vec<ApiRequest>>,
}

impl MockTransport {
    pub fn reply(&self, status: u16, body: Value) -> &Self {
        self.responses
            .borrow_mut()
            .push_back(Ok(ApiResponse::new(status, body.to_string())));
        self
    }

    pub fn reply_text(&self, status: u16, body: &str) -> &Self {
        self.responses.borrow_mut().push_back(Ok(ApiResponse::new(status, body)));
        self
    }

    pub fn fail(&self, error: ApiError) -> &Self {
        self.responses.borrow_mut().push_back(Err(error));
        self
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.borrow().clone()
    }

    pub fn request_count(&self) -> usize {
        self.requests.borrow().len()
    }

    pub fn last_request(&self) -> Option<ApiRequest> {
        self.requests.borrow().last().cloned()
    }
}

#[async_trait(?Send)]
impl Transport for MockTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        self.requests.borrow_mut().push(request);
        self.responses
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(ApiError::network("no response queued")))
    }
}

#[derive(Default)]
pub struct MemoryTokens {
    values: RefCell<HashMap<String, String>>,
}

impl MemoryTokens {
    pub fn get(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }
}

impl TokenStore for MemoryTokens {
    fn token(&self, key: &str) -> Option<String> {
        self.get(key)
    }

    fn store_token(&self, key: &str, token: &str) {
        self.values.borrow_mut().insert(key.to_string(), token.to_string());
    }

    fn clear_token(&self, key: &str) {
        self.values.borrow_mut().remove(key);
    }
}

pub struct Harness {
    pub client: ApiClient,
    pub transport: Rc<MockTransport>,
    pub tokens: Rc<MemoryTokens>,
}

pub fn harness_with(config: ClientConfig) -> Harness {
    let transport = Rc::new(MockTransport::default());
    let tokens = Rc::new(MemoryTokens::default());
    let client = ApiClient::new(config, transport.clone(), tokens.clone());
    Harness {
        client,
        transport,
        tokens,
    }
}

pub fn harness() -> Harness {
    harness_with(ClientConfig::default())
}

pub fn bearer_harness() -> Harness {
    harness_with(ClientConfig {
        credentials: CredentialMode::Bearer,
        ..ClientConfig::default()
    })
}

pub fn user_json(id: i64, email: &str) -> Value {
    serde_json::json!({
        "id": id,
        "email": email,
        "is_organiser": false,
        "meal_preference": "vegetarian",
        "meals": ["lunch"],
        "participation_start_time": "2030-01-01T09:00:00",
        "participation_end_time": "2030-01-01T17:00:00"
    })
}
