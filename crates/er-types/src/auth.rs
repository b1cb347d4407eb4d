use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
/// Login payload submitted to `/login`.
pub struct LoginRequest {
    /// Email address submitted by the client.
    pub email: String,
    /// Plaintext password submitted by the client.
    pub password: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Default)]
/// Response returned after processing a login request.
pub struct LoginResponse {
    /// Human-readable status or error message.
    #[serde(default)]
    pub message: String,
    /// Present when the server issues a bearer token instead of (or besides) a cookie.
    #[serde(default, alias = "token")]
    pub access_token: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Default)]
/// Generic `{"message": ...}` body used by register, logout, delete and errors.
pub struct MessageResponse {
    #[serde(default)]
    pub message: String,
}
