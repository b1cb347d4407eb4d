//! API error types for er-web.
//!
//! Every failure of a call to the registration API ends up as one of these
//! variants and is rendered to the user as a string at the call site.

use thiserror::Error;

/// Errors raised while talking to the registration API.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiError {
    /// The request never produced a response (offline, CORS, DNS...).
    #[error("network error: {message}")]
    Network { message: String },

    /// 401 Unauthorized - the session is missing or expired
    #[error("{}", unauthorized_display_message(.message))]
    Unauthorized { message: Option<String> },

    /// Any other non-2xx status
    #[error("{message}")]
    Status { status: u16, message: String },

    /// A 2xx response whose body could not be read as the expected JSON
    #[error("unexpected response: {message}")]
    Decode { message: String },

    /// Request could not be built
    #[error("internal error: {message}")]
    Internal { message: String },
}

fn unauthorized_display_message(message: &Option<String>) -> String {
    message.clone().unwrap_or_else(|| "unauthorized".to_string())
}

impl ApiError {
    pub fn network(err: impl std::fmt::Display) -> Self {
        Self::Network { message: err.to_string() }
    }

    pub fn decode(err: impl std::fmt::Display) -> Self {
        Self::Decode { message: err.to_string() }
    }

    pub fn internal(err: impl std::fmt::Display) -> Self {
        Self::Internal { message: err.to_string() }
    }

    /// Build the error for a non-2xx response.
    ///
    /// The server reports failures as `{"message": ...}`; its JWT layer uses
    /// `{"msg": ...}`. Anything else falls back to a generic message.
    pub fn from_status(status: u16, body: &str) -> Self {
        let message = server_message(body);
        if status == 401 {
            return Self::Unauthorized { message };
        }
        Self::Status {
            status,
            message: message.unwrap_or_else(|| format!("request failed with status {}", status)),
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized { .. })
    }

    /// HTTP status when the server answered.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Unauthorized { .. } => Some(401),
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

fn server_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    ["message", "msg", "error"]
        .iter()
        .find_map(|key| value.get(key).and_then(|v| v.as_str()))
        .map(str::to_string)
        .filter(|m| !m.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_uses_server_message() {
        let err = ApiError::from_status(400, r#"{"message": "User already exists"}"#);
        assert_eq!(err.to_string(), "User already exists");
        assert_eq!(err.status(), Some(400));
    }

    #[test]
    fn test_unauthorized_keeps_message() {
        let err = ApiError::from_status(401, r#"{"msg": "Missing cookie \"access_token_cookie\""}"#);
        assert!(err.is_unauthorized());
        assert_eq!(err.to_string(), "Missing cookie \"access_token_cookie\"");

        let bare = ApiError::from_status(401, "");
        assert_eq!(bare.to_string(), "unauthorized");
    }

    #[test]
    fn test_non_json_body_falls_back() {
        let err = ApiError::from_status(502, "<html>Bad Gateway</html>");
        assert_eq!(err.to_string(), "request failed with status 502");
        assert!(!err.is_unauthorized());
    }
}
