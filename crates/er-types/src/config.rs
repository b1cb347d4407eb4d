//! Client configuration for talking to the registration API.
use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::session::AuthFailurePolicy;

/// Default API origin used by local deployments.
pub const DEFAULT_API_BASE: &str = "http://localhost:5000";

/// Default storage key holding a bearer token.
pub const DEFAULT_TOKEN_KEY: &str = "access_token";

/// REST paths consumed by the UI.
pub mod endpoints {
    pub const LOGIN: &str = "/login";
    pub const REGISTER: &str = "/register";
    pub const LOGOUT: &str = "/logout";
    pub const PROFILE: &str = "/api/user/profile";
    pub const CHECK_ROLE: &str = "/api/check_role";
    pub const USER_ROLE: &str = "/api/user/role";
    pub const USERS: &str = "/api/users";

    /// Path of a single user record.
    pub fn user_path(id: i64) -> String {
        format!("{}/{}", USERS, id)
    }
}

/// How requests prove the session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CredentialMode {
    /// Let the browser attach the session cookie.
    #[default]
    Cookie,
    /// Send `Authorization: Bearer <token>` from browser session storage.
    Bearer,
}

impl FromStr for CredentialMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "cookie" => Ok(CredentialMode::Cookie),
            "bearer" | "token" => Ok(CredentialMode::Bearer),
            _ => Err(format!("Invalid credential mode: {}", s)),
        }
    }
}

/// Endpoint used to probe the session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProbeEndpoint {
    /// Full profile; yields the email.
    #[default]
    Profile,
    /// `{"is_organiser": bool}` from `/api/check_role`.
    CheckRole,
    /// `{"is_organiser": bool}` from `/api/user/role`.
    UserRole,
}

impl ProbeEndpoint {
    pub fn path(&self) -> &'static str {
        match self {
            ProbeEndpoint::Profile => endpoints::PROFILE,
            ProbeEndpoint::CheckRole => endpoints::CHECK_ROLE,
            ProbeEndpoint::UserRole => endpoints::USER_ROLE,
        }
    }

    /// Whether responses carry the organiser flag rather than a profile.
    pub fn reports_role(&self) -> bool {
        !matches!(self, ProbeEndpoint::Profile)
    }
}

impl fmt::Display for ProbeEndpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

impl FromStr for ProbeEndpoint {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "profile" | "/api/user/profile" => Ok(ProbeEndpoint::Profile),
            "check_role" | "/api/check_role" => Ok(ProbeEndpoint::CheckRole),
            "user_role" | "/api/user/role" => Ok(ProbeEndpoint::UserRole),
            _ => Err(format!("Invalid probe endpoint: {}", s)),
        }
    }
}

impl FromStr for AuthFailurePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "show_error" | "error" => Ok(AuthFailurePolicy::ShowError),
            "redirect_home" | "home" => Ok(AuthFailurePolicy::RedirectHome),
            _ => Err(format!("Invalid auth failure policy: {}", s)),
        }
    }
}

/// Runtime configuration of the web client.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Origin of the REST API (no trailing slash required).
    pub api_base: String,
    pub credentials: CredentialMode,
    pub probe: ProbeEndpoint,
    /// Reaction to a probe failure other than 401.
    pub auth_failure: AuthFailurePolicy,
    /// Session-storage key of the bearer token in `Bearer` mode.
    pub token_key: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            credentials: CredentialMode::Cookie,
            probe: ProbeEndpoint::Profile,
            auth_failure: AuthFailurePolicy::ShowError,
            token_key: DEFAULT_TOKEN_KEY.to_string(),
        }
    }
}

impl ClientConfig {
    /// Absolute URL for an API path.
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.api_base.trim_end_matches('/'), path.trim_start_matches('/'))
    }

    /// Apply `(key, value)` overrides, ignoring unset or unparseable values.
    ///
    /// Keys: `api_base`, `credentials`, `probe`, `auth_failure`, `token_key`.
    pub fn with_overrides<'a, I>(mut self, overrides: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, Option<&'a str>)>,
    {
        for (key, value) in overrides {
            let Some(value) = value.map(str::trim).filter(|v| !v.is_empty()) else {
                continue;
            };
            match key {
                "api_base" => self.api_base = value.to_string(),
                "credentials" => {
                    if let Ok(mode) = value.parse() {
                        self.credentials = mode;
                    }
                }
                "probe" => {
                    if let Ok(probe) = value.parse() {
                        self.probe = probe;
                    }
                }
                "auth_failure" => {
                    if let Ok(policy) = value.parse() {
                        self.auth_failure = policy;
                    }
                }
                "token_key" => self.token_key = value.to_string(),
                _ => {}
            }
        }
        self
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
