// Session lifecycle calls: probe, login, register, logout.

use er_types::{
    auth::{LoginRequest, LoginResponse, MessageResponse}, config::{ProbeEndpoint, endpoints}, session::{Identity, ProbeOutcome}, users::{RegisterRequest, RoleInfo, UserProfile}
};
use tracing::info;

use super::{ApiClient, Method};
use crate::error::ApiError;

/// Classify a session-bearing response: 401 means signed out, any other error is a failure.
pub fn probe_outcome(result: Result<Identity, ApiError>) -> ProbeOutcome {
    match result {
        Ok(identity) => ProbeOutcome::Authenticated(identity),
        Err(e) if e.is_unauthorized() => ProbeOutcome::Unauthorized,
        Err(e) => ProbeOutcome::Failed(e.to_string()),
    }
}

impl ApiClient {
    /// Probe the configured endpoint once to learn whether the session is live.
    pub async fn probe_session(&self) -> ProbeOutcome {
        let probe = self.config().probe;
        let result = if probe.reports_role() {
            self.get_json::<RoleInfo>(probe.path()).await.map(|role| Identity {
                email: String::new(),
                is_organiser: Some(role.is_organiser),
            })
        } else {
            self.get_profile().await.map(|profile| profile.identity())
        };
        probe_outcome(result)
    }

    /// Role probe used by organiser-only pages; carries the organiser flag.
    pub async fn probe_role(&self) -> ProbeOutcome {
        probe_outcome(self.check_role().await.map(|is_organiser| Identity {
            email: String::new(),
            is_organiser: Some(is_organiser),
        }))
    }

    /// Whether the current session belongs to an organiser.
    pub async fn check_role(&self) -> Result<bool, ApiError> {
        let path = match self.config().probe {
            ProbeEndpoint::CheckRole => endpoints::CHECK_ROLE,
            ProbeEndpoint::Profile | ProbeEndpoint::UserRole => endpoints::USER_ROLE,
        };
        Ok(self.get_json::<RoleInfo>(path).await?.is_organiser)
    }

    pub async fn get_profile(&self) -> Result<UserProfile, ApiError> {
        self.get_json(endpoints::PROFILE).await
    }

    /// Log in; in bearer mode a returned token is kept for later requests.
    pub async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, ApiError> {
        let response: LoginResponse = self.send_json(Method::POST, endpoints::LOGIN, request).await?;
        if let Some(token) = response.access_token.as_deref() {
            self.remember_token(token);
        }
        info!(email = %request.email, "logged in");
        Ok(response)
    }

    /// Register a new participant and return the server's confirmation message.
    pub async fn register(&self, request: &RegisterRequest) -> Result<String, ApiError> {
        let response: MessageResponse = self.send_json(Method::POST, endpoints::REGISTER, request).await?;
        Ok(response.message)
    }

    pub async fn logout(&self) -> Result<String, ApiError> {
        let response = self.send(Method::POST, endpoints::LOGOUT, None).await?;
        self.forget_token();
        // The session is gone server-side at this point; an odd body is not worth failing over.
        Ok(response.json::<MessageResponse>().map(|m| m.message).unwrap_or_default())
    }
}
