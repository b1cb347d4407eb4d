use dioxus::prelude::*;
use er_types::session::{ProbeOutcome, SessionState};

use crate::app::api::ApiClient;

/// Authentication state shared with every page.
#[derive(Clone, PartialEq, Debug, Default)]
pub struct AuthState {
    pub session: SessionState,
    /// Result of the startup probe; `None` while it is in flight.
    pub probe: Option<ProbeOutcome>,
}

impl AuthState {
    pub fn from_probe(outcome: ProbeOutcome) -> Self {
        Self {
            session: outcome.session(),
            probe: Some(outcome),
        }
    }

    /// State right after a successful login.
    pub fn logged_in(email: &str) -> Self {
        let session = SessionState::logged_in(email);
        let probe = match &session {
            SessionState::Authenticated(identity) => Some(ProbeOutcome::Authenticated(identity.clone())),
            _ => None,
        };
        Self { session, probe }
    }

    /// State after logout or a 401.
    pub fn signed_out() -> Self {
        Self {
            session: SessionState::Anonymous,
            probe: Some(ProbeOutcome::Unauthorized),
        }
    }
}

/// Initialize the auth provider and probe the session once on mount.
pub fn use_auth_provider(client: ApiClient) -> Signal<AuthState> {
    let mut auth = use_signal(AuthState::default);

    use_effect(move || {
        let client = client.clone();
        spawn(async move {
            let outcome = client.probe_session().await;
            tracing::debug!(?outcome, "session probe finished");
            auth.set(AuthState::from_probe(outcome));
        });
    });

    use_context_provider(|| auth)
}
