//! Session state and the authorization gate applied before rendering a page.
//!
//! The session is never stored: it is rebuilt on every load by probing the
//! profile (or role) endpoint once. Everything here is pure so the decision
//! table can be tested without a browser.

use serde::{Deserialize, Serialize};

/// Identity learned from a successful probe.
#[derive(Clone, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Identity {
    /// Empty when the probe endpoint does not report an email (role probes).
    pub email: String,
    /// `None` until a role-bearing response has been seen.
    pub is_organiser: Option<bool>,
}

/// Client view of the current browser session.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum SessionState {
    /// Probe still in flight.
    #[default]
    Unknown,
    Anonymous,
    Authenticated(Identity),
}

impl SessionState {
    pub fn is_loading(&self) -> bool {
        matches!(self, SessionState::Unknown)
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, SessionState::Authenticated(_))
    }

    pub fn email(&self) -> Option<&str> {
        match self {
            SessionState::Authenticated(id) if !id.email.is_empty() => Some(id.email.as_str()),
            _ => None,
        }
    }

    pub fn is_organiser(&self) -> Option<bool> {
        match self {
            SessionState::Authenticated(id) => id.is_organiser,
            _ => None,
        }
    }

    /// State after a successful login with `email`.
    pub fn logged_in(email: impl Into<String>) -> Self {
        SessionState::Authenticated(Identity {
            email: email.into(),
            is_organiser: None,
        })
    }

    /// Record the organiser flag once the role is known.
    pub fn with_role(self, is_organiser: bool) -> Self {
        match self {
            SessionState::Authenticated(mut id) => {
                id.is_organiser = Some(is_organiser);
                SessionState::Authenticated(id)
            }
            other => other,
        }
    }
}

/// Result of a single probe request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ProbeOutcome {
    Authenticated(Identity),
    /// The server answered 401.
    Unauthorized,
    /// Transport error, non-401 failure status, or an unreadable body.
    Failed(String),
}

impl ProbeOutcome {
    /// Session state the auth context should hold after this probe.
    ///
    /// A failed probe is treated as anonymous for navigation purposes; the
    /// error itself is surfaced by the gate.
    pub fn session(&self) -> SessionState {
        match self {
            ProbeOutcome::Authenticated(id) => SessionState::Authenticated(id.clone()),
            ProbeOutcome::Unauthorized | ProbeOutcome::Failed(_) => SessionState::Anonymous,
        }
    }
}

/// What to do when a probe fails for a reason other than 401.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuthFailurePolicy {
    /// Keep the user on the page and show the error.
    #[default]
    ShowError,
    /// Navigate back to the landing page.
    RedirectHome,
}

/// Access requirement of a page.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Requirement {
    /// Any authenticated session.
    #[default]
    Authenticated,
    /// An authenticated organiser.
    Organiser,
}

/// Outcome of the gate for one page mount.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GateDecision {
    Loading,
    Render,
    RedirectToLogin,
    RedirectHome,
    ShowError(String),
    /// Authenticated but lacking the organiser role.
    Restricted,
}

/// Decide how a protected page reacts to the latest probe.
///
/// `outcome` is `None` while the probe is in flight. For organiser pages an
/// identity whose role is unknown is still loading; the caller is expected to
/// resolve the role with a role probe.
pub fn decide_gate(outcome: Option<&ProbeOutcome>, requirement: Requirement, policy: AuthFailurePolicy) -> GateDecision {
    match outcome {
        None => GateDecision::Loading,
        Some(ProbeOutcome::Unauthorized) => GateDecision::RedirectToLogin,
        Some(ProbeOutcome::Failed(message)) => match policy {
            AuthFailurePolicy::ShowError => GateDecision::ShowError(message.clone()),
            AuthFailurePolicy::RedirectHome => GateDecision::RedirectHome,
        },
        Some(ProbeOutcome::Authenticated(identity)) => match requirement {
            Requirement::Authenticated => GateDecision::Render,
            Requirement::Organiser => match identity.is_organiser {
                Some(true) => GateDecision::Render,
                Some(false) => GateDecision::Restricted,
                None => GateDecision::Loading,
            },
        },
    }
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod tests;
