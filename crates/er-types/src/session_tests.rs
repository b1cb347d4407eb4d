//! Unit tests for the session gate decision table.

use super::*;

fn member(is_organiser: Option<bool>) -> ProbeOutcome {
    ProbeOutcome::Authenticated(Identity {
        email: "a@b.com".to_string(),
        is_organiser,
    })
}

#[test]
fn test_probe_in_flight_is_loading() {
    assert_eq!(
        decide_gate(None, Requirement::Authenticated, AuthFailurePolicy::ShowError),
        GateDecision::Loading
    );
}

#[test]
fn test_unauthorized_redirects_to_login_under_any_policy() {
    for policy in [AuthFailurePolicy::ShowError, AuthFailurePolicy::RedirectHome] {
        assert_eq!(
            decide_gate(Some(&ProbeOutcome::Unauthorized), Requirement::Authenticated, policy),
            GateDecision::RedirectToLogin
        );
    }
}

#[test]
fn test_other_failures_follow_policy() {
    let failed = ProbeOutcome::Failed("boom".to_string());
    assert_eq!(
        decide_gate(Some(&failed), Requirement::Organiser, AuthFailurePolicy::ShowError),
        GateDecision::ShowError("boom".to_string())
    );
    assert_eq!(
        decide_gate(Some(&failed), Requirement::Organiser, AuthFailurePolicy::RedirectHome),
        GateDecision::RedirectHome
    );
}

#[test]
fn test_authenticated_renders() {
    assert_eq!(
        decide_gate(Some(&member(None)), Requirement::Authenticated, AuthFailurePolicy::ShowError),
        GateDecision::Render
    );
}

#[test]
fn test_organiser_requirement() {
    let policy = AuthFailurePolicy::ShowError;
    assert_eq!(
        decide_gate(Some(&member(Some(true))), Requirement::Organiser, policy),
        GateDecision::Render
    );
    assert_eq!(
        decide_gate(Some(&member(Some(false))), Requirement::Organiser, policy),
        GateDecision::Restricted
    );
    assert_eq!(
        decide_gate(Some(&member(None)), Requirement::Organiser, policy),
        GateDecision::Loading
    );
}

#[test]
fn test_session_from_probe() {
    assert!(member(Some(false)).session().is_authenticated());
    assert_eq!(ProbeOutcome::Unauthorized.session(), SessionState::Anonymous);
    assert_eq!(ProbeOutcome::Failed("x".into()).session(), SessionState::Anonymous);
}

#[test]
fn test_session_accessors() {
    let state = SessionState::logged_in("a@b.com");
    assert_eq!(state.email(), Some("a@b.com"));
    assert_eq!(state.is_organiser(), None);

    let state = state.with_role(true);
    assert_eq!(state.is_organiser(), Some(true));

    assert!(SessionState::default().is_loading());
    assert_eq!(SessionState::Anonymous.with_role(true), SessionState::Anonymous);
    assert_eq!(SessionState::logged_in("").email(), None);
}
