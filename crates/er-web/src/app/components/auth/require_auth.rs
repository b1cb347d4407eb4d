use dioxus::prelude::*;
use er_types::session::{GateDecision, ProbeOutcome, Requirement, decide_gate};

use crate::{
    Routes, app::auth::{AuthState, use_api, use_auth}
};

/// Route guard that applies the session gate before rendering its children.
///
/// Redirects to /login on a 401, shows the probe error (or goes home, per
/// configuration) on other failures, and renders "Access Restricted" when an
/// organiser is required but the account is not one. Children are not mounted
/// until the gate opens, so they issue no requests before then.
///
/// # Examples
///
/// ```text
/// // Require authentication only
/// RequireAuth { OwnProfile {} }
///
/// // Require the organiser role
/// RequireAuth { requirement: Requirement::Organiser, UsersSection {} }
/// ```
#[component]
pub fn RequireAuth(
    /// Access level the page needs
    #[props(default)]
    requirement: Requirement,

    /// Page content to show when authorized
    children: Element,
) -> Element {
    let mut auth = use_auth();
    let client = use_api();
    let policy = client.config().auth_failure;
    let nav = navigator();

    // Organiser pages resolve the role with their own probe on mount.
    let role = use_resource(move || {
        let client = client.clone();
        async move {
            match requirement {
                Requirement::Organiser => Some(client.probe_role().await),
                Requirement::Authenticated => None,
            }
        }
    });

    let gate = move || -> GateDecision {
        let outcome: Option<ProbeOutcome> = match requirement {
            Requirement::Authenticated => auth.read().probe.clone(),
            Requirement::Organiser => role.read().clone().flatten(),
        };
        decide_gate(outcome.as_ref(), requirement, policy)
    };

    use_effect(move || match gate() {
        GateDecision::RedirectToLogin => {
            if auth.peek().session.is_authenticated() {
                auth.set(AuthState::signed_out());
            }
            nav.push(Routes::LoginPage {});
        }
        GateDecision::RedirectHome => {
            nav.push(Routes::MainPage {});
        }
        GateDecision::Render | GateDecision::Restricted if requirement == Requirement::Organiser => {
            let is_organiser = gate() == GateDecision::Render;
            let current = auth.peek().clone();
            if current.session.is_authenticated() && current.session.is_organiser() != Some(is_organiser) {
                auth.set(AuthState {
                    session: current.session.with_role(is_organiser),
                    probe: current.probe,
                });
            }
        }
        _ => {}
    });

    match gate() {
        GateDecision::Loading => rsx! {
            div { class: "flex items-center justify-center min-h-[50vh]",
                span { class: "loading loading-spinner loading-lg" }
            }
        },
        GateDecision::Render => rsx! { {children} },
        GateDecision::Restricted => rsx! {
            div { class: "hero min-h-[50vh]",
                div { class: "hero-content text-center",
                    p { class: "text-error text-2xl font-bold", "Access Restricted" }
                }
            }
        },
        GateDecision::ShowError(message) => rsx! {
            div { class: "alert alert-error", span { "{message}" } }
        },
        // Will redirect via effect
        GateDecision::RedirectToLogin | GateDecision::RedirectHome => rsx! { div {} },
    }
}
