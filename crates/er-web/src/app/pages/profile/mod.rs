use chrono::NaiveDateTime;
use dioxus::prelude::*;
use er_types::{
    session::{AuthFailurePolicy, GateDecision, Requirement, decide_gate}, users::UserProfile
};

use crate::{
    Routes, app::{
        api::auth::probe_outcome, auth::{AuthState, use_api, use_auth}
    }, components::{Layout, RequireAuth}, error::ApiError
};

const DISPLAY_FORMAT: &str = "%Y-%m-%d %H:%M";

fn show_time(value: Option<&NaiveDateTime>) -> String {
    value.map(|t| t.format(DISPLAY_FORMAT).to_string()).unwrap_or_else(|| "Not set".to_string())
}

/// Gate decision for a profile fetch, which doubles as a session check.
///
/// `None` while the fetch is in flight.
pub fn profile_gate(result: Option<&Result<UserProfile, ApiError>>, policy: AuthFailurePolicy) -> GateDecision {
    let outcome = result.map(|r| probe_outcome(r.as_ref().map(UserProfile::identity).map_err(Clone::clone)));
    decide_gate(outcome.as_ref(), Requirement::Authenticated, policy)
}

/// Follows the gate's redirects once the fetch settles.
fn use_profile_redirects(result: Resource<Result<UserProfile, ApiError>>, policy: AuthFailurePolicy) {
    let mut auth = use_auth();
    let navigator = use_navigator();

    use_effect(move || match profile_gate(result.read().as_ref(), policy) {
        GateDecision::RedirectToLogin => {
            auth.set(AuthState::signed_out());
            navigator.push(Routes::LoginPage {});
        }
        GateDecision::RedirectHome => {
            navigator.push(Routes::MainPage {});
        }
        _ => {}
    });
}

/// Own profile, fetched from the session.
#[component]
pub fn ProfilePage() -> Element {
    rsx! {
        Layout {
            RequireAuth { OwnProfile {} }
        }
    }
}

#[component]
fn OwnProfile() -> Element {
    let client = use_api();
    let policy = client.config().auth_failure;
    let profile = use_resource(move || {
        let client = client.clone();
        async move { client.get_profile().await }
    });
    use_profile_redirects(profile, policy);

    rsx! {
        ProfileBody { result: profile(), policy }
    }
}

/// A single record fetched by id; used with bearer-token deployments.
#[component]
pub fn ProfileByIdPage(id: i64) -> Element {
    rsx! {
        Layout {
            RequireAuth { ProfileById { id } }
        }
    }
}

#[component]
fn ProfileById(id: i64) -> Element {
    let client = use_api();
    let policy = client.config().auth_failure;
    let record = use_resource(move || {
        let client = client.clone();
        async move { client.get_user(id).await.map(UserProfile::from) }
    });
    use_profile_redirects(record, policy);

    rsx! {
        ProfileBody { result: record(), policy }
    }
}

#[component]
fn ProfileBody(result: Option<Result<UserProfile, ApiError>>, policy: AuthFailurePolicy) -> Element {
    match (profile_gate(result.as_ref(), policy), result) {
        (GateDecision::Render, Some(Ok(profile))) => rsx! { ProfileCard { profile } },
        (GateDecision::ShowError(message), _) => rsx! {
            div { class: "alert alert-error", span { "Failed to load profile: {message}" } }
        },
        (GateDecision::Loading, _) => rsx! {
            div { class: "flex items-center justify-center min-h-[50vh]",
                span { class: "loading loading-spinner loading-lg" }
            }
        },
        // Redirect effect takes it from here
        _ => rsx! {},
    }
}

#[component]
fn ProfileCard(profile: UserProfile) -> Element {
    let preference = profile.meal_preference.map(|p| p.label()).unwrap_or("Not set");
    let meals = if profile.meals.is_empty() {
        "None".to_string()
    } else {
        profile.meals.to_string()
    };
    let start = show_time(profile.participation_start_time.as_ref());
    let end = show_time(profile.participation_end_time.as_ref());

    rsx! {
        div { class: "flex justify-center",
            div { class: "card w-full max-w-lg bg-base-200 shadow-xl",
                div { class: "card-body gap-4",
                    h2 { class: "card-title", "Profile" }
                    div { class: "grid grid-cols-[auto_1fr] gap-x-6 gap-y-2",
                        span { class: "font-semibold", "Email" }
                        span { "{profile.email}" }
                        span { class: "font-semibold", "Meal Preference" }
                        span { "{preference}" }
                        span { class: "font-semibold", "Meals" }
                        span { "{meals}" }
                        span { class: "font-semibold", "Participation Start" }
                        span { "{start}" }
                        span { class: "font-semibold", "Participation End" }
                        span { "{end}" }
                        if let Some(true) = profile.is_organiser {
                            span { class: "font-semibold", "Role" }
                            span { class: "badge badge-primary", "Organiser" }
                        }
                    }
                    div { class: "card-actions justify-end",
                        Link { class: "btn btn-outline", to: Routes::LogoutPage {}, "Logout" }
                    }
                }
            }
        }
    }
}

