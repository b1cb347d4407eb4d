//! Login, registration and logout against a mock transport.

mod common;

use anyhow::Result;
use chrono::NaiveDate;
use common::{bearer_harness, harness};
use er_types::{
    config::{DEFAULT_TOKEN_KEY, endpoints}, users::{MealTime, UserDraft}, validation::{FIELD_EMAIL, FIELD_END, FIELD_PASSWORD, FIELD_START, ValidationError}
};
use er_web::{
    app::{
        api::{Method, TokenStore}, forms::{SubmitError, submit_login, submit_registration}
    }, error::ApiError
};
use serde_json::json;

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 3, 1).expect("valid date")
}

fn registration_draft() -> UserDraft {
    let mut draft = UserDraft::empty();
    draft.email = "grace@example.com".into();
    draft.password = "hunter22".into();
    draft.meals.insert(MealTime::Breakfast);
    draft.meals.insert(MealTime::Dinner);
    draft.participation_start_time = "2026-04-01T09:00".into();
    draft.participation_end_time = "2026-04-02T17:00".into();
    draft
}

#[tokio::test]
async fn login_posts_credentials_in_cookie_mode() -> Result<()> {
    let h = harness();
    h.transport.reply(200, json!({"message": "Login successful"}));

    let response = submit_login(&h.client, " ada@example.com ", "secret").await?;

    assert_eq!(response.message, "Login successful");
    let request = h.transport.last_request().expect("login sent");
    assert_eq!(request.method, Method::POST);
    assert_eq!(request.path, endpoints::LOGIN);
    assert_eq!(request.body, Some(json!({"email": "ada@example.com", "password": "secret"})));
    assert_eq!(request.bearer, None);
    assert_eq!(h.tokens.get(DEFAULT_TOKEN_KEY), None);
    Ok(())
}

#[tokio::test]
async fn bearer_mode_keeps_token_until_logout() -> Result<()> {
    let h = bearer_harness();
    h.transport
        .reply(200, json!({"message": "Login successful", "access_token": "abc.def"}))
        .reply(200, json!({"email": "ada@example.com"}))
        .reply(200, json!({"message": "Logout successful"}));

    submit_login(&h.client, "ada@example.com", "secret").await?;
    assert_eq!(h.tokens.token(DEFAULT_TOKEN_KEY).as_deref(), Some("abc.def"));

    h.client.get_profile().await?;
    assert_eq!(h.transport.last_request().and_then(|r| r.bearer).as_deref(), Some("abc.def"));

    let message = h.client.logout().await?;
    assert_eq!(message, "Logout successful");
    assert_eq!(h.tokens.get(DEFAULT_TOKEN_KEY), None);
    Ok(())
}

#[tokio::test]
async fn login_with_missing_fields_sends_nothing() -> Result<()> {
    let h = harness();

    let err = submit_login(&h.client, "", "").await.expect_err("must fail locally");

    let fields = err.field_errors().expect("local validation failure");
    assert_eq!(fields.get(FIELD_EMAIL), Some(&ValidationError::Required));
    assert_eq!(fields.get(FIELD_PASSWORD), Some(&ValidationError::Required));
    assert_eq!(h.transport.request_count(), 0);
    Ok(())
}

#[tokio::test]
async fn rejected_login_surfaces_server_message() -> Result<()> {
    let h = harness();
    h.transport.reply(401, json!({"message": "Invalid credentials"}));

    let err = submit_login(&h.client, "ada@example.com", "wrong").await.expect_err("rejected");

    assert!(matches!(err, SubmitError::Api(ref api) if api.is_unauthorized()));
    assert_eq!(err.to_string(), "Invalid credentials");
    Ok(())
}

#[tokio::test]
async fn registration_sends_meal_times() -> Result<()> {
    let h = harness();
    h.transport.reply(201, json!({"message": "User registered successfully"}));

    let message = submit_registration(&h.client, &registration_draft(), today()).await?;

    assert_eq!(message, "User registered successfully");
    let request = h.transport.last_request().expect("register sent");
    assert_eq!(request.path, endpoints::REGISTER);
    assert_eq!(
        request.body,
        Some(json!({
            "email": "grace@example.com",
            "password": "hunter22",
            "meal_preference": "vegetarian",
            "meal_times": ["breakfast", "dinner"],
            "participation_start_time": "2026-04-01T09:00",
            "participation_end_time": "2026-04-02T17:00"
        }))
    );
    Ok(())
}

#[tokio::test]
async fn registration_window_is_checked_before_sending() -> Result<()> {
    let h = harness();
    let mut draft = registration_draft();
    draft.participation_start_time = "2026-02-27T09:00".into();
    draft.participation_end_time = "2026-02-26T09:00".into();

    let err = submit_registration(&h.client, &draft, today()).await.expect_err("invalid window");

    let fields = err.field_errors().expect("local validation failure");
    assert_eq!(fields.get(FIELD_START), Some(&ValidationError::StartInPast));
    assert_eq!(fields.get(FIELD_END), Some(&ValidationError::EndBeforeStart));
    assert_eq!(h.transport.request_count(), 0);
    Ok(())
}

#[tokio::test]
async fn duplicate_registration_reports_server_message() -> Result<()> {
    let h = harness();
    h.transport.reply(400, json!({"message": "User already exists"}));

    let err = submit_registration(&h.client, &registration_draft(), today())
        .await
        .expect_err("duplicate");

    assert_eq!(
        err,
        SubmitError::Api(ApiError::Status {
            status: 400,
            message: "User already exists".into()
        })
    );
    Ok(())
}

#[tokio::test]
async fn logout_tolerates_non_json_body() -> Result<()> {
    let h = harness();
    h.transport.reply_text(200, "OK");

    let message = h.client.logout().await?;

    assert_eq!(message, "");
    assert_eq!(h.transport.last_request().map(|r| r.method), Some(Method::POST));
    Ok(())
}
