//! Unit tests for client-side form validation.

use super::*;
use crate::users::{MealPreference, MealTime, UserDraft};
use chrono::NaiveDate;

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 12, 31).unwrap()
}

fn draft(email: &str, start: &str, end: &str) -> UserDraft {
    UserDraft {
        email: email.to_string(),
        password: "x".to_string(),
        participation_start_time: start.to_string(),
        participation_end_time: end.to_string(),
        ..UserDraft::empty()
    }
}

#[test]
fn test_add_user_example_passes() {
    let d = UserDraft {
        meal_preference: Some(MealPreference::Meat),
        meals: [MealTime::Lunch].into_iter().collect(),
        ..draft("a@b.com", "2025-01-01T09:00", "2025-01-02T09:00")
    };
    let errors = UserFormInput::new(&d, FormMode::Add).validate(today());
    assert!(errors.is_empty(), "unexpected errors: {}", format_errors(&errors));
}

#[test]
fn test_end_before_start_rejected_everywhere() {
    let d = draft("a@b.com", "2025-01-02T09:00", "2025-01-01T09:00");
    for mode in [FormMode::Add, FormMode::Update] {
        let errors = UserFormInput::new(&d, mode).validate(today());
        assert_eq!(errors.get(FIELD_END), Some(&ValidationError::EndBeforeStart));
    }

    let input = RegistrationInput {
        email: "a@b.com",
        password: "pw",
        participation_start_time: "2025-01-02T09:00",
        participation_end_time: "2025-01-01T09:00",
    };
    assert_eq!(input.validate(today()).get(FIELD_END), Some(&ValidationError::EndBeforeStart));
}

#[test]
fn test_equal_start_and_end_allowed() {
    let d = draft("a@b.com", "2025-01-01T09:00", "2025-01-01T09:00");
    assert!(UserFormInput::new(&d, FormMode::Add).validate(today()).is_empty());
}

#[test]
fn test_update_with_blank_email_fails() {
    let mut d = draft("   ", "", "");
    d.password.clear();
    let errors = UserFormInput::new(&d, FormMode::Update).validate(today());
    assert_eq!(errors.len(), 1);
    assert_eq!(errors.get(FIELD_EMAIL), Some(&ValidationError::Required));
}

#[test]
fn test_update_does_not_require_password_or_future_start() {
    let mut d = draft("a@b.com", "2020-01-01T09:00", "2020-01-02T09:00");
    d.password.clear();
    assert!(UserFormInput::new(&d, FormMode::Update).validate(today()).is_empty());

    let errors = UserFormInput::new(&d, FormMode::Add).validate(today());
    assert_eq!(errors.get(FIELD_PASSWORD), Some(&ValidationError::Required));
    assert_eq!(errors.get(FIELD_START), Some(&ValidationError::StartInPast));
}

#[test]
fn test_start_earlier_today_is_allowed() {
    let errors = validate_window(
        Some(today().and_hms_opt(0, 1, 0).unwrap()),
        None,
        today(),
        true,
    );
    assert!(errors.is_empty());
}

#[test]
fn test_registration_requires_times() {
    let input = RegistrationInput {
        email: "a@b.com",
        password: "pw",
        participation_start_time: "",
        participation_end_time: "not a date",
    };
    let errors = input.validate(today());
    assert_eq!(errors.get(FIELD_START), Some(&ValidationError::Required));
    assert_eq!(errors.get(FIELD_END), Some(&ValidationError::InvalidTimestamp));
}

#[test]
fn test_registration_rejects_bad_email() {
    let input = RegistrationInput {
        email: "nobody",
        password: "pw",
        participation_start_time: "2025-01-01T09:00",
        participation_end_time: "2025-01-01T10:00",
    };
    assert_eq!(input.validate(today()).get(FIELD_EMAIL), Some(&ValidationError::InvalidEmail));
}

#[test]
fn test_login_requires_both_fields() {
    let errors = LoginInput { email: "", password: "" }.validate();
    assert_eq!(errors.len(), 2);
    assert!(LoginInput { email: "a@b.com", password: "pw" }.validate().is_empty());
}

#[test]
fn test_format_errors_is_sorted() {
    let errors = LoginInput { email: "", password: "" }.validate();
    assert_eq!(
        format_errors(&errors),
        "Email: This field is required, Password: This field is required"
    );
}

#[test]
fn test_looks_like_email() {
    assert!(looks_like_email("a@b.com"));
    assert!(!looks_like_email("a@"));
    assert!(!looks_like_email("@b.com"));
    assert!(!looks_like_email("a b@c.com"));
}
