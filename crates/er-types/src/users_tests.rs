//! Unit tests for user DTO parsing and form drafts.

use super::*;
use chrono::{NaiveDate, NaiveDateTime};

fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d).unwrap().and_hms_opt(h, min, 0).unwrap()
}

#[test]
fn test_list_record_parses_lowercase_values() {
    let json = r#"{
        "id": 7,
        "email": "a@b.com",
        "is_organiser": false,
        "meal_preference": "meat",
        "participation_start_time": "2025-01-01T09:00:00",
        "participation_end_time": "2025-01-02T09:00:00",
        "meals": ["lunch", "breakfast"]
    }"#;
    let record: UserRecord = serde_json::from_str(json).unwrap();
    assert_eq!(record.id, 7);
    assert_eq!(record.meal_preference, Some(MealPreference::Meat));
    assert_eq!(record.meals.iter().collect::<Vec<_>>(), vec![MealTime::Breakfast, MealTime::Lunch]);
    assert_eq!(record.participation_start_time, Some(at(2025, 1, 1, 9, 0)));
}

#[test]
fn test_profile_parses_enum_names() {
    let json = r#"{
        "email": "a@b.com",
        "meal_preference": "VEGETARIAN",
        "participation_start_time": null,
        "participation_end_time": "2025-01-02T09:00:00.123456",
        "meals": ["DINNER"]
    }"#;
    let profile: UserProfile = serde_json::from_str(json).unwrap();
    assert_eq!(profile.id, None);
    assert_eq!(profile.meal_preference, Some(MealPreference::Vegetarian));
    assert!(profile.meals.contains(MealTime::Dinner));
    assert_eq!(profile.participation_start_time, None);
    assert!(profile.participation_end_time.is_some());
}

#[test]
fn test_missing_optional_fields_default() {
    let record: UserRecord = serde_json::from_str(r#"{"id": 1, "email": "x@y.z"}"#).unwrap();
    assert!(!record.is_organiser);
    assert!(record.meals.is_empty());
    assert_eq!(record.meal_preference, None);
}

#[test]
fn test_create_request_wire_shape() {
    let draft = UserDraft {
        email: " a@b.com ".to_string(),
        password: "x".to_string(),
        meal_preference: Some(MealPreference::Meat),
        meals: [MealTime::Lunch].into_iter().collect(),
        participation_start_time: "2025-01-01T09:00".to_string(),
        participation_end_time: "2025-01-02T09:00".to_string(),
        ..UserDraft::empty()
    };
    let value = serde_json::to_value(draft.to_create_request()).unwrap();
    assert_eq!(value["email"], "a@b.com");
    assert_eq!(value["meal_preference"], "meat");
    assert_eq!(value["meals"], serde_json::json!(["lunch"]));
    assert_eq!(value["participation_start_time"], "2025-01-01T09:00");
    assert_eq!(value["is_organiser"], false);
}

#[test]
fn test_create_request_omits_blank_times() {
    let draft = UserDraft {
        email: "a@b.com".to_string(),
        password: "x".to_string(),
        ..UserDraft::empty()
    };
    let value = serde_json::to_value(draft.to_create_request()).unwrap();
    assert!(value.get("participation_start_time").is_none());
    assert!(value.get("participation_end_time").is_none());
}

#[test]
fn test_register_request_uses_meal_times_key() {
    let request = RegisterRequest {
        email: "a@b.com".to_string(),
        password: "pw".to_string(),
        meal_preference: MealPreference::Vegetarian,
        meal_times: [MealTime::Dinner, MealTime::Breakfast].into_iter().collect(),
        participation_start_time: Some(at(2030, 5, 1, 8, 30)),
        participation_end_time: Some(at(2030, 5, 2, 18, 0)),
    };
    let value = serde_json::to_value(request).unwrap();
    assert_eq!(value["meal_times"], serde_json::json!(["breakfast", "dinner"]));
    assert_eq!(value["participation_end_time"], "2030-05-02T18:00");
}

#[test]
fn test_draft_from_record_prefills() {
    let record = UserRecord {
        id: 3,
        email: "org@event.io".to_string(),
        is_organiser: true,
        meal_preference: None,
        meals: [MealTime::Breakfast].into_iter().collect(),
        participation_start_time: Some(at(2025, 3, 4, 10, 15)),
        participation_end_time: None,
    };
    let draft = UserDraft::from_record(&record);
    assert_eq!(draft.email, "org@event.io");
    assert!(draft.is_organiser);
    assert_eq!(draft.meal_preference, None);
    assert_eq!(draft.participation_start_time, "2025-03-04T10:15");
    assert_eq!(draft.participation_end_time, "");
    assert!(draft.password.is_empty());
}

#[test]
fn test_update_request_into_record() {
    let draft = UserDraft {
        email: "new@b.com".to_string(),
        meal_preference: Some(MealPreference::Meat),
        ..UserDraft::empty()
    };
    let record = draft.to_update_request().into_record(9);
    assert_eq!(record.id, 9);
    assert_eq!(record.email, "new@b.com");
    assert_eq!(record.meal_preference, Some(MealPreference::Meat));
}

#[test]
fn test_update_keeps_unset_preference_null() {
    let record: UserRecord =
        serde_json::from_str(r#"{"id": 7, "email": "x@y.com", "meal_preference": null, "meals": []}"#).unwrap();
    let mut draft = UserDraft::from_record(&record);
    draft.meals.set(MealTime::Lunch, true);

    let request = draft.to_update_request();
    let value = serde_json::to_value(&request).unwrap();
    assert!(value["meal_preference"].is_null());
    assert_eq!(value["meals"], serde_json::json!(["lunch"]));
    assert_eq!(request.into_record(7).meal_preference, None);
}

#[test]
fn test_new_drafts_default_to_vegetarian() {
    let draft = UserDraft::empty();
    assert_eq!(draft.meal_preference, Some(MealPreference::Vegetarian));
    let value = serde_json::to_value(draft.to_create_request()).unwrap();
    assert_eq!(value["meal_preference"], "vegetarian");
}

#[test]
fn test_meal_set_toggle_and_display() {
    let mut meals = MealSet::new();
    meals.toggle(MealTime::Dinner);
    meals.set(MealTime::Breakfast, true);
    assert_eq!(meals.to_string(), "breakfast, dinner");
    meals.toggle(MealTime::Dinner);
    meals.set(MealTime::Lunch, false);
    assert_eq!(meals.to_string(), "breakfast");
}

#[test]
fn test_enum_from_str_is_case_insensitive() {
    assert_eq!("MEAT".parse::<MealPreference>().unwrap(), MealPreference::Meat);
    assert_eq!(" Lunch ".parse::<MealTime>().unwrap(), MealTime::Lunch);
    assert!("brunch".parse::<MealTime>().is_err());
}
