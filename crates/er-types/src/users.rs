//! User records, meal enums and request DTOs exchanged with the registration API.
use std::{collections::BTreeSet, fmt, str::FromStr};

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Dietary preference recorded for a participant.
///
/// The list endpoints report lowercase values while the profile endpoint reports
/// the enum name, so both spellings are accepted on input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum MealPreference {
    #[default]
    #[serde(alias = "VEGETARIAN", alias = "Vegetarian")]
    Vegetarian,
    #[serde(alias = "MEAT", alias = "Meat")]
    Meat,
}

impl MealPreference {
    pub const ALL: [MealPreference; 2] = [MealPreference::Vegetarian, MealPreference::Meat];

    pub fn as_str(&self) -> &'static str {
        match self {
            MealPreference::Vegetarian => "vegetarian",
            MealPreference::Meat => "meat",
        }
    }

    /// Title-cased label for select options.
    pub fn label(&self) -> &'static str {
        match self {
            MealPreference::Vegetarian => "Vegetarian",
            MealPreference::Meat => "Meat",
        }
    }
}

impl fmt::Display for MealPreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MealPreference {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "vegetarian" => Ok(MealPreference::Vegetarian),
            "meat" => Ok(MealPreference::Meat),
            _ => Err(format!("Invalid meal preference: {}", s)),
        }
    }
}

/// A meal slot a participant can sign up for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MealTime {
    #[serde(alias = "BREAKFAST", alias = "Breakfast")]
    Breakfast,
    #[serde(alias = "LUNCH", alias = "Lunch")]
    Lunch,
    #[serde(alias = "DINNER", alias = "Dinner")]
    Dinner,
}

impl MealTime {
    pub const ALL: [MealTime; 3] = [MealTime::Breakfast, MealTime::Lunch, MealTime::Dinner];

    pub fn as_str(&self) -> &'static str {
        match self {
            MealTime::Breakfast => "breakfast",
            MealTime::Lunch => "lunch",
            MealTime::Dinner => "dinner",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MealTime::Breakfast => "Breakfast",
            MealTime::Lunch => "Lunch",
            MealTime::Dinner => "Dinner",
        }
    }
}

impl fmt::Display for MealTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MealTime {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "breakfast" => Ok(MealTime::Breakfast),
            "lunch" => Ok(MealTime::Lunch),
            "dinner" => Ok(MealTime::Dinner),
            _ => Err(format!("Invalid meal choice: {}", s)),
        }
    }
}

/// Set of meal slots, kept in breakfast/lunch/dinner order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MealSet(BTreeSet<MealTime>);

impl MealSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, meal: MealTime) -> bool {
        self.0.contains(&meal)
    }

    pub fn insert(&mut self, meal: MealTime) -> bool {
        self.0.insert(meal)
    }

    /// Set or clear a slot, as a checkbox would.
    pub fn set(&mut self, meal: MealTime, checked: bool) {
        if checked {
            self.0.insert(meal);
        } else {
            self.0.remove(&meal);
        }
    }

    pub fn toggle(&mut self, meal: MealTime) {
        if !self.0.remove(&meal) {
            self.0.insert(meal);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = MealTime> + '_ {
        self.0.iter().copied()
    }
}

impl FromIterator<MealTime> for MealSet {
    fn from_iter<I: IntoIterator<Item = MealTime>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl fmt::Display for MealSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined = self.0.iter().map(MealTime::as_str).collect::<Vec<_>>().join(", ");
        f.write_str(&joined)
    }
}

/// Timestamp handling for participation windows.
///
/// Outbound values use the `datetime-local` input shape (`YYYY-MM-DDTHH:MM`);
/// inbound values may also carry seconds and fractional seconds.
pub mod wire_time {
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub const INPUT_FORMAT: &str = "%Y-%m-%dT%H:%M";

    const ACCEPTED_FORMATS: [&str; 3] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S%.f"];

    /// Parse a timestamp in any accepted shape.
    pub fn parse(value: &str) -> Option<NaiveDateTime> {
        let value = value.trim();
        ACCEPTED_FORMATS
            .iter()
            .find_map(|fmt| NaiveDateTime::parse_from_str(value, fmt).ok())
    }

    /// Render a timestamp for a `datetime-local` input.
    pub fn format(value: &NaiveDateTime) -> String {
        value.format(INPUT_FORMAT).to_string()
    }

    pub fn serialize<S: Serializer>(value: &Option<NaiveDateTime>, serializer: S) -> Result<S::Ok, S::Error> {
        match value {
            Some(v) => serializer.serialize_str(&format(v)),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<NaiveDateTime>, D::Error> {
        let raw = Option::<String>::deserialize(deserializer)?;
        match raw {
            None => Ok(None),
            Some(s) if s.trim().is_empty() => Ok(None),
            Some(s) => parse(&s)
                .map(Some)
                .ok_or_else(|| serde::de::Error::custom(format!("invalid timestamp: {}", s))),
        }
    }
}

/// A user record as listed by the admin endpoints.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UserRecord {
    /// Server-assigned identifier.
    pub id: i64,
    pub email: String,
    #[serde(default)]
    pub is_organiser: bool,
    #[serde(default)]
    pub meal_preference: Option<MealPreference>,
    #[serde(default)]
    pub meals: MealSet,
    #[serde(default, with = "wire_time")]
    pub participation_start_time: Option<NaiveDateTime>,
    #[serde(default, with = "wire_time")]
    pub participation_end_time: Option<NaiveDateTime>,
}

/// The signed-in user's own record, as returned by the profile endpoint.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Default)]
pub struct UserProfile {
    /// Only present on the id-addressed profile fetch.
    #[serde(default)]
    pub id: Option<i64>,
    pub email: String,
    #[serde(default)]
    pub is_organiser: Option<bool>,
    #[serde(default)]
    pub meal_preference: Option<MealPreference>,
    #[serde(default)]
    pub meals: MealSet,
    #[serde(default, with = "wire_time")]
    pub participation_start_time: Option<NaiveDateTime>,
    #[serde(default, with = "wire_time")]
    pub participation_end_time: Option<NaiveDateTime>,
}

impl From<UserRecord> for UserProfile {
    fn from(record: UserRecord) -> Self {
        Self {
            id: Some(record.id),
            email: record.email,
            is_organiser: Some(record.is_organiser),
            meal_preference: record.meal_preference,
            meals: record.meals,
            participation_start_time: record.participation_start_time,
            participation_end_time: record.participation_end_time,
        }
    }
}

impl UserProfile {
    /// Session identity carried by this profile.
    pub fn identity(&self) -> crate::session::Identity {
        crate::session::Identity {
            email: self.email.clone(),
            is_organiser: self.is_organiser,
        }
    }
}

/// Role probe payload (`{"is_organiser": bool}`).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleInfo {
    pub is_organiser: bool,
}

/// Request payload for the admin add-user action.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CreateUserRequest {
    pub email: String,
    /// Write-only; never echoed back by the server.
    pub password: String,
    pub is_organiser: bool,
    pub meal_preference: MealPreference,
    pub meals: MealSet,
    #[serde(with = "wire_time", skip_serializing_if = "Option::is_none", default)]
    pub participation_start_time: Option<NaiveDateTime>,
    #[serde(with = "wire_time", skip_serializing_if = "Option::is_none", default)]
    pub participation_end_time: Option<NaiveDateTime>,
}

/// Request payload for the admin update action.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UpdateUserRequest {
    pub email: String,
    pub is_organiser: bool,
    /// Sent as null when the record never had a preference.
    pub meal_preference: Option<MealPreference>,
    pub meals: MealSet,
    #[serde(with = "wire_time", default)]
    pub participation_start_time: Option<NaiveDateTime>,
    #[serde(with = "wire_time", default)]
    pub participation_end_time: Option<NaiveDateTime>,
}

impl UpdateUserRequest {
    /// The record the server should hold after applying this update to `id`.
    pub fn into_record(self, id: i64) -> UserRecord {
        UserRecord {
            id,
            email: self.email,
            is_organiser: self.is_organiser,
            meal_preference: self.meal_preference,
            meals: self.meals,
            participation_start_time: self.participation_start_time,
            participation_end_time: self.participation_end_time,
        }
    }
}

/// Request payload for self-registration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub meal_preference: MealPreference,
    /// The registration endpoint reads meal slots from `meal_times`.
    pub meal_times: MealSet,
    #[serde(with = "wire_time")]
    pub participation_start_time: Option<NaiveDateTime>,
    #[serde(with = "wire_time")]
    pub participation_end_time: Option<NaiveDateTime>,
}

/// Editable state of the add/update user modal, exactly as the inputs hold it.
#[derive(Clone, Debug, PartialEq)]
pub struct UserDraft {
    pub email: String,
    pub password: String,
    pub is_organiser: bool,
    /// `None` only when an update prefill came from a record without one.
    pub meal_preference: Option<MealPreference>,
    pub meals: MealSet,
    pub participation_start_time: String,
    pub participation_end_time: String,
}

impl Default for UserDraft {
    fn default() -> Self {
        Self {
            email: String::new(),
            password: String::new(),
            is_organiser: false,
            meal_preference: Some(MealPreference::default()),
            meals: MealSet::new(),
            participation_start_time: String::new(),
            participation_end_time: String::new(),
        }
    }
}

impl UserDraft {
    /// Defaults for the add-user modal.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Pre-filled state for the update modal.
    pub fn from_record(record: &UserRecord) -> Self {
        Self {
            email: record.email.clone(),
            password: String::new(),
            is_organiser: record.is_organiser,
            meal_preference: record.meal_preference,
            meals: record.meals.clone(),
            participation_start_time: record
                .participation_start_time
                .as_ref()
                .map(wire_time::format)
                .unwrap_or_default(),
            participation_end_time: record
                .participation_end_time
                .as_ref()
                .map(wire_time::format)
                .unwrap_or_default(),
        }
    }

    pub fn start_time(&self) -> Option<NaiveDateTime> {
        wire_time::parse(&self.participation_start_time)
    }

    pub fn end_time(&self) -> Option<NaiveDateTime> {
        wire_time::parse(&self.participation_end_time)
    }

    pub fn to_create_request(&self) -> CreateUserRequest {
        CreateUserRequest {
            email: self.email.trim().to_string(),
            password: self.password.clone(),
            is_organiser: self.is_organiser,
            meal_preference: self.meal_preference.unwrap_or_default(),
            meals: self.meals.clone(),
            participation_start_time: self.start_time(),
            participation_end_time: self.end_time(),
        }
    }

    pub fn to_register_request(&self) -> RegisterRequest {
        RegisterRequest {
            email: self.email.trim().to_string(),
            password: self.password.clone(),
            meal_preference: self.meal_preference.unwrap_or_default(),
            meal_times: self.meals.clone(),
            participation_start_time: self.start_time(),
            participation_end_time: self.end_time(),
        }
    }

    pub fn to_update_request(&self) -> UpdateUserRequest {
        UpdateUserRequest {
            email: self.email.trim().to_string(),
            is_organiser: self.is_organiser,
            meal_preference: self.meal_preference,
            meals: self.meals.clone(),
            participation_start_time: self.start_time(),
            participation_end_time: self.end_time(),
        }
    }
}

#[cfg(test)]
#[path = "users_tests.rs"]
mod tests;
