use std::{collections::HashMap, fmt};

use chrono::{NaiveDate, NaiveDateTime};

use crate::users::{UserDraft, wire_time};

/// Field errors raised by client-side form checks.
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    Required,
    InvalidEmail,
    InvalidTimestamp,
    StartInPast,
    EndBeforeStart,
    Other(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::Required => write!(f, "This field is required"),
            ValidationError::InvalidEmail => write!(f, "Enter a valid email address"),
            ValidationError::InvalidTimestamp => write!(f, "Enter a date and time"),
            ValidationError::StartInPast => write!(f, "Participation Start Time must be today or in the future."),
            ValidationError::EndBeforeStart => {
                write!(f, "Participation End Time cannot be before Participation Start Time.")
            }
            ValidationError::Other(msg) => write!(f, "{}", msg),
        }
    }
}

pub type FieldErrors = HashMap<String, ValidationError>;

pub const FIELD_EMAIL: &str = "email";
pub const FIELD_PASSWORD: &str = "password";
pub const FIELD_START: &str = "participation_start_time";
pub const FIELD_END: &str = "participation_end_time";

/// Whether add or update semantics apply to the user modal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Add,
    Update,
}

/// Check the participation window invariant.
///
/// `today` is the start of the current local day; a start earlier than that is
/// rejected only when `require_future_start` is set.
pub fn validate_window(
    start: Option<NaiveDateTime>,
    end: Option<NaiveDateTime>,
    today: NaiveDate,
    require_future_start: bool,
) -> FieldErrors {
    let mut errors = HashMap::new();

    if let Some(start) = start {
        if require_future_start && start.date() < today {
            errors.insert(FIELD_START.to_string(), ValidationError::StartInPast);
        }
        if let Some(end) = end {
            if end < start {
                errors.insert(FIELD_END.to_string(), ValidationError::EndBeforeStart);
            }
        }
    }

    errors
}

/// Loose address check; the server does the authoritative validation.
pub fn looks_like_email(value: &str) -> bool {
    let value = value.trim();
    match value.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty() && !domain.is_empty() && !domain.starts_with('.') && !domain.ends_with('.') && !value.contains(' ')
        }
        None => false,
    }
}

fn check_email(errors: &mut FieldErrors, email: &str) {
    if email.trim().is_empty() {
        errors.insert(FIELD_EMAIL.to_string(), ValidationError::Required);
    } else if !looks_like_email(email) {
        errors.insert(FIELD_EMAIL.to_string(), ValidationError::InvalidEmail);
    }
}

/// Parse a `datetime-local` field, recording an error when present but malformed.
fn check_time(errors: &mut FieldErrors, field: &str, raw: &str, required: bool) -> Option<NaiveDateTime> {
    if raw.trim().is_empty() {
        if required {
            errors.insert(field.to_string(), ValidationError::Required);
        }
        return None;
    }
    let parsed = wire_time::parse(raw);
    if parsed.is_none() {
        errors.insert(field.to_string(), ValidationError::InvalidTimestamp);
    }
    parsed
}

/// Login form input.
#[derive(Debug, Clone, Default)]
pub struct LoginInput<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

impl<'a> LoginInput<'a> {
    pub fn validate(&self) -> FieldErrors {
        let mut errors = HashMap::new();
        if self.email.trim().is_empty() {
            errors.insert(FIELD_EMAIL.to_string(), ValidationError::Required);
        }
        if self.password.is_empty() {
            errors.insert(FIELD_PASSWORD.to_string(), ValidationError::Required);
        }
        errors
    }
}

/// Registration form input.
#[derive(Debug, Clone, Default)]
pub struct RegistrationInput<'a> {
    pub email: &'a str,
    pub password: &'a str,
    pub participation_start_time: &'a str,
    pub participation_end_time: &'a str,
}

impl<'a> RegistrationInput<'a> {
    pub fn validate(&self, today: NaiveDate) -> FieldErrors {
        let mut errors = HashMap::new();

        check_email(&mut errors, self.email);
        if self.password.is_empty() {
            errors.insert(FIELD_PASSWORD.to_string(), ValidationError::Required);
        }

        let start = check_time(&mut errors, FIELD_START, self.participation_start_time, true);
        let end = check_time(&mut errors, FIELD_END, self.participation_end_time, true);
        errors.extend(validate_window(start, end, today, true));

        errors
    }
}

/// Add/update user modal input.
#[derive(Debug, Clone)]
pub struct UserFormInput<'a> {
    pub draft: &'a UserDraft,
    pub mode: FormMode,
}

impl<'a> UserFormInput<'a> {
    pub fn new(draft: &'a UserDraft, mode: FormMode) -> Self {
        Self { draft, mode }
    }

    /// Only the email (and the password when adding) is mandatory; the window
    /// is checked whenever both ends are filled in.
    pub fn validate(&self, today: NaiveDate) -> FieldErrors {
        let mut errors = HashMap::new();
        let adding = self.mode == FormMode::Add;

        check_email(&mut errors, &self.draft.email);
        if adding && self.draft.password.is_empty() {
            errors.insert(FIELD_PASSWORD.to_string(), ValidationError::Required);
        }

        let start = check_time(&mut errors, FIELD_START, &self.draft.participation_start_time, false);
        let end = check_time(&mut errors, FIELD_END, &self.draft.participation_end_time, false);
        errors.extend(validate_window(start, end, today, adding));

        errors
    }
}

/// Render a human-readable string from a map of validation errors, in field order.
pub fn format_errors(errors: &FieldErrors) -> String {
    let mut entries: Vec<_> = errors.iter().collect();
    entries.sort_by(|a, b| a.0.cmp(b.0));
    entries
        .into_iter()
        .map(|(k, v)| format!("{}: {}", field_label(k), v))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Display name for a form field key.
pub fn field_label(field: &str) -> &str {
    match field {
        FIELD_EMAIL => "Email",
        FIELD_PASSWORD => "Password",
        FIELD_START => "Participation Start Time",
        FIELD_END => "Participation End Time",
        other => other,
    }
}

#[cfg(test)]
#[path = "validation_tests.rs"]
mod tests;
