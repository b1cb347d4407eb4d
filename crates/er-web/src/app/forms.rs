//! Submit flows shared by the form pages: validate locally, then send once.

use chrono::NaiveDate;
use er_types::{
    auth::{LoginRequest, LoginResponse}, users::UserDraft, validation::{FieldErrors, LoginInput, RegistrationInput, format_errors}
};
use thiserror::Error;

use crate::{app::api::ApiClient, error::ApiError};

/// Why a form submission did not go through.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum SubmitError {
    /// Rejected locally; no request was sent.
    #[error("{}", format_errors(.0))]
    Invalid(FieldErrors),
    #[error(transparent)]
    Api(#[from] ApiError),
}

impl SubmitError {
    /// Field errors to highlight, if the failure was local.
    pub fn field_errors(&self) -> Option<&FieldErrors> {
        match self {
            SubmitError::Invalid(errors) => Some(errors),
            SubmitError::Api(_) => None,
        }
    }
}

/// The local calendar day, used for the "start is not in the past" check.
pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub async fn submit_login(client: &ApiClient, email: &str, password: &str) -> Result<LoginResponse, SubmitError> {
    let errors = LoginInput { email, password }.validate();
    if !errors.is_empty() {
        return Err(SubmitError::Invalid(errors));
    }

    let request = LoginRequest {
        email: email.trim().to_string(),
        password: password.to_string(),
    };
    Ok(client.login(&request).await?)
}

/// Register from the registration form state; returns the server message.
pub async fn submit_registration(client: &ApiClient, draft: &UserDraft, today: NaiveDate) -> Result<String, SubmitError> {
    let errors = RegistrationInput {
        email: &draft.email,
        password: &draft.password,
        participation_start_time: &draft.participation_start_time,
        participation_end_time: &draft.participation_end_time,
    }
    .validate(today);
    if !errors.is_empty() {
        return Err(SubmitError::Invalid(errors));
    }

    Ok(client.register(&draft.to_register_request()).await?)
}
