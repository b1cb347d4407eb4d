//! Admin mutations expressed as roster actions.
//!
//! Each call either yields the `RosterAction` to apply or an error to show;
//! the table state is only touched through the former.

use chrono::NaiveDate;
use er_types::{
    roster::RosterAction, users::UserDraft, validation::{FormMode, UserFormInput}
};
use tracing::info;

use crate::{
    app::{api::ApiClient, forms::SubmitError}, error::ApiError
};

/// Which record the user dialog is editing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EditTarget {
    Add,
    Update(i64),
}

impl EditTarget {
    pub fn mode(self) -> FormMode {
        match self {
            EditTarget::Add => FormMode::Add,
            EditTarget::Update(_) => FormMode::Update,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            EditTarget::Add => "Add User",
            EditTarget::Update(_) => "Update User",
        }
    }
}

pub async fn load_users(client: &ApiClient) -> Result<RosterAction, ApiError> {
    Ok(RosterAction::Loaded(client.list_users().await?))
}

/// Validate `draft` and, if it passes, create or update the user.
pub async fn submit_user(
    client: &ApiClient,
    target: EditTarget,
    draft: &UserDraft,
    today: NaiveDate,
) -> Result<RosterAction, SubmitError> {
    let errors = UserFormInput::new(draft, target.mode()).validate(today);
    if !errors.is_empty() {
        return Err(SubmitError::Invalid(errors));
    }

    let action = match target {
        EditTarget::Add => RosterAction::Created(client.create_user(&draft.to_create_request()).await?),
        EditTarget::Update(id) => RosterAction::Updated(client.update_user(id, &draft.to_update_request()).await?),
    };
    info!(?target, "user saved");
    Ok(action)
}

pub async fn remove_user(client: &ApiClient, id: i64) -> Result<RosterAction, ApiError> {
    client.delete_user(id).await?;
    info!(id, "user deleted");
    Ok(RosterAction::Deleted(id))
}
