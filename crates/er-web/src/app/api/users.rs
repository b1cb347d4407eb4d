use er_types::{
    auth::MessageResponse, config::endpoints, users::{CreateUserRequest, UpdateUserRequest, UserRecord}
};

use super::{ApiClient, Method};
use crate::error::ApiError;

impl ApiClient {
    pub async fn list_users(&self) -> Result<Vec<UserRecord>, ApiError> {
        self.get_json(endpoints::USERS).await
    }

    pub async fn get_user(&self, id: i64) -> Result<UserRecord, ApiError> {
        self.get_json(&endpoints::user_path(id)).await
    }

    /// Create a user; the server answers with the stored record.
    pub async fn create_user(&self, request: &CreateUserRequest) -> Result<UserRecord, ApiError> {
        self.send_json(Method::POST, endpoints::USERS, request).await
    }

    /// Update a user and return the record as it should now be shown.
    ///
    /// Falls back to the submitted values when the response body is not a record.
    pub async fn update_user(&self, id: i64, request: &UpdateUserRequest) -> Result<UserRecord, ApiError> {
        let body = serde_json::to_value(request).map_err(ApiError::internal)?;
        let response = self.send(Method::PUT, &endpoints::user_path(id), Some(body)).await?;
        Ok(response
            .json::<UserRecord>()
            .unwrap_or_else(|_| request.clone().into_record(id)))
    }

    pub async fn delete_user(&self, id: i64) -> Result<String, ApiError> {
        let response = self.send(Method::DELETE, &endpoints::user_path(id), None).await?;
        Ok(response.json::<MessageResponse>().map(|m| m.message).unwrap_or_default())
    }
}
