//! # Profile Endpoints

use shared::dto::envelope::Ack;
use shared::dto::profile::{ProfileResponse, ProfileUpdateRequest};

use super::client::ApiClient;
use super::response::ApiResponse;
use crate::core::error::{AppError, Result};
use crate::utils::validation::validate_email;

/// Fetch the signed-in user's profile.
pub async fn get_profile(client: &ApiClient) -> Result<ApiResponse<ProfileResponse>> {
    client.get("/profile").await
}

/// Update the fields that are set in `update`.
pub async fn update_profile(
    client: &ApiClient,
    update: &ProfileUpdateRequest,
) -> Result<ApiResponse<Ack>> {
    if update.is_empty() {
        return Err(AppError::Validation("Nothing to update".to_string()));
    }
    if let Some(email) = update.email.as_deref() {
        validate_email(email).into_result()?;
    }

    client.post("/profile/update", update).await
}
