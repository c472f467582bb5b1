use axum::{
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::ToSchema;

use tourla_persist::UserProfile;

use crate::{
    error::{ApiError, ApiResult},
    state::AppState,
};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ProfileResponse {
    pub user_id: String,
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub avatar_url: Option<String>,
    pub display_name: Option<String>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl From<UserProfile> for ProfileResponse {
    fn from(profile: UserProfile) -> Self {
        Self {
            display_name: profile.display_name().map(str::to_string),
            user_id: profile.id,
            full_name: profile.full_name,
            email: profile.email,
            avatar_url: profile.avatar_url,
            updated_at: profile.updated_at,
        }
    }
}

/// Fields left out of the request keep their stored value.
#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdateProfileRequest {
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub avatar_url: Option<String>,
}

/// Get a user's profile
#[utoipa::path(
    get,
    path = "/profiles/{user_id}",
    params(
        ("user_id" = String, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "Profile", body = ProfileResponse),
        (status = 404, description = "Profile not found")
    ),
    tag = "profiles"
)]
pub async fn get_profile(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<String>,
) -> ApiResult<Json<ProfileResponse>> {
    let profile = state
        .persist
        .get_profile(&user_id)
        .await?
        .ok_or(ApiError::ProfileNotFound(user_id))?;

    Ok(Json(profile.into()))
}

/// Create or update a user's profile
#[utoipa::path(
    put,
    path = "/profiles/{user_id}",
    params(
        ("user_id" = String, Path, description = "User ID")
    ),
    request_body = UpdateProfileRequest,
    responses(
        (status = 200, description = "Updated profile", body = ProfileResponse),
        (status = 400, description = "Invalid request")
    ),
    tag = "profiles"
)]
pub async fn update_profile(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<String>,
    Json(req): Json<UpdateProfileRequest>,
) -> ApiResult<Json<ProfileResponse>> {
    if let Some(url) = req.avatar_url.as_deref() {
        if !(url.starts_with("https://") || url.starts_with("http://")) {
            return Err(ApiError::BadRequest("avatar_url must be an http(s) URL".to_string()));
        }
    }

    let mut profile = state
        .persist
        .get_profile(&user_id)
        .await?
        .unwrap_or_else(|| UserProfile::new(user_id.as_str()));

    if req.full_name.is_some() {
        profile.full_name = req.full_name;
    }
    if req.email.is_some() {
        profile.email = req.email;
    }
    if req.avatar_url.is_some() {
        profile.avatar_url = req.avatar_url;
    }
    profile.updated_at = chrono::Utc::now();

    let saved = state.persist.upsert_profile(profile).await?;
    Ok(Json(saved.into()))
}
