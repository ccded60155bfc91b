//! Axum route handlers for the job-profile API.

use axum::extract::{Path, State};
use axum::Json;
use serde_json::{json, Value};

use crate::errors::AppError;
use crate::profiles::models::{JobProfile, JobProfilesResponse};
use crate::state::AppState;

/// GET /api/v1/profiles
pub async fn handle_list_profiles(State(state): State<AppState>) -> Json<JobProfilesResponse> {
    let profiles = state.profiles.all().await;
    let categories = state.profiles.categories().await;
    Json(JobProfilesResponse {
        profiles,
        categories,
    })
}

/// GET /api/v1/profiles/:id
pub async fn handle_get_profile(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<JobProfile>, AppError> {
    state
        .profiles
        .get(&id)
        .await
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Job profile '{id}' not found")))
}

/// POST /api/v1/profiles
pub async fn handle_create_profile(
    State(state): State<AppState>,
    Json(profile): Json<JobProfile>,
) -> Result<Json<JobProfile>, AppError> {
    Ok(Json(state.profiles.create(profile).await?))
}

/// PUT /api/v1/profiles/:id
pub async fn handle_update_profile(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(profile): Json<JobProfile>,
) -> Result<Json<JobProfile>, AppError> {
    Ok(Json(state.profiles.update(&id, profile).await?))
}

/// DELETE /api/v1/profiles/:id
pub async fn handle_delete_profile(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Value>, AppError> {
    state.profiles.delete(&id).await?;
    Ok(Json(json!({
        "message": format!("Profile '{id}' deleted successfully")
    })))
}
