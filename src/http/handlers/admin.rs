use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;
use uuid::Uuid;

use crate::domain::user::UserRole;
use crate::domain::vendor::UpdateVendor;
use crate::error::ApiError;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct UpdateRoleRequest {
    pub role: UserRole,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifyVendorRequest {
    pub is_verified: bool,
}

pub async fn stats(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let stats = state.stats_repo.admin_stats().await?;
    Ok(Json(stats))
}

pub async fn list_users(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let users = state.users_repo.list_all().await?;
    Ok(Json(users))
}

pub async fn list_events(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let events = state.events_repo.list_all().await?;
    Ok(Json(events))
}

pub async fn list_bookings(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let bookings = state.bookings_repo.list_all().await?;
    Ok(Json(bookings))
}

pub async fn update_user_role(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateRoleRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let user = state
        .users_repo
        .update_role(id, req.role)
        .await?
        .ok_or_else(|| ApiError::NotFound("User not found".to_string()))?;
    Ok(Json(user))
}

pub async fn verify_vendor(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<VerifyVendorRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let update = UpdateVendor {
        is_verified: Some(req.is_verified),
        ..UpdateVendor::default()
    };
    let vendor = state
        .vendors_repo
        .update(id, &update)
        .await?
        .ok_or_else(|| ApiError::NotFound("Vendor not found".to_string()))?;
    Ok(Json(vendor))
}
