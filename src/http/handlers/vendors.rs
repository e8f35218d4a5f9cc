use axum::extract::{Extension, Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;
use uuid::Uuid;

use crate::domain::user::{AuthUser, UserRole};
use crate::domain::vendor::{NewVendor, UpdateVendor, VendorCategory};
use crate::error::ApiError;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct VendorListQuery {
    pub category: Option<VendorCategory>,
}

pub async fn list_vendors(
    State(state): State<AppState>,
    Query(query): Query<VendorListQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let vendors = match query.category {
        Some(category) => state.vendors_repo.list_by_category(category).await?,
        None => state.vendors_repo.list_active().await?,
    };
    Ok(Json(vendors))
}

pub async fn get_vendor(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    let vendor = state
        .vendors_repo
        .get(id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Vendor not found".to_string()))?;
    Ok(Json(vendor))
}

pub async fn get_profile(
    State(state): State<AppState>,
    Extension(principal): Extension<AuthUser>,
) -> Result<impl IntoResponse, ApiError> {
    let vendor = state
        .vendors_repo
        .get_by_user_id(principal.id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Vendor profile not found".to_string()))?;
    Ok(Json(vendor))
}

/// Turns an existing user account into a vendor account.
pub async fn setup_profile(
    State(state): State<AppState>,
    Extension(principal): Extension<AuthUser>,
    Json(req): Json<NewVendor>,
) -> Result<impl IntoResponse, ApiError> {
    let vendor = state.vendors_repo.create(principal.id, &req).await?;
    state.users_repo.update_role(principal.id, UserRole::Vendor).await?;
    Ok((StatusCode::CREATED, Json(vendor)))
}

pub async fn update_profile(
    State(state): State<AppState>,
    Extension(principal): Extension<AuthUser>,
    Json(req): Json<UpdateVendor>,
) -> Result<impl IntoResponse, ApiError> {
    let vendor = state
        .vendors_repo
        .get_by_user_id(principal.id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Vendor profile not found".to_string()))?;
    let updated = state
        .vendors_repo
        .update(vendor.id, &req)
        .await?
        .ok_or_else(|| ApiError::NotFound("Vendor profile not found".to_string()))?;
    Ok(Json(updated))
}
