use axum::extract::{Extension, Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use uuid::Uuid;

use crate::domain::event::{NewEvent, UpdateEvent};
use crate::domain::user::AuthUser;
use crate::error::ApiError;
use crate::AppState;

pub async fn list_events(
    State(state): State<AppState>,
    Extension(principal): Extension<AuthUser>,
) -> Result<impl IntoResponse, ApiError> {
    let events = state.events_repo.list_by_user(principal.id).await?;
    Ok(Json(events))
}

pub async fn get_event(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    let event = state
        .events_repo
        .get(id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Event not found".to_string()))?;
    Ok(Json(event))
}

pub async fn create_event(
    State(state): State<AppState>,
    Extension(principal): Extension<AuthUser>,
    Json(req): Json<NewEvent>,
) -> Result<impl IntoResponse, ApiError> {
    let event = state.events_repo.create(principal.id, &req).await?;
    Ok((StatusCode::CREATED, Json(event)))
}

pub async fn update_event(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateEvent>,
) -> Result<impl IntoResponse, ApiError> {
    let event = state
        .events_repo
        .update(id, &req)
        .await?
        .ok_or_else(|| ApiError::NotFound("Event not found".to_string()))?;
    Ok(Json(event))
}

pub async fn delete_event(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    state.events_repo.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
