use axum::extract::{Extension, Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use uuid::Uuid;

use crate::domain::event::{NewEventTask, TaskStatus, UpdateEventTask};
use crate::domain::user::AuthUser;
use crate::error::ApiError;
use crate::AppState;

pub async fn list_event_tasks(
    State(state): State<AppState>,
    Path(event_id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    let tasks = state.event_tasks_repo.list_by_event(event_id).await?;
    Ok(Json(tasks))
}

pub async fn list_user_tasks(
    State(state): State<AppState>,
    Extension(principal): Extension<AuthUser>,
) -> Result<impl IntoResponse, ApiError> {
    let tasks = state.event_tasks_repo.list_by_event_owner(principal.id).await?;
    Ok(Json(tasks))
}

pub async fn create_task(
    State(state): State<AppState>,
    Path(event_id): Path<Uuid>,
    Json(req): Json<NewEventTask>,
) -> Result<impl IntoResponse, ApiError> {
    let task = state.event_tasks_repo.create(event_id, &req).await?;
    Ok((StatusCode::CREATED, Json(task)))
}

pub async fn update_task(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateEventTask>,
) -> Result<impl IntoResponse, ApiError> {
    let completed_at = if req.status == Some(TaskStatus::Completed) {
        Some(chrono::Utc::now())
    } else {
        None
    };
    let task = state
        .event_tasks_repo
        .update(id, &req, completed_at)
        .await?
        .ok_or_else(|| ApiError::NotFound("Task not found".to_string()))?;
    Ok(Json(task))
}

pub async fn delete_task(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    state.event_tasks_repo.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
