use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;

use crate::AppState;

pub async fn health() -> impl IntoResponse {
    (axum::http::StatusCode::OK, "ok")
}

pub async fn stripe_publishable_key(State(state): State<AppState>) -> impl IntoResponse {
    Json(serde_json::json!({ "publishableKey": state.config.stripe_publishable_key }))
}
