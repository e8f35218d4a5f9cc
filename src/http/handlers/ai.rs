use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;

use crate::ai::{RecommendationQuery, VendorSuggestionQuery};
use crate::error::ApiError;
use crate::AppState;

pub async fn recommendations(
    State(state): State<AppState>,
    Json(query): Json<RecommendationQuery>,
) -> Result<impl IntoResponse, ApiError> {
    // The roster gives the model real vendors to recommend by name.
    let vendors = state.vendors_repo.list_active().await?;
    let response = state.ai.event_recommendations(&query, &vendors).await;
    Ok(Json(response))
}

pub async fn vendor_suggestions(
    State(state): State<AppState>,
    Json(query): Json<VendorSuggestionQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let response = state.ai.vendor_suggestions(&query).await;
    Ok(Json(response))
}
