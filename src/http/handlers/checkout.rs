use axum::extract::{Extension, State};
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;
use uuid::Uuid;

use crate::domain::user::AuthUser;
use crate::error::ApiError;
use crate::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutBookingRequest {
    pub booking_id: Uuid,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifyRequest {
    pub session_id: Option<String>,
}

pub async fn checkout_booking(
    State(state): State<AppState>,
    Extension(principal): Extension<AuthUser>,
    Json(req): Json<CheckoutBookingRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let response = state
        .settlement
        .initiate_checkout(req.booking_id, principal.id)
        .await?;
    Ok(Json(response))
}

pub async fn verify_payment(
    State(state): State<AppState>,
    Extension(principal): Extension<AuthUser>,
    Json(req): Json<VerifyRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let session_id = req.session_id.unwrap_or_default();
    let response = state.settlement.verify_payment(&session_id, principal.id).await?;
    Ok(Json(response))
}
