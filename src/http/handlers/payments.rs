use axum::extract::{Extension, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use crate::domain::payment::{NewPayment, PaymentWithDetails};
use crate::domain::user::AuthUser;
use crate::error::ApiError;
use crate::AppState;

pub async fn list_payments(
    State(state): State<AppState>,
    Extension(principal): Extension<AuthUser>,
) -> Result<impl IntoResponse, ApiError> {
    let payments = state.payments_repo.list_by_user(principal.id).await?;
    Ok(Json(payments))
}

/// Manual payment record, outside the checkout flow.
pub async fn create_payment(
    State(state): State<AppState>,
    Extension(principal): Extension<AuthUser>,
    Json(req): Json<NewPayment>,
) -> Result<impl IntoResponse, ApiError> {
    let payment = state.payments_repo.create(principal.id, &req).await?;
    Ok((StatusCode::CREATED, Json(payment)))
}

/// Payment history joined with the booking and vendor each payment was for.
pub async fn list_payments_with_details(
    State(state): State<AppState>,
    Extension(principal): Extension<AuthUser>,
) -> Result<impl IntoResponse, ApiError> {
    let payments = state.payments_repo.list_by_user(principal.id).await?;
    let mut detailed = Vec::with_capacity(payments.len());
    for payment in payments {
        let booking = state.bookings_repo.get(payment.booking_id).await?;
        let vendor = match &booking {
            Some(b) => state.vendors_repo.get(b.vendor_id).await?,
            None => None,
        };
        detailed.push(PaymentWithDetails { payment, booking, vendor });
    }
    Ok(Json(detailed))
}
