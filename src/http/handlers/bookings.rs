use axum::extract::{Extension, Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use uuid::Uuid;

use crate::domain::booking::{BookingWithVendor, NewBooking, UpdateBooking};
use crate::domain::user::AuthUser;
use crate::error::ApiError;
use crate::AppState;

pub async fn list_user_bookings(
    State(state): State<AppState>,
    Extension(principal): Extension<AuthUser>,
) -> Result<impl IntoResponse, ApiError> {
    let bookings = state.bookings_repo.list_by_user(principal.id).await?;
    Ok(Json(bookings))
}

pub async fn list_event_bookings(
    State(state): State<AppState>,
    Path(event_id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    let bookings = state.bookings_repo.list_by_event(event_id).await?;
    let mut with_vendors = Vec::with_capacity(bookings.len());
    for booking in bookings {
        let vendor = state.vendors_repo.get(booking.vendor_id).await?;
        with_vendors.push(BookingWithVendor { booking, vendor });
    }
    Ok(Json(with_vendors))
}

pub async fn list_vendor_bookings(
    State(state): State<AppState>,
    Extension(principal): Extension<AuthUser>,
) -> Result<impl IntoResponse, ApiError> {
    let vendor = state
        .vendors_repo
        .get_by_user_id(principal.id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Vendor profile not found".to_string()))?;
    let bookings = state.bookings_repo.list_by_vendor(vendor.id).await?;
    Ok(Json(bookings))
}

pub async fn create_booking(
    State(state): State<AppState>,
    Extension(principal): Extension<AuthUser>,
    Json(req): Json<NewBooking>,
) -> Result<impl IntoResponse, ApiError> {
    let booking = state.bookings_repo.create(principal.id, &req).await?;
    Ok((StatusCode::CREATED, Json(booking)))
}

pub async fn update_booking(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateBooking>,
) -> Result<impl IntoResponse, ApiError> {
    let booking = state
        .bookings_repo
        .update(id, &req)
        .await?
        .ok_or_else(|| ApiError::NotFound("Booking not found".to_string()))?;
    Ok(Json(booking))
}
