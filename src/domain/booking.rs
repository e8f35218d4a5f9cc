use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::vendor::Vendor;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(type_name = "booking_status", rename_all = "lowercase")]
pub enum BookingStatus {
    Pending,
    Accepted,
    Rejected,
    Completed,
    Cancelled,
}

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: Uuid,
    pub event_id: Uuid,
    pub vendor_id: Uuid,
    pub user_id: Uuid,
    pub service_name: String,
    pub amount: Decimal,
    pub status: BookingStatus,
    pub notes: Option<String>,
    pub scheduled_date: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewBooking {
    pub event_id: Uuid,
    pub vendor_id: Uuid,
    pub service_name: String,
    pub amount: Decimal,
    pub notes: Option<String>,
    pub scheduled_date: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBooking {
    pub service_name: Option<String>,
    pub amount: Option<Decimal>,
    pub status: Option<BookingStatus>,
    pub notes: Option<String>,
    pub scheduled_date: Option<DateTime<Utc>>,
}

/// Booking joined with its vendor for event-scoped listings.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingWithVendor {
    #[serde(flatten)]
    pub booking: Booking,
    pub vendor: Option<Vendor>,
}
