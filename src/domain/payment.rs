use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::booking::Booking;
use crate::domain::vendor::Vendor;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(type_name = "payment_status", rename_all = "lowercase")]
pub enum PaymentStatus {
    Pending,
    Processing,
    Completed,
    Failed,
    Refunded,
}

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    pub id: Uuid,
    pub booking_id: Uuid,
    pub user_id: Uuid,
    pub vendor_id: Uuid,
    pub amount: Decimal,
    pub status: PaymentStatus,
    pub stripe_payment_id: Option<String>,
    pub stripe_session_id: Option<String>,
    pub paid_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPayment {
    pub booking_id: Uuid,
    pub vendor_id: Uuid,
    pub amount: Decimal,
    pub status: Option<PaymentStatus>,
    pub stripe_payment_id: Option<String>,
    pub stripe_session_id: Option<String>,
}

/// Payment joined with its booking and vendor for the user payment history.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentWithDetails {
    #[serde(flatten)]
    pub payment: Payment,
    pub booking: Option<Booking>,
    pub vendor: Option<Vendor>,
}
