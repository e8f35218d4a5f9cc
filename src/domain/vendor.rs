use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(type_name = "vendor_category", rename_all = "lowercase")]
pub enum VendorCategory {
    Venue,
    Catering,
    Decoration,
    Photography,
    Entertainment,
    Florist,
    Cake,
    Transport,
    Other,
}

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Vendor {
    pub id: Uuid,
    pub user_id: Uuid,
    pub business_name: String,
    pub category: VendorCategory,
    pub description: Option<String>,
    pub services: Option<serde_json::Value>,
    pub price_range: Option<serde_json::Value>,
    pub location: Option<String>,
    pub rating: Decimal,
    pub review_count: i32,
    pub images: Option<serde_json::Value>,
    pub availability: Option<serde_json::Value>,
    pub is_verified: bool,
    pub is_active: bool,
    pub stripe_account_id: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewVendor {
    pub business_name: String,
    pub category: VendorCategory,
    pub description: Option<String>,
    pub services: Option<serde_json::Value>,
    pub price_range: Option<serde_json::Value>,
    pub location: Option<String>,
    pub images: Option<serde_json::Value>,
    pub availability: Option<serde_json::Value>,
}

/// Partial update; absent fields keep their stored value.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateVendor {
    pub business_name: Option<String>,
    pub category: Option<VendorCategory>,
    pub description: Option<String>,
    pub services: Option<serde_json::Value>,
    pub price_range: Option<serde_json::Value>,
    pub location: Option<String>,
    pub images: Option<serde_json::Value>,
    pub availability: Option<serde_json::Value>,
    pub is_verified: Option<bool>,
    pub is_active: Option<bool>,
}
