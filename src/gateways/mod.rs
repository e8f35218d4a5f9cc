use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

pub mod mock;
pub mod stripe;

/// Metadata embedded into every checkout session so verification can tie
/// the provider's confirmation back to local rows.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionMetadata {
    #[serde(rename = "bookingId")]
    pub booking_id: String,
    #[serde(rename = "userId")]
    pub user_id: String,
    #[serde(rename = "vendorId")]
    pub vendor_id: String,
}

impl SessionMetadata {
    pub fn new(booking_id: Uuid, user_id: Uuid, vendor_id: Uuid) -> Self {
        SessionMetadata {
            booking_id: booking_id.to_string(),
            user_id: user_id.to_string(),
            vendor_id: vendor_id.to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct CheckoutRequest {
    pub product_name: String,
    pub product_description: String,
    pub amount_minor: i64,
    pub currency: String,
    pub success_url: String,
    pub cancel_url: String,
    pub metadata: SessionMetadata,
}

#[derive(Debug, Clone)]
pub struct CreatedSession {
    pub session_id: String,
    pub url: String,
}

/// A checkout session as reported back by the provider. `payment_status`
/// is the provider's verbatim value ("paid", "unpaid", ...).
#[derive(Debug, Clone, Deserialize)]
pub struct ProviderSession {
    pub id: String,
    pub payment_status: String,
    #[serde(default)]
    pub payment_intent: Option<String>,
    #[serde(default)]
    pub metadata: HashMap<String, String>,
}

impl ProviderSession {
    pub fn is_paid(&self) -> bool {
        self.payment_status == "paid"
    }

    pub fn meta(&self, key: &str) -> Option<&str> {
        self.metadata.get(key).map(String::as_str)
    }
}

#[async_trait::async_trait]
pub trait CheckoutProvider: Send + Sync {
    fn name(&self) -> &'static str;

    async fn create_checkout_session(&self, request: CheckoutRequest) -> Result<CreatedSession>;

    async fn retrieve_checkout_session(&self, session_id: &str) -> Result<ProviderSession>;
}
