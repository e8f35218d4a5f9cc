use anyhow::{anyhow, Result};
use hmac::{Hmac, Mac};
use sha2::Sha256;

use crate::gateways::{CheckoutProvider, CheckoutRequest, CreatedSession, ProviderSession};

type HmacSha256 = Hmac<Sha256>;

const SIGNATURE_TOLERANCE_SECS: i64 = 300;

pub struct StripeGateway {
    pub base_url: String,
    pub secret_key: String,
    pub timeout_ms: u64,
    pub client: reqwest::Client,
}

#[async_trait::async_trait]
impl CheckoutProvider for StripeGateway {
    fn name(&self) -> &'static str {
        "stripe"
    }

    async fn create_checkout_session(&self, request: CheckoutRequest) -> Result<CreatedSession> {
        let url = format!("{}/v1/checkout/sessions", self.base_url);
        let amount = request.amount_minor.to_string();
        let form: Vec<(&str, &str)> = vec![
            ("mode", "payment"),
            ("payment_method_types[0]", "card"),
            ("line_items[0][price_data][currency]", &request.currency),
            ("line_items[0][price_data][product_data][name]", &request.product_name),
            (
                "line_items[0][price_data][product_data][description]",
                &request.product_description,
            ),
            ("line_items[0][price_data][unit_amount]", &amount),
            ("line_items[0][quantity]", "1"),
            ("success_url", &request.success_url),
            ("cancel_url", &request.cancel_url),
            ("metadata[bookingId]", &request.metadata.booking_id),
            ("metadata[userId]", &request.metadata.user_id),
            ("metadata[vendorId]", &request.metadata.vendor_id),
        ];

        let resp = self
            .client
            .post(url)
            .basic_auth(&self.secret_key, None::<&str>)
            .form(&form)
            .timeout(std::time::Duration::from_millis(self.timeout_ms))
            .send()
            .await?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            return Err(anyhow!(
                "stripe checkout session create failed: HTTP {} {}",
                status.as_u16(),
                body.chars().take(200).collect::<String>()
            ));
        }

        let v: serde_json::Value = resp.json().await?;
        let session_id = v
            .get("id")
            .and_then(|id| id.as_str())
            .ok_or_else(|| anyhow!("stripe response missing session id"))?
            .to_string();
        let url = v
            .get("url")
            .and_then(|u| u.as_str())
            .ok_or_else(|| anyhow!("stripe response missing checkout url"))?
            .to_string();

        Ok(CreatedSession { session_id, url })
    }

    async fn retrieve_checkout_session(&self, session_id: &str) -> Result<ProviderSession> {
        let url = format!("{}/v1/checkout/sessions/{}", self.base_url, session_id);
        let resp = self
            .client
            .get(url)
            .basic_auth(&self.secret_key, None::<&str>)
            .timeout(std::time::Duration::from_millis(self.timeout_ms))
            .send()
            .await?;

        if !resp.status().is_success() {
            let status = resp.status();
            return Err(anyhow!("stripe session retrieve failed: HTTP {}", status.as_u16()));
        }

        Ok(resp.json::<ProviderSession>().await?)
    }
}

/// Verify a `stripe-signature` header (`t=<ts>,v1=<hex>[,v1=...]`) against
/// the raw request body. HMAC-SHA256 over `"{t}.{body}"`, 5 minute
/// timestamp tolerance.
pub fn verify_webhook_signature(
    payload: &[u8],
    signature_header: &str,
    secret: &str,
    now_unix: i64,
) -> Result<()> {
    let mut timestamp: Option<i64> = None;
    let mut candidates: Vec<Vec<u8>> = Vec::new();

    for part in signature_header.split(',') {
        match part.trim().split_once('=') {
            Some(("t", value)) => timestamp = value.parse::<i64>().ok(),
            Some(("v1", value)) => {
                if let Ok(sig) = hex::decode(value) {
                    candidates.push(sig);
                }
            }
            _ => {}
        }
    }

    let timestamp = timestamp.ok_or_else(|| anyhow!("signature header missing timestamp"))?;
    if (now_unix - timestamp).abs() > SIGNATURE_TOLERANCE_SECS {
        return Err(anyhow!("signature timestamp outside tolerance"));
    }
    if candidates.is_empty() {
        return Err(anyhow!("signature header missing v1 signature"));
    }

    for candidate in candidates {
        let mut mac = HmacSha256::new_from_slice(secret.as_bytes())
            .map_err(|_| anyhow!("invalid webhook secret"))?;
        mac.update(timestamp.to_string().as_bytes());
        mac.update(b".");
        mac.update(payload);
        if mac.verify_slice(&candidate).is_ok() {
            return Ok(());
        }
    }

    Err(anyhow!("no matching webhook signature"))
}
