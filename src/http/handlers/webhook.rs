use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::IntoResponse;
use axum::Json;

use crate::gateways::stripe::verify_webhook_signature;
use crate::gateways::ProviderSession;
use crate::AppState;

/// Provider-initiated settlement path. The body must arrive raw because
/// the signature covers the exact bytes on the wire.
pub async fn stripe_webhook(
    State(state): State<AppState>,
    Path(uuid): Path<String>,
    headers: HeaderMap,
    body: Bytes,
) -> impl IntoResponse {
    let Some(signature) = headers.get("stripe-signature").and_then(|h| h.to_str().ok()) else {
        return error_response(StatusCode::BAD_REQUEST, "Missing stripe-signature");
    };

    if !state.config.stripe_webhook_uuid.is_empty() && uuid != state.config.stripe_webhook_uuid {
        return error_response(StatusCode::BAD_REQUEST, "Unknown webhook endpoint");
    }

    if let Err(e) = verify_webhook_signature(
        &body,
        signature,
        &state.config.stripe_webhook_secret,
        chrono::Utc::now().timestamp(),
    ) {
        tracing::warn!("webhook signature rejected: {e}");
        return error_response(StatusCode::BAD_REQUEST, "Webhook processing error");
    }

    match process_event(&state, &body).await {
        Ok(()) => (StatusCode::OK, Json(serde_json::json!({ "received": true }))).into_response(),
        Err(e) => {
            tracing::warn!("webhook error: {e}");
            error_response(StatusCode::BAD_REQUEST, "Webhook processing error")
        }
    }
}

async fn process_event(state: &AppState, body: &[u8]) -> anyhow::Result<()> {
    let event: serde_json::Value = serde_json::from_slice(body)?;
    let event_type = event.get("type").and_then(|t| t.as_str()).unwrap_or_default();

    if event_type == "checkout.session.completed" {
        let object = event
            .pointer("/data/object")
            .ok_or_else(|| anyhow::anyhow!("event missing data.object"))?;
        let session: ProviderSession = serde_json::from_value(object.clone())?;
        if session.is_paid() {
            if let Err(e) = state.settlement.settle_paid_session(&session).await {
                anyhow::bail!("settlement failed: {e}");
            }
        }
    } else {
        tracing::debug!("ignoring webhook event type {event_type}");
    }

    Ok(())
}

fn error_response(status: StatusCode, message: &str) -> axum::response::Response {
    (status, Json(serde_json::json!({ "error": message }))).into_response()
}
