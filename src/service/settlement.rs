use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;
use sqlx::PgPool;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::booking::{Booking, BookingStatus};
use crate::domain::payment::{Payment, PaymentStatus};
use crate::error::ApiError;
use crate::gateways::{CheckoutProvider, CheckoutRequest, ProviderSession, SessionMetadata};
use crate::repo::bookings_repo::BookingsRepo;
use crate::repo::events_repo::EventsRepo;
use crate::repo::payments_repo::{CompletedPaymentInput, PaymentsRepo};
use crate::repo::vendors_repo::VendorsRepo;

const CURRENCY: &str = "inr";

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutResponse {
    pub url: String,
    pub session_id: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifyResponse {
    pub success: bool,
    pub payment_status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub already_processed: Option<bool>,
}

/// What settlement should do for a paid session, given the booking's
/// current status and the payments already recorded against it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettlementAction {
    /// A completed payment for this session already exists; write nothing.
    AlreadyProcessed,
    /// First confirmation: record the payment and spend, advancing the
    /// booking only when it is still pending. A booking moved on by the
    /// vendor keeps its status but the money is still recorded.
    Record { advance_booking: bool },
}

pub fn plan_settlement(
    booking_status: BookingStatus,
    existing_payments: &[Payment],
    session_id: &str,
) -> SettlementAction {
    let already = existing_payments.iter().any(|p| {
        p.stripe_session_id.as_deref() == Some(session_id) && p.status == PaymentStatus::Completed
    });
    if already {
        return SettlementAction::AlreadyProcessed;
    }
    SettlementAction::Record {
        advance_booking: booking_status == BookingStatus::Pending,
    }
}

/// Session metadata checks shared by the verify route and the webhook:
/// the embedded user must match the caller and a booking must be present.
pub fn authorize_session(session: &ProviderSession, acting_user: Uuid) -> Result<Uuid, ApiError> {
    let session_user = session
        .meta("userId")
        .and_then(|s| Uuid::parse_str(s).ok());
    if session_user != Some(acting_user) {
        return Err(ApiError::Forbidden(
            "Not authorized to verify this payment".to_string(),
        ));
    }
    booking_id_of(session)
}

pub fn booking_id_of(session: &ProviderSession) -> Result<Uuid, ApiError> {
    session
        .meta("bookingId")
        .and_then(|s| Uuid::parse_str(s).ok())
        .ok_or_else(|| ApiError::BadRequest("Invalid session - no booking associated".to_string()))
}

/// Rupees to paise for the provider's unit_amount field. Midpoints round
/// away from zero.
pub fn amount_to_minor(amount: Decimal) -> Result<i64, ApiError> {
    (amount * Decimal::from(100))
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_i64()
        .ok_or_else(|| ApiError::Validation("Booking amount out of range".to_string()))
}

#[derive(Clone)]
pub struct SettlementService {
    pub pool: PgPool,
    pub bookings_repo: BookingsRepo,
    pub payments_repo: PaymentsRepo,
    pub events_repo: EventsRepo,
    pub vendors_repo: VendorsRepo,
    pub provider: Arc<dyn CheckoutProvider>,
    pub app_url: String,
}

impl SettlementService {
    /// Create the external checkout session for a booking. No local rows
    /// are written here; everything durable happens at verification.
    pub async fn initiate_checkout(
        &self,
        booking_id: Uuid,
        acting_user: Uuid,
    ) -> Result<CheckoutResponse, ApiError> {
        let booking = self
            .bookings_repo
            .get(booking_id)
            .await?
            .ok_or_else(|| ApiError::NotFound("Booking not found".to_string()))?;

        if booking.user_id != acting_user {
            return Err(ApiError::Forbidden("Not authorized".to_string()));
        }

        let vendor = self
            .vendors_repo
            .get(booking.vendor_id)
            .await?
            .ok_or_else(|| ApiError::NotFound("Vendor not found".to_string()))?;

        let request = CheckoutRequest {
            product_name: format!("{} - {}", vendor.business_name, booking.service_name),
            product_description: "Booking for event services".to_string(),
            amount_minor: amount_to_minor(booking.amount)?,
            currency: CURRENCY.to_string(),
            success_url: format!(
                "{}/payment/success?session_id={{CHECKOUT_SESSION_ID}}&booking_id={}",
                self.app_url, booking_id
            ),
            cancel_url: format!("{}/payment/cancel?booking_id={}", self.app_url, booking_id),
            metadata: SessionMetadata::new(booking.id, booking.user_id, booking.vendor_id),
        };

        let session = self
            .provider
            .create_checkout_session(request)
            .await
            .map_err(|e| {
                tracing::error!("checkout session create failed: {e}");
                ApiError::Provider("Failed to create checkout session".to_string())
            })?;

        Ok(CheckoutResponse {
            url: session.url,
            session_id: session.session_id,
        })
    }

    /// Verify a checkout session on behalf of its owner and settle it if
    /// the provider reports it paid. Safe to call any number of times.
    pub async fn verify_payment(
        &self,
        session_id: &str,
        acting_user: Uuid,
    ) -> Result<VerifyResponse, ApiError> {
        if session_id.is_empty() {
            return Err(ApiError::BadRequest("Session ID is required".to_string()));
        }

        let session = self
            .provider
            .retrieve_checkout_session(session_id)
            .await
            .map_err(|e| {
                tracing::error!("checkout session retrieve failed: {e}");
                ApiError::Provider("Failed to verify payment".to_string())
            })?;

        authorize_session(&session, acting_user)?;

        if !session.is_paid() {
            return Ok(VerifyResponse {
                success: false,
                payment_status: session.payment_status,
                already_processed: None,
            });
        }

        self.settle_paid_session(&session).await
    }

    /// Settlement core shared by verify, the webhook, and reconciliation.
    /// The three writes (booking advance, payment insert, spend update)
    /// commit atomically; a concurrent duplicate surfaces as the unique
    /// index violation and is reported as already processed.
    pub async fn settle_paid_session(
        &self,
        session: &ProviderSession,
    ) -> Result<VerifyResponse, ApiError> {
        let booking_id = booking_id_of(session)?;

        let booking = self
            .bookings_repo
            .get(booking_id)
            .await?
            .ok_or_else(|| ApiError::NotFound("Booking not found".to_string()))?;

        let existing = self.payments_repo.list_by_booking(booking_id).await?;
        match plan_settlement(booking.status, &existing, &session.id) {
            SettlementAction::AlreadyProcessed => Ok(already_processed()),
            SettlementAction::Record { advance_booking } => {
                self.record_settlement(&booking, session, advance_booking).await
            }
        }
    }

    async fn record_settlement(
        &self,
        booking: &Booking,
        session: &ProviderSession,
        advance_booking: bool,
    ) -> Result<VerifyResponse, ApiError> {
        let mut tx = self.pool.begin().await?;

        if advance_booking {
            BookingsRepo::advance_status_tx(
                &mut tx,
                booking.id,
                BookingStatus::Pending,
                BookingStatus::Accepted,
            )
            .await?;
        }

        let input = CompletedPaymentInput {
            booking_id: booking.id,
            user_id: booking.user_id,
            vendor_id: booking.vendor_id,
            amount: booking.amount,
            stripe_payment_id: session.payment_intent.clone(),
            stripe_session_id: session.id.clone(),
            paid_at: chrono::Utc::now(),
        };

        if let Err(e) = PaymentsRepo::insert_completed_tx(&mut tx, &input).await {
            if is_duplicate_settlement(&e) {
                tx.rollback().await?;
                return Ok(already_processed());
            }
            return Err(e.into());
        }

        EventsRepo::add_spent_amount_tx(&mut tx, booking.event_id, booking.amount).await?;

        tx.commit().await?;

        tracing::info!(
            booking_id = %booking.id,
            session_id = %session.id,
            amount = %booking.amount,
            "payment settled"
        );

        Ok(VerifyResponse {
            success: true,
            payment_status: "paid".to_string(),
            already_processed: None,
        })
    }
}

fn already_processed() -> VerifyResponse {
    VerifyResponse {
        success: true,
        payment_status: "paid".to_string(),
        already_processed: Some(true),
    }
}

fn is_duplicate_settlement(e: &anyhow::Error) -> bool {
    e.downcast_ref::<sqlx::Error>()
        .and_then(|e| e.as_database_error())
        .and_then(|db| db.constraint())
        == Some("payments_session_completed_idx")
}
