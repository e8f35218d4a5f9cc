use chrono::Utc;
use rust_decimal::Decimal;
use uuid::Uuid;

use eventmate::domain::booking::BookingStatus;
use eventmate::domain::payment::{Payment, PaymentStatus};
use eventmate::gateways::mock::MockProvider;
use eventmate::gateways::{CheckoutProvider, CheckoutRequest, SessionMetadata};
use eventmate::service::settlement::{
    amount_to_minor, authorize_session, plan_settlement, SettlementAction,
};

fn payment(session_id: Option<&str>, status: PaymentStatus) -> Payment {
    let now = Utc::now();
    Payment {
        id: Uuid::new_v4(),
        booking_id: Uuid::new_v4(),
        user_id: Uuid::new_v4(),
        vendor_id: Uuid::new_v4(),
        amount: Decimal::new(50_000_00, 2),
        status,
        stripe_payment_id: None,
        stripe_session_id: session_id.map(str::to_string),
        paid_at: None,
        created_at: now,
        updated_at: now,
    }
}

#[test]
fn first_paid_verification_advances_pending_booking() {
    let action = plan_settlement(BookingStatus::Pending, &[], "cs_1");
    assert_eq!(action, SettlementAction::Record { advance_booking: true });
}

#[test]
fn repeat_verification_short_circuits() {
    let existing = vec![payment(Some("cs_1"), PaymentStatus::Completed)];
    let action = plan_settlement(BookingStatus::Accepted, &existing, "cs_1");
    assert_eq!(action, SettlementAction::AlreadyProcessed);
}

#[test]
fn completed_payment_for_other_session_does_not_block() {
    // One booking can carry several attempts; only this session's
    // completed payment counts toward the short circuit.
    let existing = vec![
        payment(Some("cs_other"), PaymentStatus::Completed),
        payment(Some("cs_1"), PaymentStatus::Failed),
    ];
    let action = plan_settlement(BookingStatus::Pending, &existing, "cs_1");
    assert_eq!(action, SettlementAction::Record { advance_booking: true });
}

#[test]
fn vendor_decided_booking_is_recorded_without_status_change() {
    // A booking the vendor already accepted or completed still gets its
    // payment and spend recorded; only the status write is gated.
    for status in [
        BookingStatus::Accepted,
        BookingStatus::Rejected,
        BookingStatus::Completed,
        BookingStatus::Cancelled,
    ] {
        let action = plan_settlement(status, &[], "cs_1");
        assert_eq!(action, SettlementAction::Record { advance_booking: false });
    }
}

#[test]
fn session_user_mismatch_is_forbidden() {
    let owner = Uuid::new_v4();
    let stranger = Uuid::new_v4();
    let metadata = SessionMetadata::new(Uuid::new_v4(), owner, Uuid::new_v4());
    let session = MockProvider::paid_session("cs_1", &metadata, "pi_1");

    assert!(authorize_session(&session, owner).is_ok());

    let err = authorize_session(&session, stranger).unwrap_err();
    assert_eq!(err.status(), axum::http::StatusCode::FORBIDDEN);
}

#[test]
fn session_without_booking_is_bad_request() {
    let user = Uuid::new_v4();
    let mut session = MockProvider::paid_session(
        "cs_1",
        &SessionMetadata::new(Uuid::new_v4(), user, Uuid::new_v4()),
        "pi_1",
    );
    session.metadata.remove("bookingId");

    let err = authorize_session(&session, user).unwrap_err();
    assert_eq!(err.status(), axum::http::StatusCode::BAD_REQUEST);
}

#[test]
fn rupees_convert_to_paise() {
    assert_eq!(amount_to_minor(Decimal::new(50_000_00, 2)).unwrap(), 5_000_000);
    assert_eq!(amount_to_minor(Decimal::new(1_50, 2)).unwrap(), 150);
    // Midpoint sub-paisa amounts round away from zero.
    assert_eq!(amount_to_minor(Decimal::new(10_005, 3)).unwrap(), 1_001);
}

#[test]
fn spend_accumulates_exactly_once_per_settlement() {
    // Event budget Rs. 200,000 with Rs. 50,000 booking: the settled total
    // must come out of one application of the delta, not two.
    let budget = Decimal::new(200_000_00, 2);
    let amount = Decimal::new(50_000_00, 2);
    let mut spent = Decimal::ZERO;

    let first = plan_settlement(BookingStatus::Pending, &[], "cs_1");
    if matches!(first, SettlementAction::Record { .. }) {
        spent += amount;
    }
    let replayed = vec![payment(Some("cs_1"), PaymentStatus::Completed)];
    let second = plan_settlement(BookingStatus::Accepted, &replayed, "cs_1");
    if matches!(second, SettlementAction::Record { .. }) {
        spent += amount;
    }

    assert_eq!(spent, Decimal::new(50_000_00, 2));
    assert!(spent < budget);
}

#[tokio::test]
async fn mock_provider_round_trips_metadata() {
    let provider = MockProvider::new();
    let booking_id = Uuid::new_v4();
    let user_id = Uuid::new_v4();
    let vendor_id = Uuid::new_v4();

    let created = provider
        .create_checkout_session(CheckoutRequest {
            product_name: "Royal Gardens - Venue booking".to_string(),
            product_description: "Booking for event services".to_string(),
            amount_minor: 5_000_000,
            currency: "inr".to_string(),
            success_url: "http://localhost:5000/payment/success".to_string(),
            cancel_url: "http://localhost:5000/payment/cancel".to_string(),
            metadata: SessionMetadata::new(booking_id, user_id, vendor_id),
        })
        .await
        .unwrap();

    let session = provider.retrieve_checkout_session(&created.session_id).await.unwrap();
    assert!(!session.is_paid());
    assert_eq!(session.meta("bookingId"), Some(booking_id.to_string().as_str()));

    provider.mark_paid(&created.session_id, "pi_test");
    let session = provider.retrieve_checkout_session(&created.session_id).await.unwrap();
    assert!(session.is_paid());
    assert_eq!(session.payment_intent.as_deref(), Some("pi_test"));
}
