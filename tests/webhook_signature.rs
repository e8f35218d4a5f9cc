use hmac::{Hmac, Mac};
use sha2::Sha256;

use eventmate::gateways::stripe::verify_webhook_signature;

type HmacSha256 = Hmac<Sha256>;

const SECRET: &str = "whsec_test_secret";

fn sign(payload: &[u8], secret: &str, timestamp: i64) -> String {
    let mut mac = HmacSha256::new_from_slice(secret.as_bytes()).unwrap();
    mac.update(format!("{timestamp}.").as_bytes());
    mac.update(payload);
    format!("t={},v1={}", timestamp, hex::encode(mac.finalize().into_bytes()))
}

#[test]
fn valid_signature_is_accepted() {
    let payload = br#"{"type":"checkout.session.completed"}"#;
    let now = 1_700_000_000;
    let header = sign(payload, SECRET, now);
    assert!(verify_webhook_signature(payload, &header, SECRET, now).is_ok());
}

#[test]
fn tampered_payload_is_rejected() {
    let now = 1_700_000_000;
    let header = sign(br#"{"amount":100}"#, SECRET, now);
    assert!(verify_webhook_signature(br#"{"amount":999}"#, &header, SECRET, now).is_err());
}

#[test]
fn wrong_secret_is_rejected() {
    let payload = b"{}";
    let now = 1_700_000_000;
    let header = sign(payload, "whsec_other", now);
    assert!(verify_webhook_signature(payload, &header, SECRET, now).is_err());
}

#[test]
fn stale_timestamp_is_rejected() {
    let payload = b"{}";
    let signed_at = 1_700_000_000;
    let header = sign(payload, SECRET, signed_at);
    // 10 minutes later, beyond the 5 minute tolerance.
    assert!(verify_webhook_signature(payload, &header, SECRET, signed_at + 600).is_err());
}

#[test]
fn malformed_header_is_rejected() {
    let payload = b"{}";
    let now = 1_700_000_000;
    assert!(verify_webhook_signature(payload, "", SECRET, now).is_err());
    assert!(verify_webhook_signature(payload, "t=abc,v1=zz", SECRET, now).is_err());
    assert!(verify_webhook_signature(payload, &format!("t={now}"), SECRET, now).is_err());
}

#[test]
fn extra_unknown_schemes_are_ignored() {
    let payload = b"{}";
    let now = 1_700_000_000;
    let header = format!("{},v0=deadbeef", sign(payload, SECRET, now));
    assert!(verify_webhook_signature(payload, &header, SECRET, now).is_ok());
}
